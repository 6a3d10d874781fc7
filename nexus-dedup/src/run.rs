//! Reads both name files, finds the shared names, and renders the summary.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use nexus_classic::{RingBuffer, find_duplicates};
use tracing::{debug, info};

use crate::cli::Args;

/// Outcome of one run.
#[derive(Debug)]
pub struct Report {
    /// Every duplicate, in the order found.
    pub duplicates: Vec<String>,
    /// The last `--history` duplicates, oldest first.
    pub recent: Vec<String>,
    /// Wall-clock time spent reading and searching.
    pub elapsed: Duration,
}

impl Report {
    /// Formats the summary printed to stdout.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "{} duplicates:\n\n{}\n\n",
            self.duplicates.len(),
            self.duplicates.join(", ")
        );
        if !self.recent.is_empty() {
            let _ = writeln!(out, "most recent: {}", self.recent.join(", "));
        }
        let _ = writeln!(out, "runtime: {} seconds", self.elapsed.as_secs_f64());
        out
    }
}

/// Reads one name per line, skipping blank lines.
pub fn read_names(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read names from {}", path.display()))?;

    let names: Vec<String> = contents
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();

    debug!(path = %path.display(), count = names.len(), "names loaded");
    Ok(names)
}

pub fn run(args: &Args) -> Result<Report> {
    let mut recent = RingBuffer::new(args.history).context("invalid --history")?;

    let start = Instant::now();
    let names_1 = read_names(&args.names_1)?;
    let names_2 = read_names(&args.names_2)?;

    let duplicates = find_duplicates(&names_1, &names_2, args.strategy);
    for name in &duplicates {
        recent.append(*name);
    }
    let elapsed = start.elapsed();

    info!(
        strategy = %args.strategy,
        duplicates = duplicates.len(),
        elapsed_ms = elapsed.as_millis() as u64,
        "search finished"
    );

    Ok(Report {
        duplicates: duplicates.iter().map(|name| name.to_string()).collect(),
        recent: recent.chronological().map(|name| name.to_string()).collect(),
        elapsed,
    })
}
