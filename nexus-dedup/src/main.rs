//! nexus-dedup: prints the names shared by two name files.
//!
//! ```text
//! nexus-dedup --names-1 names_1.txt --names-2 names_2.txt --strategy tree
//! ```
//!
//! Logs go to stderr; set `RUST_LOG` (default `info`) to adjust.

mod cli;
mod run;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let report = run::run(&args)?;
    print!("{}", report.render());
    Ok(())
}
