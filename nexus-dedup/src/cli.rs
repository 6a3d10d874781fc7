//! Command-line configuration.
//!
//! Every flag can also be set through its environment variable.

use std::path::PathBuf;

use clap::Parser;
use nexus_classic::Strategy;

#[derive(Debug, Clone, Parser)]
#[command(name = "nexus-dedup")]
#[command(about = "Lists the names that appear in both name files")]
#[command(version)]
pub struct Args {
    /// File whose names seed the search tree, one per line
    #[arg(long = "names-1", env = "NEXUS_DEDUP_NAMES_1", default_value = "names_1.txt")]
    pub names_1: PathBuf,

    /// File whose names are looked up, one per line
    #[arg(long = "names-2", env = "NEXUS_DEDUP_NAMES_2", default_value = "names_2.txt")]
    pub names_2: PathBuf,

    /// Lookup structure: tree or set
    #[arg(long, env = "NEXUS_DEDUP_STRATEGY", default_value_t = Strategy::Tree)]
    pub strategy: Strategy,

    /// How many of the most recent duplicates to keep for the summary
    #[arg(long, env = "NEXUS_DEDUP_HISTORY", default_value_t = 10)]
    pub history: usize,
}
