//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Path to scanned directory
    pub directory: PathBuf,

    /// Target language (overrides config file, can be repeated)
    #[arg(short, long = "lang", value_name = "CODE")]
    pub languages: Vec<String>,

    /// Do not write catalogs, exit with 1 if any of them is out of date
    #[arg(long)]
    pub check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
