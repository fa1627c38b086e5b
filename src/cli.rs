//! Command-line arguments.

use clap::Parser;
use polscan_config::Config;
use std::path::PathBuf;

/// Scan policy manual folders and export document metadata to CSV.
///
/// With no arguments, documents are read from `RAW_DOCUMENTS_PATH` (default
/// `./data/raw`) and the table is written to `PROCESSED_DOCUMENTS_PATH`
/// (default `./data/processed`).
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Directory containing one folder per policy manual
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
    /// Directory to write `document_metadata.csv` into
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,
    /// TOML file with `root_directory` and/or `output_directory`
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Don't print the summary report
    #[arg(long, short)]
    pub quiet: bool,
}
impl Cli {
    /// Applies command-line overrides on top of the loaded configuration.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(root) = &self.root {
            config = config.with_root_directory(root);
        }
        if let Some(output) = &self.output {
            config = config.with_output_directory(output);
        }
        config
    }
}
