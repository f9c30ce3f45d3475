use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::config::CandidateStrategy;

/// Lays out the pieces of a JSON layout request on a fixed-width roll
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// JSON layout request
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder to write the JSON result and SVG preview to
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Overrides the candidate strategy of the config
    #[arg(long, value_enum)]
    pub strategy: Option<CandidateStrategy>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
