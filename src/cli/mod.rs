//! Command-line interface definitions.

pub mod check;
pub mod output;
pub mod prompt;
pub mod run;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sigmascan - batch stock-price outlier detection.
#[derive(Parser, Debug)]
#[command(name = "sigmascan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan the exchange folders and write outlier reports
    Run(RunArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `sigmascan check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "sigmascan.toml")]
    pub config: PathBuf,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to configuration file (defaults to sigmascan.toml, which may
    /// be absent)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maximum number of files to process per exchange (prompted for when
    /// absent; must be a plain digit string)
    #[arg(long)]
    pub max_files: Option<String>,

    /// Override the input root containing per-exchange folders
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Override the directory the results root is created under
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Override the sample window size
    #[arg(long)]
    pub window: Option<usize>,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,

    /// Emit the run summary as JSON on stdout
    #[arg(long)]
    pub json: bool,
}
