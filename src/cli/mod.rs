//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tradesim")]
#[command(author, version, about = "Simulated moving-average trading loop")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    /// Write logs to this file instead of stdout
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the simulated trading loop
    Run(RunArgs),
    /// List available strategies
    Strategies,
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct RunArgs {
    /// Symbol to trade
    #[arg(short, long)]
    pub symbol: Option<String>,

    /// Strategy to run
    #[arg(long)]
    pub strategy: Option<String>,

    /// Short moving-average window
    #[arg(long)]
    pub short_window: Option<usize>,

    /// Long moving-average window
    #[arg(long)]
    pub long_window: Option<usize>,

    /// Quantity per trade
    #[arg(short, long)]
    pub quantity: Option<f64>,

    /// Initial venue balance
    #[arg(long)]
    pub capital: Option<f64>,

    /// Seconds between iterations
    #[arg(short, long)]
    pub interval: Option<u64>,

    /// Number of iterations to run (runs until interrupted when omitted)
    #[arg(short = 'n', long)]
    pub iterations: Option<u64>,

    /// CSV data file to read closes from (overrides the configured source)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub output: String,
}
