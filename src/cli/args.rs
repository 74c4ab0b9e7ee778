//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "subscout")]
#[command(version)]
#[command(about = "Terminal results console for a remote subdomain-scan service", long_about = None)]
pub struct Cli {
    /// Domain to scan; omit to launch the interactive console
    #[arg(value_name = "DOMAIN")]
    pub domain: Option<String>,

    /// Interactive console mode
    #[arg(short, long)]
    pub interactive: bool,

    /// Worker threads the service should use
    #[arg(long, value_name = "N")]
    pub threads: Option<u32>,

    /// Per-probe timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Scan service base URL (overrides configuration)
    #[arg(long, value_name = "URL")]
    pub service_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Export results as CSV into the given directory
    #[arg(short, long, value_name = "DIR", num_args = 0..=1, default_missing_value = ".")]
    pub export: Option<PathBuf>,

    /// Load settings from a specific file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Styled result cards (default)
    Table,
    /// JSON output
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
