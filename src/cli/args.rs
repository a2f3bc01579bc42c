//! Command line argument parsing for the Umbra CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Umbra - dark pattern detection and transparency scoring
#[derive(Parser, Debug, Clone)]
#[command(name = "umbra")]
#[command(about = "Detect dark pattern language and score page transparency")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct UmbraArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl UmbraArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Classify fragments and produce a transparency report
    Analyze(AnalyzeArgs),
}

/// Arguments for the analyze command
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Input file: a JSON array of fragment strings (stdin if omitted)
    #[arg(value_name = "INPUT_FILE")]
    pub input: Option<PathBuf>,

    /// Presence-stage training data (JSON, labels "Dark"/"Not Dark")
    #[arg(long, value_name = "PRESENCE_FILE")]
    pub presence_data: PathBuf,

    /// Category-stage training data (JSON, category labels)
    #[arg(long, value_name = "CATEGORY_FILE")]
    pub category_data: PathBuf,

    /// Classify fragments in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Number of threads for parallel classification
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Transparency points deducted per detected pattern
    #[arg(long, default_value = "5")]
    pub pattern_penalty: u32,

    /// Minimum score for low risk
    #[arg(long, default_value = "80")]
    pub low_risk_threshold: u32,

    /// Minimum score for medium risk
    #[arg(long, default_value = "50")]
    pub medium_risk_threshold: u32,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
