// extractguard/src/cli.rs
//! This file defines the command-line interface (CLI) for the extractguard application,
//! including all available commands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "extractguard",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Score model-extracted fields and estimate privacy risk",
    long_about = "ExtractGuard checks the fields a language model extracted from a document against the document itself. It assigns each field a heuristic confidence score, estimates how identifying the extraction is, and summarises batches of earlier results.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for the extractguard crates)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// YAML file overriding the built-in scoring heuristics.
    #[arg(long = "config", value_name = "FILE", global = true, env = "EXTRACTGUARD_CONFIG", help = "Path to a YAML file overriding scoring parameters.")]
    pub config: Option<PathBuf>,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `extractguard` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scores a model response against its source document.
    #[command(about = "Scores a model response against its source document and estimates privacy risk.")]
    Score(ScoreCommand),

    /// Aggregates statistics over earlier extraction results.
    #[command(about = "Aggregates entity counts and average confidence over earlier extraction results.")]
    Stats(StatsCommand),

    /// Inspects the scoring configuration.
    #[command(subcommand, about = "Inspects the scoring configuration.")]
    Config(ConfigCommand),
}

/// Arguments for the `score` command.
#[derive(Parser, Debug)]
pub struct ScoreCommand {
    /// The source document the model extracted from.
    #[arg(long, short = 't', value_name = "FILE", help = "Path to the original document text.")]
    pub text: PathBuf,

    /// The model response (JSON object). Reads from stdin if not provided.
    #[arg(long, short = 'r', value_name = "FILE", help = "Path to the model's JSON response (reads stdin if omitted).")]
    pub response: Option<PathBuf>,

    /// Print the full result as JSON to stdout.
    #[arg(long = "json", conflicts_with = "json_file", help = "Print the enhanced result as JSON to stdout.")]
    pub json: bool,

    /// Write the full result as JSON to a file.
    #[arg(long = "json-file", value_name = "FILE", help = "Write the enhanced result as JSON to a file.")]
    pub json_file: Option<PathBuf>,

    /// Exit with code 2 if the risk before anonymization exceeds this percentage.
    #[arg(long = "fail-over-risk", value_name = "PCT", help = "Exit with a non-zero code if risk before anonymization exceeds PCT.")]
    pub fail_over_risk: Option<f64>,
}

/// Arguments for the `stats` command.
#[derive(Parser, Debug)]
pub struct StatsCommand {
    /// Extraction records as a JSON array, JSON Lines or concatenated JSON objects. Reads from stdin if not provided.
    #[arg(long, short = 'i', value_name = "FILE", help = "Read extraction records from a file instead of stdin.")]
    pub input: Option<PathBuf>,

    /// Print the statistics as JSON to stdout.
    #[arg(long = "json", help = "Print the batch statistics as JSON to stdout.")]
    pub json: bool,
}

/// Subcommands for the `config` command.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    #[command(about = "Prints the effective scoring configuration (defaults merged with --config).")]
    Show {
        /// Print as JSON instead of YAML.
        #[arg(long = "json", help = "Print the configuration as JSON instead of YAML.")]
        json: bool,
    },
}
