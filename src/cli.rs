use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Exasol SQL Normalizer - Rewrite Exasol dialect SQL into standard SQL
#[derive(Parser, Debug)]
#[command(name = "exasol-sql-normalizer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Normalize SQL files or stdin
    Normalize {
        /// Input SQL files (use - for stdin)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Write output to a file instead of stdout (single input only)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Rewrite the input files in place (required for multiple inputs)
        #[arg(short = 'i', long)]
        in_place: bool,

        /// Verify that the normalized output parses as standard SQL
        #[arg(long)]
        check: bool,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        format: Format,

        /// Path to configuration file
        #[arg(long, env = "SQL_NORMALIZER_CONFIG")]
        config: Option<PathBuf>,

        /// Print a per-stage rewrite summary to stderr
        #[arg(short, long)]
        verbose: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool
    }
}

#[derive(Debug, Clone, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Yaml
}
