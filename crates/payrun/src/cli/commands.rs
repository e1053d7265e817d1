//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use rust_decimal::Decimal;

/// Add command arguments.
///
/// Fields left off the command line are prompted for interactively.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Employee id
    #[arg(long)]
    pub id: Option<u32>,

    /// Employee name
    #[arg(long)]
    pub name: Option<String>,

    /// Basic monthly salary
    #[arg(long)]
    pub salary: Option<Decimal>,
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Run command arguments.
#[derive(Debug, Args)]
pub struct RunCommand {
    /// The month to generate payroll for (defaults to the current YYYY-MM)
    pub month: Option<String>,
}

/// History command arguments.
#[derive(Debug, Args)]
pub struct HistoryCommand {
    /// Show only payslips for this month
    #[arg(short, long)]
    pub month: Option<String>,

    /// Maximum number of payslips to show (most recent last)
    #[arg(short, long, default_value = "50")]
    pub limit: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output, one record per line
    Plain,
    /// Formatted table
    #[default]
    Table,
    /// JSON output
    Json,
}
