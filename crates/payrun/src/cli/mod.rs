//! Command-line interface for payrun.
//!
//! This module provides the CLI structure and command definitions for the
//! `payrun` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AddCommand, ConfigCommand, HistoryCommand, ListCommand, OutputFormat, RunCommand,
    StatusCommand,
};

/// payrun - record employees and generate monthly payroll
///
/// A single-user payroll utility that keeps employee records and payroll
/// runs in append-only CSV files. Run without a subcommand to get an
/// interactive menu.
#[derive(Debug, Parser)]
#[command(name = "payrun")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute; omit for the interactive menu
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add an employee to the store
    Add(AddCommand),

    /// List employees on file
    List(ListCommand),

    /// Generate payroll for a month
    Run(RunCommand),

    /// Show recorded payslips
    History(HistoryCommand),

    /// Show store paths, record counts, and configured rates
    Status(StatusCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cli_verify() {
        // Verify the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "payrun");
    }

    #[test]
    fn test_verbosity_quiet_wins() {
        let cli = Cli::try_parse_from(["payrun", "-q", "-v", "list"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_levels() {
        let cli = Cli::try_parse_from(["payrun", "list"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Normal);

        let cli = Cli::try_parse_from(["payrun", "-v", "list"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Verbose);

        let cli = Cli::try_parse_from(["payrun", "-vv", "list"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Trace);
    }

    #[test]
    fn test_parse_no_subcommand() {
        let cli = Cli::try_parse_from(["payrun"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_add_with_fields() {
        let cli = Cli::try_parse_from([
            "payrun", "add", "--id", "7", "--name", "Asha", "--salary", "45000.50",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Add(cmd)) => {
                assert_eq!(cmd.id, Some(7));
                assert_eq!(cmd.name.as_deref(), Some("Asha"));
                assert_eq!(cmd.salary, Some(dec!(45000.50)));
            }
            other => panic!("expected add command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_run_with_month() {
        let cli = Cli::try_parse_from(["payrun", "run", "2026-08"]).unwrap();
        match cli.command {
            Some(Command::Run(cmd)) => assert_eq!(cmd.month.as_deref(), Some("2026-08")),
            other => panic!("expected run command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_run_without_month() {
        let cli = Cli::try_parse_from(["payrun", "run"]).unwrap();
        match cli.command {
            Some(Command::Run(cmd)) => assert!(cmd.month.is_none()),
            other => panic!("expected run command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_history_filters() {
        let cli =
            Cli::try_parse_from(["payrun", "history", "--month", "2026-08", "--limit", "5"])
                .unwrap();
        match cli.command {
            Some(Command::History(cmd)) => {
                assert_eq!(cmd.month.as_deref(), Some("2026-08"));
                assert_eq!(cmd.limit, 5);
            }
            other => panic!("expected history command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_status() {
        let cli = Cli::try_parse_from(["payrun", "status", "--json"]).unwrap();
        match cli.command {
            Some(Command::Status(cmd)) => assert!(cmd.json),
            other => panic!("expected status command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_with_config() {
        let cli = Cli::try_parse_from(["payrun", "-c", "/custom/config.toml", "list"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_invalid_salary_rejected() {
        let result = Cli::try_parse_from(["payrun", "add", "--salary", "lots"]);
        assert!(result.is_err());
    }
}
