//! CLI module - Command-line interface for the clinic server
//!
//! This module provides a structured CLI using clap for argument parsing.

use clap::{Parser, Subcommand};

/// Clinic - online appointment booking
#[derive(Parser)]
#[command(name = "clinic")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the web server (default)
    #[command(alias = "s")]
    Serve,

    /// Create the schema, seed empty tables and print row counts
    Init,

    /// Write a config.toml with default settings if none exists
    InitConfig,

    /// List booked appointments, newest first
    #[command(alias = "ls")]
    Appointments,
}

impl Cli {
    #[must_use]
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default() {
        let cli = Cli::try_parse_from(["clinic"]).unwrap();
        assert_eq!(cli.command(), Commands::Serve);
    }

    #[test]
    fn parses_subcommands_and_aliases() {
        let cli = Cli::try_parse_from(["clinic", "init"]).unwrap();
        assert_eq!(cli.command(), Commands::Init);

        let cli = Cli::try_parse_from(["clinic", "ls"]).unwrap();
        assert_eq!(cli.command(), Commands::Appointments);

        let cli = Cli::try_parse_from(["clinic", "init-config"]).unwrap();
        assert_eq!(cli.command(), Commands::InitConfig);
    }

    #[test]
    fn rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["clinic", "drop-tables"]).is_err());
    }
}
