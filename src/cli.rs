//! Command-line interface definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Ads analytics - seeds a campaign performance store and exports dashboard reports
#[derive(Debug, Parser)]
#[command(name = "ads-analytics")]
#[command(version)]
#[command(about = "Seed advertising metrics and export dashboard reports", long_about = None)]
pub struct Cli {
    /// Override the configured database URL (ADS_DATABASE_URL)
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Subcommand, PartialEq, Eq)]
pub enum Commands {
    /// Create the schema and load the sample dataset
    Init {
        /// Drop and recreate all tables before seeding
        #[arg(long)]
        reset: bool,
    },

    /// Run all reports against an initialized store and write the document
    Report {
        /// Output file (defaults to ADS_OUTPUT_PATH)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Initialize the store, then run all reports
    Run {
        #[arg(long)]
        reset: bool,

        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    /// The requested command; a bare invocation means `run` without reset.
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Run {
            reset: false,
            output: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_invocation_runs_everything() {
        let cli = Cli::try_parse_from(["ads-analytics"]).unwrap();
        assert_eq!(
            cli.command(),
            Commands::Run {
                reset: false,
                output: None
            }
        );
    }

    #[test]
    fn test_subcommands_parse() {
        let cli = Cli::try_parse_from(["ads-analytics", "init", "--reset"]).unwrap();
        assert_eq!(cli.command(), Commands::Init { reset: true });

        let cli = Cli::try_parse_from([
            "ads-analytics",
            "report",
            "-o",
            "out/dashboard.json",
            "--database-url",
            "sqlite::memory:",
        ])
        .unwrap();
        assert_eq!(cli.database_url.as_deref(), Some("sqlite::memory:"));
        assert_eq!(
            cli.command(),
            Commands::Report {
                output: Some(PathBuf::from("out/dashboard.json"))
            }
        );
    }
}
