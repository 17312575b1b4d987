//! CLI command definitions for the `tlens` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod ask;
pub mod chat;
pub mod rules;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Chat with the TrustLens legal-help assistant.
#[derive(Parser)]
#[command(name = "tlens", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config.toml (defaults to $TRUSTLENS_HOME/config.toml or ~/.trustlens/config.toml).
    #[arg(long, global = true, env = "TRUSTLENS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Export spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session.
    Chat,

    /// Ask a single question and print the assistant's reply.
    Ask {
        /// Question text (multiple words are joined with spaces).
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Show the rule table in priority order.
    Rules,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn ask_collects_all_words() {
        let cli = Cli::try_parse_from(["tlens", "ask", "what", "is", "criminal", "law"]).unwrap();
        match cli.command {
            Commands::Ask { text } => assert_eq!(text.join(" "), "what is criminal law"),
            _ => panic!("expected ask"),
        }
    }

    #[test]
    fn ask_requires_text() {
        assert!(Cli::try_parse_from(["tlens", "ask"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["tlens", "rules", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Rules));
    }

    #[test]
    fn config_flag_parses_path() {
        let cli = Cli::try_parse_from(["tlens", "--config", "/tmp/tl.toml", "chat"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/tl.toml")));
    }
}
