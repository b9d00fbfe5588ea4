//! Command-Line Interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Signstream - Streaming sign-language gesture recognition
#[derive(Parser, Debug)]
#[command(name = "signstream")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a recorded session through the recognizer
    Run {
        /// JSONL file with per-frame detector output
        #[arg(short, long)]
        frames: PathBuf,

        /// JSONL file with recorded classifier probability vectors
        #[arg(short, long)]
        predictions: PathBuf,

        /// Model metadata JSON (overrides the configured labels_path)
        #[arg(short, long)]
        labels: Option<PathBuf>,

        /// Practice mode: score emissions against this target gesture
        #[arg(short, long)]
        target: Option<String>,

        /// Override the configured confidence floor
        #[arg(short, long)]
        min_confidence: Option<f32>,
    },

    /// Inspect a model metadata file's label set
    Labels {
        /// Path to metadata JSON
        path: PathBuf,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// View configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_command_parses() {
        let cli = Cli::try_parse_from([
            "signstream",
            "run",
            "--frames",
            "session.jsonl",
            "--predictions",
            "preds.jsonl",
            "--target",
            "A",
        ])
        .expect("should parse");

        match cli.command {
            Commands::Run {
                frames,
                target,
                min_confidence,
                ..
            } => {
                assert_eq!(frames, PathBuf::from("session.jsonl"));
                assert_eq!(target.as_deref(), Some("A"));
                assert!(min_confidence.is_none());
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let cli =
            Cli::try_parse_from(["signstream", "labels", "metadata.json", "--verbose"])
                .expect("should parse");
        assert!(cli.verbose);
    }
}
