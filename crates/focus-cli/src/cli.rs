use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for the `focus` binary.
#[derive(Debug, Parser)]
#[command(name = "focus", version, about = "Priority-ranked to-do list with a focus shortlist")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to ./focus.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rank a JSON task export and print the focus list and all tasks
    Rank {
        /// JSON array of task documents
        #[arg(short, long)]
        file: PathBuf,

        /// Focus list size, overrides `focus_limit` from config
        #[arg(short, long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },

    /// Print per-importance counts of a JSON task export
    Status {
        /// JSON array of task documents
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Run a scripted session against an in-memory store
    Demo,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn rank_parses_file_and_limit() {
        let cli = Cli::try_parse_from(["focus", "rank", "--file", "tasks.json", "--limit", "5"])
            .expect("cli should parse");

        match cli.command {
            Commands::Rank { file, limit } => {
                assert_eq!(file.to_str(), Some("tasks.json"));
                assert_eq!(limit, Some(5));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn negative_limit_reaches_validation() {
        let cli = Cli::try_parse_from(["focus", "rank", "-f", "t.json", "--limit", "-1"])
            .expect("cli should parse");

        assert!(matches!(cli.command, Commands::Rank { limit: Some(-1), .. }));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["focus", "demo", "--verbose", "--config", "alt.toml"])
            .expect("cli should parse");

        assert!(cli.verbose);
        assert!(!cli.quiet);
        assert_eq!(cli.config.as_deref().and_then(|p| p.to_str()), Some("alt.toml"));
        assert!(matches!(cli.command, Commands::Demo));
    }

    #[test]
    fn status_requires_file() {
        assert!(Cli::try_parse_from(["focus", "status"]).is_err());
    }
}
