//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. Running with no subcommand
//! is equivalent to `vimax-doctor check`.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// vimax-doctor - Pre-flight environment checks for the ViMax pipeline.
#[derive(Debug, Parser)]
#[command(name = "vimax-doctor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Python interpreter to check (overrides discovery)
    #[arg(long, global = true, env = "VIMAX_PYTHON")]
    pub python: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run all environment checks (default if no command specified)
    Check(CheckArgs),

    /// List the required packages without probing anything
    Packages(PackagesArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `packages` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PackagesArgs {
    /// Output the requirement table as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
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
    fn no_args_means_no_subcommand() {
        let cli = Cli::parse_from(["vimax-doctor"]);
        assert!(cli.command.is_none());
        assert!(!cli.quiet);
        assert!(!cli.verbose);
    }

    #[test]
    fn check_json_flag_parses() {
        let cli = Cli::parse_from(["vimax-doctor", "check", "--json"]);
        match cli.command {
            Some(Commands::Check(args)) => assert!(args.json),
            _ => panic!("expected check subcommand"),
        }
    }

    #[test]
    fn global_flags_apply_after_subcommand() {
        let cli = Cli::parse_from(["vimax-doctor", "check", "--project", "/tmp", "--quiet"]);
        assert_eq!(cli.project, Some(PathBuf::from("/tmp")));
        assert!(cli.quiet);
    }

    #[test]
    fn python_flag_parses() {
        let cli = Cli::parse_from(["vimax-doctor", "--python", "/opt/py/bin/python"]);
        assert_eq!(cli.python, Some(PathBuf::from("/opt/py/bin/python")));
    }
}
