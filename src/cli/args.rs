// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::builder::BoolishValueParser;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::report::OutputFormat;

/// ccheck - Conventional commit message checker
///
/// Checks every commit in a range against a rule set and exits non-zero
/// when any commit fails.
#[derive(Parser, Debug)]
#[command(name = "ccheck")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Conventional commit message checker", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to check if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Range options, accepted before or after any subcommand
    #[command(flatten)]
    pub check: CheckArgs,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format of the report
    #[arg(long, global = true, value_enum, env = "CCHECK_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Repository directory (defaults to the working directory)
    #[arg(long, global = true, env = "CCHECK_REPO_DIR")]
    pub repo_dir: Option<PathBuf>,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Check commit messages in a range (default command)
    Check,

    /// Print the effective rule set
    Rules,

    /// Initialize ccheck configuration
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the check command.
#[derive(Args, Debug, Default, Clone)]
pub struct CheckArgs {
    /// Start of the commit range (defaults to head)
    #[arg(long, global = true, env = "CCHECK_BASE_SHA")]
    pub base_sha: Option<String>,

    /// End of the commit range (defaults to the latest commit)
    #[arg(long, global = true, env = "CCHECK_HEAD_SHA")]
    pub head_sha: Option<String>,

    /// Leave the base commit out of the check [default: true]
    #[arg(
        long,
        global = true,
        env = "CCHECK_EXCLUDE_BASE",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub exclude_base: Option<bool>,
}

/// Arguments for the init command.
#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Get the effective command, defaulting to Check if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Check)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check() {
        let args = Cli::parse_from([
            "ccheck",
            "check",
            "--base-sha",
            "abc",
            "--head-sha",
            "def",
            "--exclude-base",
            "false",
        ]);
        assert!(matches!(args.command, Some(Commands::Check)));
        assert_eq!(args.check.base_sha.as_deref(), Some("abc"));
        assert_eq!(args.check.head_sha.as_deref(), Some("def"));
        assert_eq!(args.check.exclude_base, Some(false));
    }

    #[test]
    fn test_range_flags_before_subcommand() {
        let args = Cli::parse_from(["ccheck", "--base-sha", "abc", "check", "--head-sha", "def"]);
        assert!(matches!(args.effective_command(), Commands::Check));
        assert_eq!(args.check.base_sha.as_deref(), Some("abc"));
        assert_eq!(args.check.head_sha.as_deref(), Some("def"));
    }

    #[test]
    fn test_exclude_base_takes_a_value() {
        let args = Cli::parse_from(["ccheck", "--exclude-base", "no", "rules"]);
        assert!(matches!(args.command, Some(Commands::Rules)));
        assert_eq!(args.check.exclude_base, Some(false));

        assert!(Cli::try_parse_from(["ccheck", "--exclude-base", "rules"]).is_err());
        assert!(Cli::try_parse_from(["ccheck", "check", "--exclude-base"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let args = Cli::parse_from([
            "ccheck",
            "rules",
            "--format",
            "json",
            "--repo-dir",
            "/tmp/repo",
            "--debug",
        ]);
        assert!(matches!(args.command, Some(Commands::Rules)));
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.repo_dir, Some(PathBuf::from("/tmp/repo")));
        assert!(args.debug);
    }

    #[test]
    fn test_default_command() {
        let args = Cli::parse_from(["ccheck", "--base-sha", "abc"]);
        assert!(args.command.is_none());
        assert!(matches!(args.effective_command(), Commands::Check));
        assert_eq!(args.check.base_sha.as_deref(), Some("abc"));
        assert_eq!(args.check.exclude_base, None);
    }

    #[test]
    fn test_parse_init() {
        let args = Cli::parse_from(["ccheck", "init", "--force"]);
        assert!(matches!(
            args.command,
            Some(Commands::Init(InitArgs { force: true }))
        ));
    }
}
