// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::path::Path;

use crate::config::{example_config, CheckerConfig};
use crate::error::{CheckerError, ConfigError, Result, ResultExt, ValidationError};
use crate::git::{resolve_range, GitSource, RangeOptions};
use crate::report::{self, OutputFormat};
use crate::rules::RuleEngine;

use super::args::{CheckArgs, Cli, Commands, InitArgs};

/// Name of the file written by `ccheck init`.
const INIT_FILE: &str = "ccheck.toml";

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    // Load configuration, discovered from the checked repository if given
    let config = if let Some(config_path) = &cli.config {
        CheckerConfig::load_from(config_path)?
    } else if let Some(repo_dir) = &cli.repo_dir {
        CheckerConfig::load_in(repo_dir)?
    } else {
        CheckerConfig::load()?
    };

    // Dispatch to the appropriate command handler
    match cli.effective_command() {
        Commands::Check => run_check(&cli, &config, &cli.check),
        Commands::Rules => run_rules(&config),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Run the check command.
fn run_check(cli: &Cli, config: &CheckerConfig, args: &CheckArgs) -> Result<()> {
    tracing::debug!("Running check command with args: {:?}", args);

    let engine = RuleEngine::new(config.rule_set()?);
    let options = &config.options;

    let range = RangeOptions {
        base: args.base_sha.clone().or_else(|| options.base_sha.clone()),
        head: args.head_sha.clone().or_else(|| options.head_sha.clone()),
        exclude_base: args.exclude_base.unwrap_or(options.exclude_base),
    };

    let source = match cli.repo_dir.as_ref().or(options.repo_dir.as_ref()) {
        Some(dir) => GitSource::open(dir)?,
        None => GitSource::open_current()?,
    };

    let ids = resolve_range(&source, &range)?;
    let result = engine.check_commits(&source, &ids)?;

    let format = cli
        .format
        .or(options.format)
        .unwrap_or_else(OutputFormat::detect);
    report::print(&result, format);

    if result.passed() {
        Ok(())
    } else {
        Err(CheckerError::Validation(ValidationError::CommitsFailed {
            failed: result.failed_count(),
            total: result.len(),
        }))
    }
}

/// Print the effective rule set.
fn run_rules(config: &CheckerConfig) -> Result<()> {
    let rules = config.rule_set()?;
    let source = if config.rules.is_empty() {
        "built-in"
    } else {
        "configured"
    };

    println!("Rules ({}, {}):", source, rules.len());
    for (i, rule) in rules.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, rule);
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = Path::new(INIT_FILE);

    if config_path.exists() && !args.force {
        return Err(CheckerError::Config(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }));
    }

    std::fs::write(config_path, example_config())
        .context(format!("Failed to write {}", INIT_FILE))?;

    println!("Created {}", INIT_FILE);
    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("ccheck {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}
