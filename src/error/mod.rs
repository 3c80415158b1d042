// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for ccheck.
//!
//! Malformed commit messages and failing rule checks are not errors: they
//! surface as parse results and verdicts. Only configuration problems and
//! commit data retrieval failures end up here, and both abort the run.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for ccheck operations.
#[derive(Error, Debug)]
pub enum CheckerError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Commit data source errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Rule construction errors
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    // The run completed but some commits were rejected
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Commit data source errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    #[error("Commit not found: {id}")]
    CommitNotFound { id: String },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::OpenFailed {
            message: err.message().to_string(),
        }
    }
}

/// Errors raised while building a rule set.
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("Invalid regex [{pattern}]: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Fallback rule #{index} needs a non-empty reason")]
    MissingReason { index: usize },

    #[error("Conditional rule #{index} needs a condition")]
    MissingCondition { index: usize },

    #[error("Rule #{index} is {kind} and cannot carry a condition")]
    UnexpectedCondition { index: usize, kind: String },
}

/// Outcome errors of a completed check run.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{failed} of {total} commit(s) failed the message check")]
    CommitsFailed { failed: usize, total: usize },
}

/// Result type alias for ccheck operations.
pub type Result<T> = std::result::Result<T, CheckerError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CheckerError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
