// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! ccheck - Conventional commit message checker
//!
//! Checks commit messages against a rule set and reports a verdict per
//! commit.
//!
//! # Rules
//!
//! - **Required** rules must all pass.
//! - **Conditional** rules become required when their condition holds for
//!   the commit (for example an author email domain).
//! - **Fallback** rules are consulted when a required rule fails; the first
//!   one that passes forgives the commit and its reason is reported.
//!
//! # Example
//!
//! ```
//! use ccheck::commit::RawCommit;
//! use ccheck::git::MemorySource;
//! use ccheck::rules::RuleEngine;
//!
//! let source = MemorySource::new(vec![
//!     RawCommit::new("a1", "feat(core): add parser").with_body("Details."),
//!     RawCommit::new("b2", "Merge pull request #61 from someuser/somebranch"),
//! ]);
//!
//! let engine = RuleEngine::default();
//! let result = engine
//!     .check_commits(&source, &["a1".to_string(), "b2".to_string()])
//!     .unwrap();
//!
//! assert!(result.passed());
//! assert_eq!(result.skipped_count(), 1);
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod report;
pub mod rules;

// Re-exports for convenience
pub use config::CheckerConfig;
pub use error::{CheckerError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of ccheck.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        let short = |sha: &'static str| sha.get(..7).unwrap_or(sha);
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => format!("{} ({} {})", VERSION, short(sha), date),
            (Some(sha), None) => format!("{} ({})", VERSION, short(sha)),
            _ => VERSION.to_string(),
        }
    }
}
