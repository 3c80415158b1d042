// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Check predicates.

use regex::Regex;

use crate::commit::CommitRecord;

use super::model::Check;

const TRAILER_SUGGESTION: &str = "You can validate your trailers with `git interpret-trailers`";

/// Why a check rejected a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckFailure {
    /// Short code for programmatic handling.
    pub code: &'static str,
    /// One-line reason.
    pub reason: String,
    /// How to fix it.
    pub suggestion: String,
}

impl CheckFailure {
    fn new(code: &'static str, reason: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            code,
            reason: reason.into(),
            suggestion: suggestion.into(),
        }
    }
}

impl Check {
    /// Run the check against a commit. `None` means it passed.
    pub fn run(&self, commit: &CommitRecord) -> Option<CheckFailure> {
        match self {
            Check::ConventionalSubject => check_conventional_subject(commit),
            Check::TypeInRange(types) => check_type_in_range(commit, types),
            Check::RequireScope => check_require_scope(commit),
            Check::RequireBody => check_require_body(commit),
            Check::RequireTrailer(key) => check_require_trailer(commit, key),
            Check::StrictRequireTrailer(key) => check_strict_require_trailer(commit, key),
            Check::SubjectPattern(regex) => check_subject_pattern(commit, regex),
        }
    }
}

fn check_conventional_subject(commit: &CommitRecord) -> Option<CheckFailure> {
    if commit.subject().valid {
        return None;
    }

    Some(CheckFailure::new(
        "subject-invalid",
        "Invalid subject line",
        "check if your subject match the given format: `type: description` or `type(scope): description`",
    ))
}

/// An invalid subject has an empty type, which is never in range.
fn check_type_in_range(commit: &CommitRecord, types: &[String]) -> Option<CheckFailure> {
    let commit_type = commit.subject().commit_type.as_str();

    if types.iter().any(|t| t == commit_type) {
        return None;
    }

    Some(CheckFailure::new(
        "type-not-allowed",
        format!("Type [{}] is not allowed", commit_type),
        format!("Use one of: {}", types.join(", ")),
    ))
}

fn check_require_scope(commit: &CommitRecord) -> Option<CheckFailure> {
    if commit.subject().scope.is_some() {
        return None;
    }

    Some(CheckFailure::new(
        "scope-required",
        "Scope is required but not provided",
        "Add a scope in parentheses: `type(scope): description`",
    ))
}

fn check_require_body(commit: &CommitRecord) -> Option<CheckFailure> {
    if !commit.body().is_empty() {
        return None;
    }

    Some(CheckFailure::new(
        "body-empty",
        "Body is empty",
        "Body is required, please put some detail description about why this commit is needed",
    ))
}

fn check_require_trailer(commit: &CommitRecord, key: &str) -> Option<CheckFailure> {
    if commit.trailers().contains(key) {
        return None;
    }

    Some(CheckFailure::new(
        "trailer-missing",
        format!("Required trailer [{}] not found", key),
        TRAILER_SUGGESTION,
    ))
}

fn check_strict_require_trailer(commit: &CommitRecord, key: &str) -> Option<CheckFailure> {
    if commit.trailers().strict_contains(key) {
        return None;
    }

    Some(CheckFailure::new(
        "trailer-missing",
        format!("Required trailer [{}] or [{}]'s value not found", key, key),
        TRAILER_SUGGESTION,
    ))
}

/// Matches against the raw subject, not the parsed fields.
fn check_subject_pattern(commit: &CommitRecord, regex: &Regex) -> Option<CheckFailure> {
    if regex.is_match(commit.raw_subject()) {
        return None;
    }

    Some(CheckFailure::new(
        "subject-pattern",
        format!("Subject doesn't match regex [{}]", regex.as_str()),
        "Please check your subject line",
    ))
}
