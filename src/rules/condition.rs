// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Activation conditions for conditional rules.

use regex::Regex;
use std::fmt;

use crate::commit::CommitRecord;
use crate::error::RuleError;

/// When a conditional rule applies. New kinds only need a `holds` arm.
#[derive(Debug, Clone)]
pub enum Condition {
    /// Author email contains this text.
    AuthorEmail(String),
    /// Author email matches this regex.
    AuthorEmailPattern(Regex),
}

impl Condition {
    pub fn author_email_pattern(pattern: &str) -> Result<Self, RuleError> {
        Regex::new(pattern)
            .map(Condition::AuthorEmailPattern)
            .map_err(|e| RuleError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })
    }

    /// Whether the condition holds for the commit.
    pub fn holds(&self, commit: &CommitRecord) -> bool {
        match self {
            Condition::AuthorEmail(fragment) => commit.author_email().contains(fragment.as_str()),
            Condition::AuthorEmailPattern(regex) => regex.is_match(commit.author_email()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Condition::AuthorEmail(_) => "author-email",
            Condition::AuthorEmailPattern(_) => "author-email-pattern",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::AuthorEmail(fragment) => {
                write!(f, "{} contains \"{}\"", self.name(), fragment)
            }
            Condition::AuthorEmailPattern(regex) => {
                write!(f, "{} matches [{}]", self.name(), regex.as_str())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commit::RawCommit;

    fn commit_by(email: &str) -> CommitRecord {
        RawCommit::new("abc", "fix: x")
            .with_author_email(email)
            .into()
    }

    #[test]
    fn test_author_email_substring() {
        let condition = Condition::AuthorEmail("uniontech.com".to_string());
        assert!(condition.holds(&commit_by("dev@uniontech.com")));
        assert!(!condition.holds(&commit_by("dev@example.com")));
    }

    #[test]
    fn test_empty_fragment_always_holds() {
        let condition = Condition::AuthorEmail(String::new());
        assert!(condition.holds(&commit_by("")));
    }

    #[test]
    fn test_author_email_pattern() {
        let condition = Condition::author_email_pattern(r"@(corp|internal)\.example$").unwrap();
        assert!(condition.holds(&commit_by("a@corp.example")));
        assert!(!condition.holds(&commit_by("a@corp.example.org")));
    }

    #[test]
    fn test_invalid_email_pattern() {
        assert!(Condition::author_email_pattern("[").is_err());
    }
}
