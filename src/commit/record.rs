// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The per-commit record the rule engine evaluates.

use super::subject::{parse_subject, ParsedSubject};
use super::trailers::{parse_trailers, TrailerSet};

/// Raw commit fields as delivered by a commit data source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCommit {
    pub id: String,
    pub author_email: String,
    pub subject: String,
    pub body: String,
    /// Trailer block already extracted from the body, one `Key: value` per line.
    pub trailers: String,
}

impl RawCommit {
    pub fn new(id: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            subject: subject.into(),
            ..Self::default()
        }
    }

    pub fn with_author_email(mut self, email: impl Into<String>) -> Self {
        self.author_email = email.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_trailers(mut self, trailers: impl Into<String>) -> Self {
        self.trailers = trailers.into();
        self
    }
}

/// A commit with its subject and trailers parsed. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    raw: RawCommit,
    subject: ParsedSubject,
    trailers: TrailerSet,
}

impl CommitRecord {
    pub fn new(raw: RawCommit) -> Self {
        let subject = parse_subject(&raw.subject);
        let trailers = parse_trailers(&raw.trailers);
        Self {
            raw,
            subject,
            trailers,
        }
    }

    pub fn id(&self) -> &str {
        &self.raw.id
    }

    pub fn author_email(&self) -> &str {
        &self.raw.author_email
    }

    pub fn raw_subject(&self) -> &str {
        &self.raw.subject
    }

    pub fn body(&self) -> &str {
        &self.raw.body
    }

    pub fn subject(&self) -> &ParsedSubject {
        &self.subject
    }

    pub fn trailers(&self) -> &TrailerSet {
        &self.trailers
    }
}

impl From<RawCommit> for CommitRecord {
    fn from(raw: RawCommit) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_parses_on_construction() {
        let record = CommitRecord::new(
            RawCommit::new("abc123", "fix(core): handle empty input")
                .with_author_email("dev@example.com")
                .with_body("Details.\n\nLog: handled")
                .with_trailers("Log: handled"),
        );

        assert_eq!(record.id(), "abc123");
        assert!(record.subject().valid);
        assert_eq!(record.subject().scope.as_deref(), Some("core"));
        assert_eq!(record.trailers().get("Log"), Some("handled"));
        assert_eq!(record.author_email(), "dev@example.com");
    }

    #[test]
    fn test_record_keeps_invalid_subject_raw() {
        let record: CommitRecord = RawCommit::new("abc123", "Update README").into();
        assert!(!record.subject().valid);
        assert_eq!(record.raw_subject(), "Update README");
        assert!(record.trailers().is_empty());
    }
}
