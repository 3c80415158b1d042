// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Property-based tests for the message parsers and the rule engine.

use proptest::prelude::*;

use ccheck::commit::{parse_subject, parse_trailers, CommitRecord, RawCommit};
use ccheck::rules::RuleEngine;

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9_]{1,12}").expect("valid regex")
}

fn scope_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9/\\-]{0,12}").expect("valid regex")
}

fn description_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9][a-zA-Z0-9 ,.]{0,40}").expect("valid regex")
}

proptest! {
    #[test]
    fn well_formed_subject_round_trips(
        commit_type in word_strategy(),
        scope in prop::option::of(scope_strategy()),
        breaking in any::<bool>(),
        description in description_strategy(),
    ) {
        let raw = format!(
            "{}{}{}: {}",
            commit_type,
            scope.as_ref().map(|s| format!("({})", s)).unwrap_or_default(),
            if breaking { "!" } else { "" },
            description,
        );
        let parsed = parse_subject(&raw);

        prop_assert!(parsed.valid);
        prop_assert_eq!(parsed.commit_type, commit_type);
        prop_assert_eq!(parsed.scope, scope);
        prop_assert_eq!(parsed.breaking, breaking);
        prop_assert_eq!(parsed.description, description);
    }

    #[test]
    fn subject_without_separator_is_invalid(raw in "[a-zA-Z0-9 ()!]{0,40}") {
        let parsed = parse_subject(&raw);
        prop_assert!(!parsed.valid);
        prop_assert!(parsed.commit_type.is_empty());
        prop_assert!(parsed.scope.is_none());
        prop_assert!(parsed.description.is_empty());
    }

    #[test]
    fn parse_subject_never_panics(raw in ".{0,80}") {
        let _ = parse_subject(&raw);
    }

    #[test]
    fn trailer_lines_are_kept_in_order(
        pairs in prop::collection::vec((word_strategy(), "[a-zA-Z0-9 ]{0,20}"), 0..6)
    ) {
        let raw = pairs
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<_>>()
            .join("\n");
        let trailers = parse_trailers(&raw);

        prop_assert_eq!(trailers.len(), pairs.len());
        for (trailer, (key, value)) in trailers.iter().zip(pairs.iter()) {
            prop_assert_eq!(&trailer.key, key);
            prop_assert_eq!(&trailer.value, value);
        }
    }

    #[test]
    fn evaluation_is_idempotent(
        subject in ".{0,60}",
        body in ".{0,60}",
        email in "[a-z]{1,8}@[a-z]{1,8}\\.com",
    ) {
        let commit = CommitRecord::from(
            RawCommit::new("abc", subject)
                .with_body(body)
                .with_author_email(email),
        );
        let engine = RuleEngine::default();

        prop_assert_eq!(engine.evaluate(&commit), engine.evaluate(&commit));
    }
}
