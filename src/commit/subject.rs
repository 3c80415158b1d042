// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Subject line parsing.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `[tag]type(scope)!: description`, tag/scope/`!` optional.
    ///
    /// Unanchored: the leftmost position where the pattern matches wins.
    /// `[[:word:]]` keeps the token classes ASCII-only. Scopes may nest
    /// with `/` and use `-` (`tools/sub-tool`).
    static ref SUBJECT_REGEX: Regex = Regex::new(
        r"(?s)(?:\[[[:word:] ]+\])?(?P<type>[[:word:]]+)(?:\((?P<scope>[[:word:]][[:word:]/\-]*)\))?(?P<breaking>!)?: (?P<description>.*)"
    ).unwrap();
}

/// A subject line split into its conventional-commit fields.
///
/// When `valid` is false every other field is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSubject {
    /// Whether the subject matched the conventional format.
    pub valid: bool,
    /// Commit type (feat, fix, chore, ...), kept as written.
    pub commit_type: String,
    /// Optional scope, may contain `/` for nested scopes.
    pub scope: Option<String>,
    /// Everything after `": "`, newlines included.
    pub description: String,
    /// Whether the `!` breaking marker was present.
    pub breaking: bool,
}

impl ParsedSubject {
    /// The parse result for a subject that does not match.
    pub fn invalid() -> Self {
        Self::default()
    }
}

/// Parse a raw subject line. Never fails: a non-matching subject yields
/// [`ParsedSubject::invalid`].
pub fn parse_subject(raw: &str) -> ParsedSubject {
    let Some(captures) = SUBJECT_REGEX.captures(raw) else {
        return ParsedSubject::invalid();
    };

    let description = captures
        .name("description")
        .map(|m| m.as_str())
        .unwrap_or("");

    // "fix: " has a type but nothing to describe
    if description.is_empty() {
        return ParsedSubject::invalid();
    }

    ParsedSubject {
        valid: true,
        commit_type: captures
            .name("type")
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
        scope: captures.name("scope").map(|m| m.as_str().to_string()),
        description: description.to_string(),
        breaking: captures.name("breaking").is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid(commit_type: &str, scope: Option<&str>, description: &str) -> ParsedSubject {
        ParsedSubject {
            valid: true,
            commit_type: commit_type.to_string(),
            scope: scope.map(str::to_string),
            description: description.to_string(),
            breaking: false,
        }
    }

    #[test]
    fn test_regular_subject() {
        assert_eq!(
            parse_subject("chore: regular description"),
            valid("chore", None, "regular description")
        );
    }

    #[test]
    fn test_upper_case_description() {
        assert_eq!(
            parse_subject("chore: Regular Description"),
            valid("chore", None, "Regular Description")
        );
    }

    #[test]
    fn test_symbols_in_description() {
        assert_eq!(
            parse_subject("chore: description `symbol`..."),
            valid("chore", None, "description `symbol`...")
        );
    }

    #[test]
    fn test_two_line_subject() {
        assert_eq!(
            parse_subject("chore: regular description\nnew line"),
            valid("chore", None, "regular description\nnew line")
        );
    }

    #[test]
    fn test_missing_space_after_colon() {
        assert_eq!(
            parse_subject("chore:regular description"),
            ParsedSubject::invalid()
        );
    }

    #[test]
    fn test_with_scope() {
        assert_eq!(
            parse_subject("chore(doc): regular description"),
            valid("chore", Some("doc"), "regular description")
        );
    }

    #[test]
    fn test_with_tag_and_scope() {
        assert_eq!(
            parse_subject("[skip test]chore(doc): regular description"),
            valid("chore", Some("doc"), "regular description")
        );
    }

    #[test]
    fn test_no_separator() {
        assert_eq!(
            parse_subject("chore regular description"),
            ParsedSubject::invalid()
        );
    }

    #[test]
    fn test_nested_scope() {
        assert_eq!(
            parse_subject("chore(tools/some-tools): xxx"),
            valid("chore", Some("tools/some-tools"), "xxx")
        );
    }

    #[test]
    fn test_scope_must_start_with_word_char() {
        assert_eq!(parse_subject("chore(/tools): xxx"), ParsedSubject::invalid());
    }

    #[test]
    fn test_breaking_marker() {
        let parsed = parse_subject("feat(api)!: drop v1 endpoints");
        assert!(parsed.valid);
        assert!(parsed.breaking);
        assert_eq!(parsed.scope.as_deref(), Some("api"));
        assert_eq!(parsed.description, "drop v1 endpoints");
    }

    #[test]
    fn test_empty_description_is_invalid() {
        assert_eq!(parse_subject("fix: "), ParsedSubject::invalid());
        assert_eq!(parse_subject(""), ParsedSubject::invalid());
    }

    #[test]
    fn test_merge_subject_is_invalid() {
        let parsed = parse_subject("Merge pull request #61 from someuser/somebranch");
        assert!(!parsed.valid);
        assert!(parsed.commit_type.is_empty());
    }
}
