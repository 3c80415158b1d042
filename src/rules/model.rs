// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule kinds, checks and the rule set.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::RuleError;

use super::condition::Condition;

/// Reason reported for commits created by the file sync workflow.
pub const SYNC_MERGE_REASON: &str = "Default merge commit caused by workflow sync";

/// Reason reported for GitHub's own merge commits.
pub const GITHUB_MERGE_REASON: &str = "Default GitHub auto merge commit message";

/// `File Sync from originname/branchname (#61)`
pub const SYNC_MERGE_PATTERN: &str = r"File Sync from [\w\-\.]+\/[\w\-\.]+ \(#[\d]+\)";

/// `Merge pull request #61 from originname/branchname` and
/// `Merge branch 'originname:branchname' into branchname`
pub const GITHUB_MERGE_PATTERN: &str =
    r"Merge (?:pull request #[\d]+ from [\w\-\.\/]+|branch '[\w\-\.:\/]+' into [\w\-\/])";

/// Author email fragment that activates the `Log` trailer requirement.
pub const LOG_TRAILER_DOMAIN: &str = "uniontech.com";

lazy_static! {
    static ref SYNC_MERGE_REGEX: Regex = Regex::new(SYNC_MERGE_PATTERN).unwrap();
    static ref GITHUB_MERGE_REGEX: Regex = Regex::new(GITHUB_MERGE_PATTERN).unwrap();
}

/// How a rule takes part in evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    /// Must pass; all required rules are AND-combined.
    Required,
    /// Tried only after a required rule failed; the first passing one wins.
    Fallback,
    /// Becomes required when its condition holds for the commit.
    Conditional,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Required => "required",
            RuleKind::Fallback => "fallback",
            RuleKind::Conditional => "conditional",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// What a rule verifies about a commit.
#[derive(Debug, Clone)]
pub enum Check {
    /// Subject follows `type(scope): description`.
    ConventionalSubject,
    /// Parsed type is one of the listed types.
    TypeInRange(Vec<String>),
    /// Parsed subject carries a scope.
    RequireScope,
    /// Body is non-empty (trailers count as body).
    RequireBody,
    /// Trailer key is present, value may be empty.
    RequireTrailer(String),
    /// Trailer key is present with a non-empty value.
    StrictRequireTrailer(String),
    /// Raw subject matches the regex.
    SubjectPattern(Regex),
}

impl Check {
    /// Build a subject pattern check, compiling the regex once.
    pub fn subject_pattern(pattern: &str) -> Result<Self, RuleError> {
        Regex::new(pattern)
            .map(Check::SubjectPattern)
            .map_err(|e| RuleError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })
    }

    /// Kebab-case name, as used in configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            Check::ConventionalSubject => "conventional-subject",
            Check::TypeInRange(_) => "type-in-range",
            Check::RequireScope => "require-scope",
            Check::RequireBody => "require-body",
            Check::RequireTrailer(_) => "require-trailer",
            Check::StrictRequireTrailer(_) => "strict-require-trailer",
            Check::SubjectPattern(_) => "subject-pattern",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Check::TypeInRange(types) => write!(f, "{} [{}]", self.name(), types.join(", ")),
            Check::RequireTrailer(key) | Check::StrictRequireTrailer(key) => {
                write!(f, "{} [{}]", self.name(), key)
            }
            Check::SubjectPattern(regex) => write!(f, "{} [{}]", self.name(), regex.as_str()),
            _ => write!(f, "{}", self.name()),
        }
    }
}

/// A single rule of the rule set.
#[derive(Debug, Clone)]
pub struct Rule {
    kind: RuleKind,
    condition: Option<Condition>,
    check: Check,
    reason: Option<String>,
}

impl Rule {
    pub fn required(check: Check) -> Self {
        Self {
            kind: RuleKind::Required,
            condition: None,
            check,
            reason: None,
        }
    }

    /// A fallback rule; `reason` is reported when it forgives a commit.
    pub fn fallback(reason: impl Into<String>, check: Check) -> Self {
        Self {
            kind: RuleKind::Fallback,
            condition: None,
            check,
            reason: Some(reason.into()),
        }
    }

    pub fn conditional(condition: Condition, check: Check) -> Self {
        Self {
            kind: RuleKind::Conditional,
            condition: Some(condition),
            check,
            reason: None,
        }
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    pub fn check(&self) -> &Check {
        &self.check
    }

    /// The fallback justification. `None` for other kinds.
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<11} ", self.kind)?;
        if let Some(ref condition) = self.condition {
            write!(f, "when {} then ", condition)?;
        }
        write!(f, "{}", self.check)?;
        if let Some(ref reason) = self.reason {
            write!(f, " (reason: {})", reason)?;
        }
        Ok(())
    }
}

/// The ordered, immutable list of rules applied to every commit.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The built-in rules used when the configuration defines none.
    pub fn builtin() -> Self {
        Self::new(vec![
            Rule::required(Check::ConventionalSubject),
            Rule::required(Check::RequireBody),
            Rule::conditional(
                Condition::AuthorEmail(LOG_TRAILER_DOMAIN.to_string()),
                Check::RequireTrailer("Log".to_string()),
            ),
            Rule::fallback(
                SYNC_MERGE_REASON,
                Check::SubjectPattern(SYNC_MERGE_REGEX.clone()),
            ),
            Rule::fallback(
                GITHUB_MERGE_REASON,
                Check::SubjectPattern(GITHUB_MERGE_REGEX.clone()),
            ),
        ])
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
