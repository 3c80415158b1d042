// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Per-commit verdicts and the run result.

use super::checks::CheckFailure;

/// How a commit fared against the rule set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every required rule passed.
    Passed,
    /// A required rule failed but a fallback rule forgave it.
    Skipped {
        /// The fallback rule's declared reason.
        reason: String,
    },
    /// A required rule failed and no fallback applied. Carries the last
    /// failing required rule.
    Failed(CheckFailure),
}

/// The verdict for one commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Commit identifier.
    pub commit: String,
    pub outcome: Outcome,
}

impl Verdict {
    pub fn new(commit: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            commit: commit.into(),
            outcome,
        }
    }

    /// Passed outright or through a fallback rule.
    pub fn passed(&self) -> bool {
        !matches!(self.outcome, Outcome::Failed(_))
    }

    /// Whether the pass came from a fallback rule.
    pub fn is_fallback(&self) -> bool {
        matches!(self.outcome, Outcome::Skipped { .. })
    }

    /// Fallback reason when skipped, failure reason when failed.
    pub fn reason(&self) -> Option<&str> {
        match self.outcome {
            Outcome::Passed => None,
            Outcome::Skipped { ref reason } => Some(reason.as_str()),
            Outcome::Failed(ref failure) => Some(failure.reason.as_str()),
        }
    }

    pub fn suggestion(&self) -> Option<&str> {
        match self.outcome {
            Outcome::Failed(ref failure) => Some(failure.suggestion.as_str()),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<&'static str> {
        match self.outcome {
            Outcome::Failed(ref failure) => Some(failure.code),
            _ => None,
        }
    }

    /// Short status word used by reporters.
    pub fn status(&self) -> &'static str {
        match self.outcome {
            Outcome::Passed => "passed",
            Outcome::Skipped { .. } => "skipped",
            Outcome::Failed(_) => "failed",
        }
    }
}

/// Verdicts for a whole commit range, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunResult {
    verdicts: Vec<Verdict>,
}

impl RunResult {
    pub fn new(verdicts: Vec<Verdict>) -> Self {
        Self { verdicts }
    }

    /// True when every verdict passed. An empty run passes.
    pub fn passed(&self) -> bool {
        self.verdicts.iter().all(Verdict::passed)
    }

    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    pub fn failed_count(&self) -> usize {
        self.verdicts.iter().filter(|v| !v.passed()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.verdicts.iter().filter(|v| v.is_fallback()).count()
    }

    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.passed() {
            if self.skipped_count() == 0 {
                format!("Passed ({} commits)", self.len())
            } else {
                format!(
                    "Passed ({} commits, {} skipped)",
                    self.len(),
                    self.skipped_count()
                )
            }
        } else {
            format!(
                "Failed ({} of {} commits)",
                self.failed_count(),
                self.len()
            )
        }
    }
}
