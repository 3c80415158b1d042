// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use crate::commit::CommitRecord;
use crate::error::Result;
use crate::git::CommitSource;

use super::checks::CheckFailure;
use super::model::{Rule, RuleKind, RuleSet};
use super::verdict::{Outcome, RunResult, Verdict};

/// Rules of one commit split by kind, declaration order kept.
#[derive(Debug, Default)]
struct Buckets<'a> {
    required: Vec<&'a Rule>,
    fallback: Vec<&'a Rule>,
    conditional: Vec<&'a Rule>,
}

impl<'a> Buckets<'a> {
    fn partition(rules: &'a RuleSet) -> Self {
        let mut buckets = Self::default();
        for rule in rules {
            match rule.kind() {
                RuleKind::Required => buckets.required.push(rule),
                RuleKind::Fallback => buckets.fallback.push(rule),
                RuleKind::Conditional => buckets.conditional.push(rule),
            }
        }
        buckets
    }

    /// Promote the conditional rules whose condition holds for `commit`.
    fn activate(&mut self, commit: &CommitRecord) {
        for &rule in &self.conditional {
            if rule.condition().is_some_and(|c| c.holds(commit)) {
                self.required.push(rule);
            }
        }
    }
}

/// Rule engine for validating commit messages.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: RuleSet,
}

impl RuleEngine {
    /// Create a new rule engine over the given rule set.
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Evaluate one commit.
    ///
    /// Every required rule runs; if several fail, the last failure is the
    /// one reported. Fallback rules are only consulted after a failure and
    /// the first passing one turns the verdict into a skip carrying its
    /// declared reason.
    pub fn evaluate(&self, commit: &CommitRecord) -> Verdict {
        let mut buckets = Buckets::partition(&self.rules);
        buckets.activate(commit);

        let mut last_failure: Option<CheckFailure> = None;
        for rule in &buckets.required {
            if let Some(failure) = rule.check().run(commit) {
                tracing::debug!(
                    commit = commit.id(),
                    check = rule.check().name(),
                    "required check failed: {}",
                    failure.reason
                );
                last_failure = Some(failure);
            }
        }

        let Some(failure) = last_failure else {
            return Verdict::new(commit.id(), Outcome::Passed);
        };

        for rule in &buckets.fallback {
            if rule.check().run(commit).is_none() {
                tracing::debug!(
                    commit = commit.id(),
                    check = rule.check().name(),
                    "fallback check matched"
                );
                return Verdict::new(
                    commit.id(),
                    Outcome::Skipped {
                        reason: rule.reason().unwrap_or_default().to_string(),
                    },
                );
            }
        }

        Verdict::new(commit.id(), Outcome::Failed(failure))
    }

    /// Fetch and evaluate each commit in order.
    ///
    /// The first data source error aborts the run; no partial result is
    /// returned.
    pub fn check_commits<S>(&self, source: &S, ids: &[String]) -> Result<RunResult>
    where
        S: CommitSource + ?Sized,
    {
        let mut verdicts = Vec::with_capacity(ids.len());

        for id in ids {
            let record = CommitRecord::new(source.fetch(id)?);
            let verdict = self.evaluate(&record);
            tracing::debug!(commit = id.as_str(), status = verdict.status(), "evaluated");
            verdicts.push(verdict);
        }

        Ok(RunResult::new(verdicts))
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(RuleSet::builtin())
    }
}
