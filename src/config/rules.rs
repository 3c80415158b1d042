// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Building the rule set from configuration.

use crate::error::RuleError;
use crate::rules::{Check, Condition, Rule, RuleKind, RuleSet};

use super::schema::{CheckConfig, CheckerConfig, ConditionConfig, RuleConfig};

impl CheckerConfig {
    /// Build the rule set once, compiling every regex up front.
    ///
    /// No `[[rules]]` entries means the built-in rule set.
    pub fn rule_set(&self) -> Result<RuleSet, RuleError> {
        if self.rules.is_empty() {
            tracing::debug!("No rules configured, using built-in rules");
            return Ok(RuleSet::builtin());
        }

        let rules = self
            .rules
            .iter()
            .enumerate()
            .map(|(i, rule)| rule.to_rule(i + 1))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RuleSet::new(rules))
    }
}

impl RuleConfig {
    /// Convert one entry; `index` is 1-based and only used in errors.
    pub fn to_rule(&self, index: usize) -> Result<Rule, RuleError> {
        let check = self.check.to_check()?;

        match self.kind {
            RuleKind::Conditional => {
                let condition = self
                    .condition
                    .as_ref()
                    .ok_or(RuleError::MissingCondition { index })?
                    .to_condition()?;
                Ok(Rule::conditional(condition, check))
            }
            kind if self.condition.is_some() => Err(RuleError::UnexpectedCondition {
                index,
                kind: kind.to_string(),
            }),
            RuleKind::Fallback => match self.reason.as_deref().map(str::trim) {
                Some(reason) if !reason.is_empty() => Ok(Rule::fallback(reason, check)),
                _ => Err(RuleError::MissingReason { index }),
            },
            RuleKind::Required => Ok(Rule::required(check)),
        }
    }
}

impl CheckConfig {
    pub fn to_check(&self) -> Result<Check, RuleError> {
        Ok(match self {
            CheckConfig::ConventionalSubject => Check::ConventionalSubject,
            CheckConfig::TypeInRange(types) => Check::TypeInRange(types.clone()),
            CheckConfig::RequireScope => Check::RequireScope,
            CheckConfig::RequireBody => Check::RequireBody,
            CheckConfig::RequireTrailer(key) => Check::RequireTrailer(key.clone()),
            CheckConfig::StrictRequireTrailer(key) => Check::StrictRequireTrailer(key.clone()),
            CheckConfig::SubjectPattern(pattern) => Check::subject_pattern(pattern)?,
        })
    }
}

impl ConditionConfig {
    pub fn to_condition(&self) -> Result<Condition, RuleError> {
        match self {
            ConditionConfig::AuthorEmail(fragment) => Ok(Condition::AuthorEmail(fragment.clone())),
            ConditionConfig::AuthorEmailPattern(pattern) => Condition::author_email_pattern(pattern),
        }
    }
}
