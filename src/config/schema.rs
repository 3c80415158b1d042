// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from ccheck.toml.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::report::OutputFormat;
use crate::rules::RuleKind;

/// The main configuration structure for ccheck.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CheckerConfig {
    /// Range and output options.
    pub options: OptionsConfig,

    /// Rule set. Empty means the built-in rules.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<RuleConfig>,
}

impl CheckerConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration discovered from `dir` instead of the working
    /// directory.
    pub fn load_in(dir: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_in(dir)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Range and output options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionsConfig {
    /// Start of the commit range.
    pub base_sha: Option<String>,

    /// End of the commit range (latest commit when unset).
    pub head_sha: Option<String>,

    /// Leave the base commit out of the check.
    pub exclude_base: bool,

    /// Repository location (working directory when unset).
    pub repo_dir: Option<PathBuf>,

    /// Report format.
    pub format: Option<OutputFormat>,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            base_sha: None,
            head_sha: None,
            exclude_base: true,
            repo_dir: None,
            format: None,
        }
    }
}

/// One `[[rules]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// required, fallback or conditional.
    pub kind: RuleKind,

    /// Activation condition, conditional rules only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<ConditionConfig>,

    /// What to check.
    pub check: CheckConfig,

    /// Reason reported when a fallback rule forgives a commit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Condition definition, e.g. `condition = { author-email = "example.com" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionConfig {
    /// Author email contains the text.
    AuthorEmail(String),
    /// Author email matches the regex.
    AuthorEmailPattern(String),
}

/// Check definition: either a bare name (`check = "require-body"`) or a
/// one-key table carrying its data (`check = { require-trailer = "Log" }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckConfig {
    ConventionalSubject,
    TypeInRange(Vec<String>),
    RequireScope,
    RequireBody,
    RequireTrailer(String),
    StrictRequireTrailer(String),
    SubjectPattern(String),
}
