// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rendering of check results.
//!
//! Three formats are supported: GitHub workflow commands, styled terminal
//! text and a single JSON document.

mod github;
mod text;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rules::RunResult;

pub use github::{escape_data, escape_property};

/// Output format of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable terminal output.
    Text,
    /// GitHub workflow commands (annotations).
    Github,
    /// Machine readable JSON.
    Json,
}

impl OutputFormat {
    /// `github` inside GitHub Actions, `text` everywhere else.
    pub fn detect() -> Self {
        Self::for_github_actions(std::env::var("GITHUB_ACTIONS").ok().as_deref())
    }

    fn for_github_actions(value: Option<&str>) -> Self {
        match value {
            Some("true") => OutputFormat::Github,
            _ => OutputFormat::Text,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Github => "github",
            OutputFormat::Json => "json",
        };
        f.pad(name)
    }
}

/// Render a run result in the requested format.
pub fn render(result: &RunResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => text::render(result),
        OutputFormat::Github => github::render(result),
        OutputFormat::Json => render_json(result),
    }
}

/// Print a run result to stdout.
pub fn print(result: &RunResult, format: OutputFormat) {
    println!("{}", render(result, format));
}

fn render_json(result: &RunResult) -> String {
    let json = serde_json::json!({
        "passed": result.passed(),
        "commits": result.verdicts().iter().map(|v| {
            serde_json::json!({
                "commit": v.commit,
                "status": v.status(),
                "reason": v.reason(),
                "suggestion": v.suggestion(),
                "code": v.code(),
            })
        }).collect::<Vec<_>>(),
    });

    serde_json::to_string_pretty(&json).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{CheckFailure, Outcome, Verdict};

    fn mixed_result() -> RunResult {
        RunResult::new(vec![
            Verdict::new("aaa", Outcome::Passed),
            Verdict::new(
                "bbb",
                Outcome::Skipped {
                    reason: "Default GitHub auto merge commit message".to_string(),
                },
            ),
            Verdict::new(
                "ccc",
                Outcome::Failed(CheckFailure {
                    code: "body-empty",
                    reason: "Body is empty".to_string(),
                    suggestion: "Add a body".to_string(),
                }),
            ),
        ])
    }

    #[test]
    fn test_detect_from_env_value() {
        assert_eq!(
            OutputFormat::for_github_actions(Some("true")),
            OutputFormat::Github
        );
        assert_eq!(
            OutputFormat::for_github_actions(Some("false")),
            OutputFormat::Text
        );
        assert_eq!(OutputFormat::for_github_actions(None), OutputFormat::Text);
    }

    #[test]
    fn test_json_report() {
        let rendered = render(&mixed_result(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["passed"], false);
        let commits = value["commits"].as_array().unwrap();
        assert_eq!(commits.len(), 3);
        assert_eq!(commits[0]["status"], "passed");
        assert!(commits[0]["reason"].is_null());
        assert_eq!(commits[1]["status"], "skipped");
        assert_eq!(
            commits[1]["reason"],
            "Default GitHub auto merge commit message"
        );
        assert_eq!(commits[2]["code"], "body-empty");
        assert_eq!(commits[2]["suggestion"], "Add a body");
    }

    #[test]
    fn test_json_empty_run_passes() {
        let rendered = render(&RunResult::default(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["passed"], true);
        assert!(value["commits"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_format_from_config_value() {
        #[derive(Deserialize)]
        struct Holder {
            format: OutputFormat,
        }
        let holder: Holder = toml::from_str("format = \"github\"").unwrap();
        assert_eq!(holder.format, OutputFormat::Github);
        assert_eq!(holder.format.to_string(), "github");
    }
}
