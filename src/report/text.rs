// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Terminal output.

use console::style;

use crate::rules::{Outcome, RunResult, Verdict};

pub(super) fn render(result: &RunResult) -> String {
    let mut lines = Vec::with_capacity(result.len() + 2);

    for verdict in result.verdicts() {
        render_verdict(verdict, &mut lines);
    }

    if !lines.is_empty() {
        lines.push(String::new());
    }

    let summary = if result.passed() {
        style(result.summary()).green().bold()
    } else {
        style(result.summary()).red().bold()
    };
    lines.push(format!("Check: {}", summary));

    lines.join("\n")
}

fn render_verdict(verdict: &Verdict, lines: &mut Vec<String>) {
    let short_sha = verdict.commit.get(..7).unwrap_or(&verdict.commit);

    match verdict.outcome {
        Outcome::Passed => lines.push(format!(
            "{} {}",
            style("✓").green().bold(),
            style(short_sha).cyan()
        )),
        Outcome::Skipped { ref reason } => lines.push(format!(
            "{} {} skipped: {}",
            style("⚠").yellow().bold(),
            style(short_sha).cyan(),
            reason
        )),
        Outcome::Failed(ref failure) => {
            lines.push(format!(
                "{} {} {} [{}]",
                style("✗").red().bold(),
                style(short_sha).cyan(),
                failure.reason,
                style(failure.code).dim()
            ));
            for line in failure.suggestion.lines() {
                lines.push(format!("    {}", style(line).dim()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::CheckFailure;

    #[test]
    fn test_text_report_mentions_every_commit() {
        let result = RunResult::new(vec![
            Verdict::new("0123456789abcdef", Outcome::Passed),
            Verdict::new(
                "fedcba9876543210",
                Outcome::Failed(CheckFailure {
                    code: "body-empty",
                    reason: "Body is empty".to_string(),
                    suggestion: "Add a body".to_string(),
                }),
            ),
        ]);
        let rendered = render(&result);

        assert!(rendered.contains("0123456"));
        assert!(!rendered.contains("0123456789"));
        assert!(rendered.contains("Body is empty"));
        assert!(rendered.contains("Add a body"));
        assert!(rendered.contains("Failed (1 of 2 commits)"));
    }

    #[test]
    fn test_text_report_short_ids_kept() {
        let result = RunResult::new(vec![Verdict::new("c1", Outcome::Passed)]);
        let rendered = render(&result);
        assert!(rendered.contains("c1"));
        assert!(rendered.contains("Passed (1 commits)"));
    }
}
