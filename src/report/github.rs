// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! GitHub workflow command output.

use crate::rules::{Outcome, RunResult, Verdict};

const BANNER: &str = "====================";

/// Escape the message part of a workflow command.
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a workflow command property such as `title`.
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

fn notice(message: &str) -> String {
    format!("::notice::{}", escape_data(message))
}

fn error(title: &str, message: &str) -> String {
    format!(
        "::error title={}::{}",
        escape_property(title),
        escape_data(message)
    )
}

pub(super) fn render(result: &RunResult) -> String {
    let mut lines = vec![
        BANNER.to_string(),
        "Check Result Summary".to_string(),
        BANNER.to_string(),
    ];

    if result.passed() {
        lines.push("Check: Passed".to_string());
    } else {
        lines.push(notice("Check: Failed"));
    }

    lines.push("Details:".to_string());
    for verdict in result.verdicts() {
        render_verdict(verdict, &mut lines);
    }
    lines.push(BANNER.to_string());

    lines.join("\n")
}

fn render_verdict(verdict: &Verdict, lines: &mut Vec<String>) {
    match verdict.outcome {
        Outcome::Passed => lines.push(format!("{} : Passed", verdict.commit)),
        Outcome::Skipped { ref reason } => lines.push(notice(&format!(
            "{} : Skipped (Reason: {})",
            verdict.commit, reason
        ))),
        Outcome::Failed(ref failure) => {
            lines.push(notice(&format!("{} : Failed", verdict.commit)));
            lines.push(error(&failure.reason, &failure.suggestion));
        }
    }
}
