// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! Rules come in three kinds: required rules must all pass, conditional
//! rules become required when their condition holds for a commit, and
//! fallback rules can forgive a commit that failed a required rule.

mod checks;
mod condition;
mod engine;
mod model;
mod verdict;

pub use checks::CheckFailure;
pub use condition::Condition;
pub use engine::RuleEngine;
pub use model::*;
pub use verdict::{Outcome, RunResult, Verdict};
