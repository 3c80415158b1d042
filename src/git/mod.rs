// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Commit metadata is read through the [`CommitSource`] trait so the rule
//! engine never touches git directly.

mod memory;
mod range;
mod repo;
mod source;

pub use memory::MemorySource;
pub use range::{resolve_range, RangeOptions};
pub use repo::GitSource;
pub use source::CommitSource;
