// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message parsing and the per-commit record.

mod record;
mod subject;
mod trailers;

pub use record::{CommitRecord, RawCommit};
pub use subject::{parse_subject, ParsedSubject};
pub use trailers::{parse_trailers, Trailer, TrailerSet};
