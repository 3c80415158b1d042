// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The commit data source seam.

use crate::commit::RawCommit;
use crate::error::Result;

/// Where commit metadata comes from.
///
/// Any error returned here is fatal to the whole check run.
pub trait CommitSource {
    /// Fetch the raw fields of one commit.
    fn fetch(&self, id: &str) -> Result<RawCommit>;

    /// Commits reachable from `head` but not from `base`, newest first.
    fn commits_between(&self, base: &str, head: &str) -> Result<Vec<String>>;

    /// Identifier of the latest commit.
    fn head(&self) -> Result<String>;
}
