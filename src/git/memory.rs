// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! In-memory commit data source.

use crate::commit::RawCommit;
use crate::error::{CheckerError, GitError, Result};

use super::source::CommitSource;

/// A linear history held in memory, oldest commit first.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    history: Vec<RawCommit>,
}

impl MemorySource {
    /// Create a source from commits ordered oldest to newest.
    pub fn new(history: Vec<RawCommit>) -> Self {
        Self { history }
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.history
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| {
                CheckerError::Git(GitError::InvalidReference {
                    reference: id.to_string(),
                })
            })
    }
}

impl CommitSource for MemorySource {
    fn fetch(&self, id: &str) -> Result<RawCommit> {
        self.history
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| CheckerError::Git(GitError::CommitNotFound { id: id.to_string() }))
    }

    fn commits_between(&self, base: &str, head: &str) -> Result<Vec<String>> {
        let base = self.position(base)?;
        let head = self.position(head)?;

        if head <= base {
            return Ok(Vec::new());
        }

        Ok(self.history[base + 1..=head]
            .iter()
            .rev()
            .map(|c| c.id.clone())
            .collect())
    }

    fn head(&self) -> Result<String> {
        self.history
            .last()
            .map(|c| c.id.clone())
            .ok_or_else(|| {
                CheckerError::Git(GitError::InvalidReference {
                    reference: "HEAD".to_string(),
                })
            })
    }
}
