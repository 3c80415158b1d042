// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! git2-backed commit data source.

use crate::commit::RawCommit;
use crate::error::{CheckerError, GitError, Result};
use git2::{Oid, Repository, Sort};
use std::path::Path;

use super::source::CommitSource;

/// Reads commits from a local git repository.
pub struct GitSource {
    inner: Repository,
}

impl GitSource {
    /// Open the repository containing the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            CheckerError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open the repository containing `path`. Bare repositories are fine.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                CheckerError::Git(GitError::NotARepository)
            } else {
                CheckerError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        tracing::debug!("Opened repository at {:?}", repo.path());

        Ok(Self { inner: repo })
    }

    /// Get a commit by reference (SHA, branch name, `HEAD~2`, etc.).
    pub fn get_commit(&self, reference: &str) -> Result<git2::Commit<'_>> {
        let obj = self.inner.revparse_single(reference).map_err(|e| {
            CheckerError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        let commit = obj.peel_to_commit().map_err(|e| {
            CheckerError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        Ok(commit)
    }
}

/// Render the trailers of a message as `Key: value` lines, the way
/// `git interpret-trailers --parse` prints them.
fn extract_trailers(message: &str) -> Result<String> {
    let trailers = git2::message_trailers_strs(message).map_err(|e| {
        CheckerError::Git(GitError::CommandFailed {
            command: "interpret-trailers".to_string(),
            message: e.message().to_string(),
        })
    })?;

    Ok(trailers
        .iter()
        .map(|(key, value)| format!("{}: {}", key, value))
        .collect::<Vec<_>>()
        .join("\n"))
}

impl CommitSource for GitSource {
    fn fetch(&self, id: &str) -> Result<RawCommit> {
        let commit = self.get_commit(id)?;
        let author = commit.author();

        // Messages in other encodings are checked like any other text
        let lossy = |bytes: &[u8]| String::from_utf8_lossy(bytes).trim().to_string();
        let message = String::from_utf8_lossy(commit.message_bytes());

        Ok(RawCommit {
            id: commit.id().to_string(),
            author_email: lossy(author.email_bytes()),
            subject: lossy(commit.summary_bytes().unwrap_or_default()),
            body: lossy(commit.body_bytes().unwrap_or_default()),
            trailers: extract_trailers(&message)?.trim().to_string(),
        })
    }

    fn commits_between(&self, base: &str, head: &str) -> Result<Vec<String>> {
        let base = self.get_commit(base)?.id();
        let head = self.get_commit(head)?.id();

        let walk_err = |command: &str, e: git2::Error| {
            CheckerError::Git(GitError::CommandFailed {
                command: command.to_string(),
                message: e.message().to_string(),
            })
        };

        let mut revwalk = self
            .inner
            .revwalk()
            .map_err(|e| walk_err("revwalk", e))?;
        revwalk
            .set_sorting(Sort::TOPOLOGICAL | Sort::TIME)
            .map_err(|e| walk_err("revwalk.sort", e))?;
        revwalk
            .push(head)
            .map_err(|e| walk_err("revwalk.push", e))?;
        revwalk
            .hide(base)
            .map_err(|e| walk_err("revwalk.hide", e))?;

        revwalk
            .map(|oid: std::result::Result<Oid, git2::Error>| {
                oid.map(|o| o.to_string())
                    .map_err(|e| walk_err("revwalk", e))
            })
            .collect()
    }

    fn head(&self) -> Result<String> {
        let head = self.inner.head().map_err(|e| {
            CheckerError::Git(GitError::InvalidReference {
                reference: format!("HEAD: {}", e.message()),
            })
        })?;

        let commit = head.peel_to_commit().map_err(|e| {
            CheckerError::Git(GitError::InvalidReference {
                reference: format!("HEAD: {}", e.message()),
            })
        })?;

        Ok(commit.id().to_string())
    }
}
