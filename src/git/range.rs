// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit range resolution.

use crate::error::Result;

use super::source::CommitSource;

/// Which commits to check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeOptions {
    /// Start of the range. Defaults to `head`.
    pub base: Option<String>,
    /// End of the range. Defaults to the latest commit.
    pub head: Option<String>,
    /// Leave the base commit itself out of the check.
    pub exclude_base: bool,
}

impl Default for RangeOptions {
    fn default() -> Self {
        Self {
            base: None,
            head: None,
            exclude_base: true,
        }
    }
}

/// Resolve the ordered list of commit ids to check.
///
/// The base commit comes first when it is not excluded, followed by the
/// commits between base and head, newest first. Empty ids count as unset.
pub fn resolve_range<S>(source: &S, options: &RangeOptions) -> Result<Vec<String>>
where
    S: CommitSource + ?Sized,
{
    let head = match options.head.as_deref().filter(|h| !h.is_empty()) {
        Some(head) => head.to_string(),
        None => {
            let head = source.head()?;
            tracing::info!("Head not provided, will use current HEAD: {}", head);
            head
        }
    };

    let base = match options.base.as_deref().filter(|b| !b.is_empty()) {
        Some(base) => base.to_string(),
        None => {
            tracing::info!("Base not provided, will also use {}", head);
            head.clone()
        }
    };

    let mut commits = Vec::new();
    if !options.exclude_base {
        commits.push(base.clone());
    }
    commits.extend(source.commits_between(&base, &head)?);

    tracing::debug!("Resolved {}..{} to {} commit(s)", base, head, commits.len());

    Ok(commits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commit::RawCommit;
    use crate::git::MemorySource;

    fn source() -> MemorySource {
        MemorySource::new(vec![
            RawCommit::new("c1", "chore: init"),
            RawCommit::new("c2", "feat: a"),
            RawCommit::new("c3", "fix: b"),
        ])
    }

    fn options(base: Option<&str>, head: Option<&str>, exclude_base: bool) -> RangeOptions {
        RangeOptions {
            base: base.map(str::to_string),
            head: head.map(str::to_string),
            exclude_base,
        }
    }

    #[test]
    fn test_defaults_check_nothing() {
        let ids = resolve_range(&source(), &RangeOptions::default()).unwrap();
        assert!(ids.is_empty());
    }

    #[test]
    fn test_defaults_with_base_included() {
        let ids = resolve_range(&source(), &options(None, None, false)).unwrap();
        assert_eq!(ids, vec!["c3".to_string()]);
    }

    #[test]
    fn test_explicit_range() {
        let ids = resolve_range(&source(), &options(Some("c1"), Some("c3"), true)).unwrap();
        assert_eq!(ids, vec!["c3".to_string(), "c2".to_string()]);

        let ids = resolve_range(&source(), &options(Some("c1"), Some("c3"), false)).unwrap();
        assert_eq!(
            ids,
            vec!["c1".to_string(), "c3".to_string(), "c2".to_string()]
        );
    }

    #[test]
    fn test_empty_strings_are_unset() {
        let ids = resolve_range(&source(), &options(Some("c2"), Some(""), true)).unwrap();
        assert_eq!(ids, vec!["c3".to_string()]);
    }

    #[test]
    fn test_unknown_base_is_fatal() {
        assert!(resolve_range(&source(), &options(Some("zz"), None, true)).is_err());
    }
}
