//! Repository metadata entity.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Snapshot of a repository's metadata at the moment of extraction.
///
/// Constructed fresh on every extraction and never updated in place; callers
/// that want newer data extract again.
///
/// # Examples
///
/// ```
/// use repoinfo::RepositoryInfo;
///
/// let info = RepositoryInfo {
///     branches: vec!["main".to_string()],
///     latest_commit: "d9eda6b Fix cache warming".to_string(),
///     authors: ["Alice".to_string()].into_iter().collect(),
/// };
/// assert!(info.has_commits());
/// assert_eq!(
///     info.summary(),
///     "branches: 1 | authors: 1 | head: d9eda6b Fix cache warming"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryInfo {
    /// Local branch names, in the order the tool listed them.
    pub branches: Vec<String>,

    /// `<full commit id> <subject>` of the most recent commit; empty when
    /// the repository has no commits yet.
    pub latest_commit: String,

    /// Unique commit-author display names across the full history.
    pub authors: BTreeSet<String>,
}

impl RepositoryInfo {
    /// Whether the snapshot captured at least one commit.
    pub fn has_commits(&self) -> bool {
        !self.latest_commit.is_empty()
    }

    /// Get a one-line human-readable digest of the snapshot.
    pub fn summary(&self) -> String {
        let mut parts = vec![
            format!("branches: {}", self.branches.len()),
            format!("authors: {}", self.authors.len()),
        ];

        if self.latest_commit.is_empty() {
            parts.push("no commits".to_string());
        } else {
            parts.push(format!("head: {}", self.latest_commit));
        }

        parts.join(" | ")
    }
}
