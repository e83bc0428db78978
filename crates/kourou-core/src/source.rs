//! Commit source seam
//!
//! The version pipeline consumes an ordered list of raw commit messages and a
//! release-branch flag. Where those come from (a VCS, a CI payload) is the
//! caller's concern; this trait is the boundary.

use crate::error::Result;

/// Supplies the commit history the pipeline operates on
pub trait CommitSource {
    /// Raw commit messages since the last release, oldest first
    fn commit_messages(&self) -> Result<Vec<String>>;

    /// Whether the enclosing branch is the canonical release branch
    fn on_release_branch(&self) -> Result<bool>;
}

/// An in-memory commit source
///
/// Useful in tests and for callers that already hold the history.
#[derive(Debug, Clone, Default)]
pub struct StaticHistory {
    messages: Vec<String>,
    release_branch: bool,
}

impl StaticHistory {
    /// Create a source over the given messages
    pub fn new(messages: impl IntoIterator<Item = impl Into<String>>, release_branch: bool) -> Self {
        Self {
            messages: messages.into_iter().map(Into::into).collect(),
            release_branch,
        }
    }
}

impl CommitSource for StaticHistory {
    fn commit_messages(&self) -> Result<Vec<String>> {
        Ok(self.messages.clone())
    }

    fn on_release_branch(&self) -> Result<bool> {
        Ok(self.release_branch)
    }
}
