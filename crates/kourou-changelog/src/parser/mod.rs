//! Commit classification

mod conventional;

pub use conventional::ConventionalParser;

use crate::types::ClassifiedCommit;

/// Trait for commit classifiers
pub trait CommitParser: Send + Sync {
    /// Classify one raw commit message.
    ///
    /// Never fails: malformed input degrades to an unknown type with the
    /// whole header line as the subject.
    fn classify(&self, message: &str) -> ClassifiedCommit;
}
