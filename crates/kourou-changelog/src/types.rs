//! Classified commit types

use serde::{Deserialize, Serialize};

use crate::rules::CommitType;

/// Note keyword that marks an incompatible change
pub const BREAKING_CHANGE: &str = "BREAKING CHANGE";

/// An annotated note from a commit body (e.g. a breaking-change notice)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitNote {
    /// The keyword that introduced the note
    pub title: String,
    /// Text after the keyword and its colon
    pub text: String,
}

impl CommitNote {
    /// Create a note
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// A commit message parsed into its conventional structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedCommit {
    /// The matched rule-table type; `None` when the header tag is unknown
    pub commit_type: Option<CommitType>,
    /// Scope from the parenthesized header group
    pub scope: Option<String>,
    /// Subject line (the whole header when it is not conventional)
    pub subject: String,
    /// Annotated notes from the body
    pub notes: Vec<CommitNote>,
}

impl ClassifiedCommit {
    /// Whether any note marks this commit as a breaking change.
    ///
    /// Titles match case-insensitively.
    pub fn is_breaking(&self) -> bool {
        self.notes
            .iter()
            .any(|note| note.title.eq_ignore_ascii_case(BREAKING_CHANGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breaking_detection() {
        let mut commit = ClassifiedCommit {
            commit_type: Some(CommitType::Fix),
            scope: None,
            subject: "crash".to_string(),
            notes: vec![],
        };
        assert!(!commit.is_breaking());

        commit
            .notes
            .push(CommitNote::new(BREAKING_CHANGE, "removes legacy API"));
        assert!(commit.is_breaking());
    }

    #[test]
    fn test_breaking_detection_ignores_case() {
        let commit = ClassifiedCommit {
            notes: vec![CommitNote::new("Breaking Change", "renamed config keys")],
            ..Default::default()
        };
        assert!(commit.is_breaking());
    }
}
