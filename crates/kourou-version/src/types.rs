//! Version impact levels

use serde::{Deserialize, Serialize};

/// The magnitude of version bump a set of commits warrants.
///
/// The derived ordering is the aggregation order: `None < Patch < Minor <
/// Major`, so folding a commit list is a plain `max`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum VersionImpact {
    /// No qualifying commits
    None,
    /// Patch level (bug fixes)
    Patch,
    /// Minor level (new features)
    Minor,
    /// Major level (breaking changes)
    Major,
}

impl VersionImpact {
    /// Returns the string representation of the impact level
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Patch => "patch",
            Self::Minor => "minor",
            Self::Major => "major",
        }
    }
}

impl std::fmt::Display for VersionImpact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
