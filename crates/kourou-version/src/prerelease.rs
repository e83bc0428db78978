//! Pre-release tag handling
//!
//! A pre-release tag is the optional `-name[.number]` suffix of a semantic
//! version. A version without a tag is newer than any of its pre-releases,
//! so the empty tag sorts after every named tag.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use kourou_core::error::VersionError;

/// Pre-release data for a semantic version
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PreReleaseTag {
    /// Pre-release name (e.g. "beta"); `None` means no tag
    name: Option<String>,
    /// Optional build number within the pre-release series
    number: Option<u64>,
}

impl PreReleaseTag {
    /// The empty tag (no pre-release)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a tag with a name and no number
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }

    /// Create a tag from parts; an empty name yields the empty tag
    pub fn new(name: impl Into<String>, number: Option<u64>) -> Self {
        let name = name.into();
        if name.is_empty() {
            Self::empty()
        } else {
            Self {
                name: Some(name),
                number,
            }
        }
    }

    /// Parse a dash-stripped suffix into a tag.
    ///
    /// The suffix splits on the single `.` whose remainder is all digits:
    /// `"rc.2"` has name `rc` and number 2, `"nightly"` is all name, and
    /// `"rc.2.3"` has name `rc.2` and number 3. An empty suffix yields the
    /// empty tag.
    pub fn parse(suffix: &str) -> Result<Self, VersionError> {
        if suffix.is_empty() {
            return Ok(Self::empty());
        }

        if let Some(pos) = suffix.rfind('.') {
            let rest = &suffix[pos + 1..];
            if pos > 0 && !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
                let number = rest
                    .parse::<u64>()
                    .map_err(|_| VersionError::InvalidPreRelease(suffix.to_string()))?;
                return Ok(Self::new(&suffix[..pos], Some(number)));
            }
        }

        Ok(Self::named(suffix))
    }

    /// Whether this instance carries a tag
    pub fn has_tag(&self) -> bool {
        self.name.is_some()
    }

    /// The pre-release name, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The pre-release number, if any
    pub fn number(&self) -> Option<u64> {
        self.number
    }
}

impl Ord for PreReleaseTag {
    fn cmp(&self, other: &Self) -> Ordering {
        // A release without a suffix is newer than any of its pre-releases.
        match (self.has_tag(), other.has_tag()) {
            (false, true) => return Ordering::Greater,
            (true, false) => return Ordering::Less,
            _ => {}
        }

        let left = self.name.as_deref().unwrap_or("");
        let right = other.name.as_deref().unwrap_or("");

        left.to_ascii_lowercase()
            .cmp(&right.to_ascii_lowercase())
            .then_with(|| self.number.cmp(&other.number))
            // Tags differing only in name case must not compare equal, or
            // Ord would disagree with field equality.
            .then_with(|| left.cmp(right))
    }
}

impl PartialOrd for PreReleaseTag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PreReleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{name}")?;
            if let Some(number) = self.number {
                write!(f, ".{number}")?;
            }
        }
        Ok(())
    }
}
