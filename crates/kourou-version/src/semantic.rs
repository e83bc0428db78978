//! Semantic version values
//!
//! Versions parse from `MAJOR[.MINOR[.PATCH]][-PRERELEASE]`, optionally
//! behind a caller-supplied tag prefix pattern, and order by
//! `(major, minor, patch)` with pre-release handling delegated to
//! [`PreReleaseTag`].

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use kourou_core::error::VersionError;

use crate::prerelease::PreReleaseTag;

static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<major>\d+)(?:\.(?P<minor>\d+)(?:\.(?P<patch>\d+))?)?(?:-(?P<tag>.*))?$")
        .expect("Invalid regex")
});

/// An immutable semantic version
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SemanticVersion {
    /// Major version number
    pub major: u64,
    /// Minor version number
    pub minor: u64,
    /// Patch version number
    pub patch: u64,
    /// Pre-release tag; always present, possibly empty
    pub pre_release: PreReleaseTag,
}

impl SemanticVersion {
    /// Create a release-form version (no pre-release tag)
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: PreReleaseTag::empty(),
        }
    }

    /// Attach a pre-release tag
    pub fn with_pre_release(mut self, tag: PreReleaseTag) -> Self {
        self.pre_release = tag;
        self
    }

    /// Parse a version string, stripping an optional tag prefix first.
    ///
    /// `tag_pattern` is a regex fragment matched at the start of the input
    /// (e.g. `"[vV]"`); pass `None` when the input carries no prefix. Minor
    /// and patch default to zero; everything after the first `-` is the
    /// pre-release suffix.
    pub fn parse(input: &str, tag_pattern: Option<&str>) -> Result<Self, VersionError> {
        let mut version = input;

        if let Some(pattern) = tag_pattern.filter(|p| !p.is_empty()) {
            let prefix = Regex::new(&format!("^(?:{pattern})"))
                .map_err(|e| VersionError::parse_failed(input, format!("bad tag pattern: {e}")))?;
            if let Some(m) = prefix.find(version) {
                version = &version[m.end()..];
            }
        }

        let caps = VERSION_REGEX
            .captures(version)
            .ok_or_else(|| VersionError::parse_failed(input, "expected MAJOR[.MINOR[.PATCH]]"))?;

        let part = |name: &str| -> Result<u64, VersionError> {
            caps.name(name).map_or(Ok(0), |m| {
                m.as_str()
                    .parse::<u64>()
                    .map_err(|_| VersionError::parse_failed(input, format!("{name} out of range")))
            })
        };

        Ok(Self {
            major: part("major")?,
            minor: part("minor")?,
            patch: part("patch")?,
            pre_release: PreReleaseTag::parse(caps.name("tag").map_or("", |m| m.as_str()))?,
        })
    }

    /// The numeric `major.minor.patch` form, without any pre-release suffix
    pub fn core_version(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.pre_release.has_tag() {
            write!(f, "-{}", self.pre_release)?;
        }
        Ok(())
    }
}
