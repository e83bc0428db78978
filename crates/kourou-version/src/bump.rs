//! Version incrementing

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::prerelease::PreReleaseTag;
use crate::semantic::SemanticVersion;
use crate::types::VersionImpact;

/// The result of applying an impact level to a version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextVersion {
    /// The computed next version
    pub version: SemanticVersion,
    /// Tag name of the version this one was incremented from, when a number
    /// actually moved; `None` on a suffix-only change (first-release
    /// semantics fall back to the default branch downstream)
    pub previous_tag: Option<String>,
}

/// Applies an impact level to a current version.
///
/// Bumped versions carry a pre-release tag named after the configured label
/// exactly when the build is not on the release branch.
pub struct VersionIncrementer {
    /// Pre-release label for non-release-branch builds
    pub prerelease_label: String,
    /// Literal prefix for tag names
    pub tag_prefix: String,
}

impl VersionIncrementer {
    /// Create an incrementer with the default label and tag prefix
    pub fn new() -> Self {
        Self {
            prerelease_label: "preview".to_string(),
            tag_prefix: "v".to_string(),
        }
    }

    /// Set the pre-release label
    pub fn with_prerelease_label(mut self, label: impl Into<String>) -> Self {
        self.prerelease_label = label.into();
        self
    }

    /// Set the tag prefix
    pub fn with_tag_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.tag_prefix = prefix.into();
        self
    }

    /// The tag name for a version (e.g. "v1.2.3-preview")
    pub fn tag_name(&self, version: &SemanticVersion) -> String {
        format!("{}{}", self.tag_prefix, version)
    }

    /// Compute the next version from the current one.
    ///
    /// Pure: the same inputs always produce the same output. `Major`, `Minor`
    /// and `Patch` move the corresponding number and reset the ones below;
    /// `None` leaves the numbers alone and only re-evaluates the pre-release
    /// suffix of a version that already had one.
    pub fn next_version(
        &self,
        current: &SemanticVersion,
        impact: VersionImpact,
        on_release_branch: bool,
    ) -> NextVersion {
        let branch_tag = if on_release_branch {
            PreReleaseTag::empty()
        } else {
            PreReleaseTag::named(&self.prerelease_label)
        };

        let next = match impact {
            VersionImpact::Major => {
                let version = SemanticVersion::new(current.major + 1, 0, 0)
                    .with_pre_release(branch_tag);
                NextVersion {
                    version,
                    previous_tag: Some(self.tag_name(current)),
                }
            }
            VersionImpact::Minor => {
                let version = SemanticVersion::new(current.major, current.minor + 1, 0)
                    .with_pre_release(branch_tag);
                NextVersion {
                    version,
                    previous_tag: Some(self.tag_name(current)),
                }
            }
            VersionImpact::Patch => {
                let version =
                    SemanticVersion::new(current.major, current.minor, current.patch + 1)
                        .with_pre_release(branch_tag);
                NextVersion {
                    version,
                    previous_tag: Some(self.tag_name(current)),
                }
            }
            VersionImpact::None => {
                let version = if current.pre_release.has_tag() {
                    current.clone().with_pre_release(branch_tag)
                } else {
                    current.clone()
                };
                NextVersion {
                    version,
                    previous_tag: None,
                }
            }
        };

        debug!(
            current = %current,
            next = %next.version,
            impact = %impact,
            on_release_branch,
            "version incremented"
        );

        next
    }
}

impl Default for VersionIncrementer {
    fn default() -> Self {
        Self::new()
    }
}
