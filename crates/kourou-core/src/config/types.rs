//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for kourou
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project name
    pub name: Option<String>,

    /// Versioning configuration
    pub versioning: VersioningConfig,

    /// Repository configuration
    pub repository: RepositoryConfig,

    /// Changelog configuration
    pub changelog: ChangelogConfig,
}

/// Versioning configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VersioningConfig {
    /// Literal prefix for generated tags (e.g. "v" -> "v1.2.3")
    pub tag_prefix: String,

    /// Regex fragment matched against tag prefixes when parsing versions
    pub tag_pattern: String,

    /// Pre-release label applied on non-release branches
    pub prerelease_label: String,
}

impl Default for VersioningConfig {
    fn default() -> Self {
        Self {
            tag_prefix: "v".to_string(),
            tag_pattern: "[vV]".to_string(),
            prerelease_label: "preview".to_string(),
        }
    }
}

/// Repository configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Remote URL used to build compare links (scp-like or https)
    pub remote_url: Option<String>,

    /// The canonical release branch; also the compare-link fallback when
    /// there is no previous tag
    pub branch: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            remote_url: None,
            branch: "master".to_string(),
        }
    }
}

/// Changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Changelog file path
    pub file: PathBuf,

    /// Document title
    pub title: String,

    /// Commit-convention reference linked from the document legend
    pub convention_url: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("CHANGELOG.md"),
            title: "Change Log".to_string(),
            convention_url: "https://conventionalcommits.org".to_string(),
        }
    }
}
