//! kourou - conventional-commit driven semantic versioning
//!
//! Computes the next semantic version of a project from its conventional
//! commit history and renders the matching changelog section. Where the
//! history comes from and where the results go (a VCS, manifest files, CI
//! variables) is left to the caller behind the [`CommitSource`] seam.

pub mod release;

pub use release::{ReleasePlan, ReleasePlanner};

pub use kourou_changelog::{
    splice, ChangelogRenderer, ClassifiedCommit, CommitNote, CommitParser, CommitType,
    CompareLinks, ConventionalParser, RuleTable,
};
pub use kourou_core::config::Config;
pub use kourou_core::error::{KourouError, Result};
pub use kourou_core::remote::RemoteUrl;
pub use kourou_core::source::{CommitSource, StaticHistory};
pub use kourou_version::{PreReleaseTag, SemanticVersion, VersionImpact, VersionIncrementer};
