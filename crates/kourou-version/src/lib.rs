//! kourou Version - semantic version values and increment logic
//!
//! This crate provides the immutable [`SemanticVersion`] and
//! [`PreReleaseTag`] value types and the [`VersionIncrementer`] that applies
//! an impact level to them.

mod bump;
mod prerelease;
mod semantic;
pub mod types;

pub use bump::{NextVersion, VersionIncrementer};
pub use prerelease::PreReleaseTag;
pub use semantic::SemanticVersion;
pub use types::VersionImpact;
