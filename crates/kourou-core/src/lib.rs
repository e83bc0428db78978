//! kourou Core - foundational types for conventional versioning
//!
//! This crate provides the error taxonomy, configuration, and the narrow
//! seams (commit source, remote URL) the version pipeline is built on.

pub mod config;
pub mod error;
pub mod remote;
pub mod source;

pub use error::{ChangelogError, ConfigError, KourouError, Result, VersionError};
pub use remote::RemoteUrl;
pub use source::{CommitSource, StaticHistory};
