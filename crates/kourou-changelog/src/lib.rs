//! kourou Changelog - commit classification and changelog generation
//!
//! This crate turns raw commit messages into classified commits, aggregates
//! their version impact, and renders the grouped changelog document.

pub mod formatter;
pub mod impact;
pub mod parser;
pub mod renderer;
pub mod rules;
pub mod types;

pub use formatter::{splice, ChangelogFormatter, MarkdownFormatter};
pub use impact::compute_impact;
pub use parser::{CommitParser, ConventionalParser};
pub use renderer::{ChangelogRenderer, CompareLinks, ReleaseSummary, Section};
pub use rules::{CommitType, ConventionRule, RuleTable};
pub use types::{ClassifiedCommit, CommitNote, BREAKING_CHANGE};
