//! Commit convention rules
//!
//! The rule table maps canonical commit-type tags to changelog section
//! headers. It is an ordered association list: changelog sections come out
//! in declaration order, whatever order the commits arrived in.

use serde::{Deserialize, Serialize};

use kourou_core::error::ConfigError;

/// Commit type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitType {
    /// New feature
    Feat,
    /// Bug fix
    Fix,
    /// Chores (maintenance)
    Chore,
    /// CI configuration
    Ci,
    /// Documentation
    Docs,
    /// Build system
    Build,
    /// Performance improvement
    Perf,
    /// Code style (formatting, etc.)
    Style,
    /// Tests
    Test,
    /// Reverting changes
    Revert,
    /// Refactoring
    Refactor,
}

impl CommitType {
    /// The canonical tag used in commit headers
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Chore => "chore",
            Self::Ci => "ci",
            Self::Docs => "docs",
            Self::Build => "build",
            Self::Perf => "perf",
            Self::Style => "style",
            Self::Test => "test",
            Self::Revert => "revert",
            Self::Refactor => "refactor",
        }
    }
}

impl std::fmt::Display for CommitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One rule: a commit type, its header tag, and its changelog section title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConventionRule {
    /// The commit type this rule classifies
    pub commit_type: CommitType,
    /// Tag matched (case-sensitively) against the header's type field
    pub tag: String,
    /// Human-readable changelog section header
    pub header: String,
}

impl ConventionRule {
    /// Create a rule
    pub fn new(commit_type: CommitType, tag: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            commit_type,
            tag: tag.into(),
            header: header.into(),
        }
    }
}

/// An ordered, immutable set of convention rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    rules: Vec<ConventionRule>,
}

impl RuleTable {
    /// The built-in Conventional Commits table
    pub fn conventional() -> Self {
        Self::custom(vec![
            ConventionRule::new(CommitType::Feat, "feat", "Features"),
            ConventionRule::new(CommitType::Fix, "fix", "Bug Fixes"),
            ConventionRule::new(CommitType::Chore, "chore", "Chores"),
            ConventionRule::new(CommitType::Ci, "ci", "Continuous Integration"),
            ConventionRule::new(CommitType::Docs, "docs", "Documentation"),
            ConventionRule::new(CommitType::Build, "build", "Build"),
            ConventionRule::new(CommitType::Perf, "perf", "Performance"),
            ConventionRule::new(CommitType::Style, "style", "Style"),
            ConventionRule::new(CommitType::Test, "test", "Tests"),
            ConventionRule::new(CommitType::Revert, "revert", "Reversions"),
            ConventionRule::new(CommitType::Refactor, "refactor", "Refactors"),
        ])
    }

    /// Build a table from explicit rules, preserving their order
    pub fn custom(rules: Vec<ConventionRule>) -> Self {
        Self { rules }
    }

    /// The rules, in declaration order
    pub fn rules(&self) -> &[ConventionRule] {
        &self.rules
    }

    /// Look up the commit type whose tag equals `tag` exactly
    pub fn type_for_tag(&self, tag: &str) -> Option<CommitType> {
        self.rules
            .iter()
            .find(|rule| rule.tag == tag)
            .map(|rule| rule.commit_type)
    }

    /// The section header for a commit type
    pub fn header_for(&self, commit_type: CommitType) -> Result<&str, ConfigError> {
        self.rules
            .iter()
            .find(|rule| rule.commit_type == commit_type)
            .map(|rule| rule.header.as_str())
            .ok_or_else(|| ConfigError::MissingRule(commit_type.to_string()))
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::conventional()
    }
}
