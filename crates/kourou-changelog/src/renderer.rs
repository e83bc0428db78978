//! Changelog rendering
//!
//! Groups classified commits into a [`ReleaseSummary`] following the rule
//! table's declaration order, then hands the summary to a
//! [`ChangelogFormatter`](crate::formatter::ChangelogFormatter).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use kourou_core::config::ChangelogConfig;
use kourou_core::remote::RemoteUrl;

use crate::formatter::{ChangelogFormatter, MarkdownFormatter};
use crate::rules::RuleTable;
use crate::types::ClassifiedCommit;

/// A titled group of commits in a release
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Section title from the rule table
    pub title: String,
    /// Commits in this section, in input order
    pub commits: Vec<ClassifiedCommit>,
}

impl Section {
    /// Create a new section
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            commits: Vec::new(),
        }
    }

    /// Check if the section is empty
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

/// Everything one rendered release needs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseSummary {
    /// The new version, as its display string
    pub version: String,
    /// The new version's tag name
    pub tag: String,
    /// Tag of the previous release; `None` on a first release
    pub previous_tag: Option<String>,
    /// Release date
    pub date: DateTime<Utc>,
    /// Sections in rule-table order
    pub sections: Vec<Section>,
    /// Commits carrying a breaking-change note
    pub breaking: Vec<ClassifiedCommit>,
}

impl ReleaseSummary {
    /// Set the date (the default is the current time)
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }
}

/// Compare-link targets for release headers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareLinks {
    /// Base compare URL (e.g. "https://github.com/acme/widget/compare")
    pub base: String,
    /// Branch used in place of a missing previous tag
    pub default_branch: String,
}

impl CompareLinks {
    /// Create compare links from a parsed remote
    pub fn from_remote(remote: &RemoteUrl, default_branch: impl Into<String>) -> Self {
        Self {
            base: remote.compare_url(),
            default_branch: default_branch.into(),
        }
    }

    /// The compare URL for a release
    pub fn release_url(&self, previous_tag: Option<&str>, tag: &str) -> String {
        let from = previous_tag.unwrap_or(&self.default_branch);
        format!("{}/{}...{}/", self.base, from, tag)
    }
}

/// Builds and formats changelog sections for a release
pub struct ChangelogRenderer {
    table: RuleTable,
    formatter: Box<dyn ChangelogFormatter>,
    config: ChangelogConfig,
}

impl ChangelogRenderer {
    /// Create a renderer with the built-in rule table and markdown output
    pub fn new(config: ChangelogConfig) -> Self {
        Self {
            table: RuleTable::conventional(),
            formatter: Box::new(MarkdownFormatter::new()),
            config,
        }
    }

    /// Use a custom rule table
    pub fn with_table(mut self, table: RuleTable) -> Self {
        self.table = table;
        self
    }

    /// Use a custom formatter
    pub fn with_formatter<F: ChangelogFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Group commits into a release summary.
    ///
    /// Sections come out in the table's declaration order regardless of
    /// input order; commits keep their input order within a section. A
    /// breaking commit appears both in its type section and in the breaking
    /// list.
    #[instrument(skip_all, fields(commit_count = commits.len()))]
    pub fn summarize(
        &self,
        version: impl Into<String>,
        tag: impl Into<String>,
        previous_tag: Option<String>,
        commits: &[ClassifiedCommit],
    ) -> ReleaseSummary {
        let version = version.into();
        info!(%version, commit_count = commits.len(), "building release summary");

        let mut sections = Vec::new();
        for rule in self.table.rules() {
            let mut section = Section::new(&rule.header);
            section.commits.extend(
                commits
                    .iter()
                    .filter(|commit| commit.commit_type == Some(rule.commit_type))
                    .cloned(),
            );
            if !section.is_empty() {
                sections.push(section);
            }
        }

        let breaking: Vec<ClassifiedCommit> = commits
            .iter()
            .filter(|commit| commit.is_breaking())
            .cloned()
            .collect();

        debug!(
            section_count = sections.len(),
            breaking_count = breaking.len(),
            "release summary built"
        );

        ReleaseSummary {
            version,
            tag: tag.into(),
            previous_tag,
            date: Utc::now(),
            sections,
            breaking,
        }
    }

    /// Format a release summary into the changelog document
    pub fn render(&self, summary: &ReleaseSummary, links: &CompareLinks) -> String {
        self.formatter.format(summary, &self.config, links)
    }

    /// Group and format in one step
    pub fn render_release(
        &self,
        version: impl Into<String>,
        tag: impl Into<String>,
        previous_tag: Option<String>,
        commits: &[ClassifiedCommit],
        links: &CompareLinks,
    ) -> String {
        let summary = self.summarize(version, tag, previous_tag, commits);
        self.render(&summary, links)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{CommitParser, ConventionalParser};

    fn classify(messages: &[&str]) -> Vec<ClassifiedCommit> {
        let parser = ConventionalParser::new();
        messages.iter().map(|m| parser.classify(m)).collect()
    }

    fn links() -> CompareLinks {
        CompareLinks {
            base: "https://github.com/acme/widget/compare".to_string(),
            default_branch: "master".to_string(),
        }
    }

    #[test]
    fn test_sections_follow_table_order() {
        let renderer = ChangelogRenderer::new(ChangelogConfig::default());
        let commits = classify(&["fix: null check", "feat: add search", "feat: add filters"]);

        let summary = renderer.summarize("1.3.0", "v1.3.0", Some("v1.2.3".into()), &commits);

        let titles: Vec<&str> = summary.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Features", "Bug Fixes"]);
        assert_eq!(summary.sections[0].commits.len(), 2);
        assert_eq!(summary.sections[0].commits[0].subject, "add search");
    }

    #[test]
    fn test_empty_sections_are_dropped() {
        let renderer = ChangelogRenderer::new(ChangelogConfig::default());
        let commits = classify(&["docs: readme"]);

        let summary = renderer.summarize("1.0.1", "v1.0.1", None, &commits);

        assert_eq!(summary.sections.len(), 1);
        assert_eq!(summary.sections[0].title, "Documentation");
    }

    #[test]
    fn test_breaking_commits_listed_separately() {
        let renderer = ChangelogRenderer::new(ChangelogConfig::default());
        let commits = classify(&[
            "feat: add api\n\nBREAKING CHANGE: removes old api",
            "fix: crash",
        ]);

        let summary = renderer.summarize("2.0.0", "v2.0.0", Some("v1.2.3".into()), &commits);

        assert_eq!(summary.breaking.len(), 1);
        assert_eq!(summary.breaking[0].subject, "add api");
        // Still present in its own type section
        assert_eq!(summary.sections[0].title, "Features");
        assert_eq!(summary.sections[0].commits[0].subject, "add api");
    }

    #[test]
    fn test_unknown_types_render_nowhere() {
        let renderer = ChangelogRenderer::new(ChangelogConfig::default());
        let commits = classify(&["random commit message"]);

        let summary = renderer.summarize("1.0.1", "v1.0.1", None, &commits);
        assert!(summary.sections.is_empty());
        assert!(summary.breaking.is_empty());
    }

    #[test]
    fn test_compare_link_fallback() {
        let links = links();
        assert_eq!(
            links.release_url(Some("v1.2.3"), "v1.3.0"),
            "https://github.com/acme/widget/compare/v1.2.3...v1.3.0/"
        );
        assert_eq!(
            links.release_url(None, "v1.3.0"),
            "https://github.com/acme/widget/compare/master...v1.3.0/"
        );
    }

    #[test]
    fn test_render_release_includes_sections() {
        let renderer = ChangelogRenderer::new(ChangelogConfig::default());
        let commits = classify(&["feat: add search", "fix: null check"]);

        let output =
            renderer.render_release("1.3.0", "v1.3.0", Some("v1.2.3".into()), &commits, &links());

        assert!(output.contains("### Features"));
        assert!(output.contains("- add search"));
        assert!(output.contains("### Bug Fixes"));
    }
}
