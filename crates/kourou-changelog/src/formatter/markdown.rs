//! Markdown changelog formatter

use tracing::{debug, instrument};

use kourou_core::config::ChangelogConfig;

use super::ChangelogFormatter;
use crate::renderer::{CompareLinks, ReleaseSummary};
use crate::types::ClassifiedCommit;

/// Markdown changelog formatter
pub struct MarkdownFormatter {
    /// Emit an HTML anchor above each release header
    pub include_anchor: bool,
}

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self {
            include_anchor: true,
        }
    }

    fn push_commit_list(output: &mut String, title: &str, commits: &[ClassifiedCommit]) {
        output.push_str(&format!("### {title}\n\n"));
        for commit in commits {
            output.push_str(&format!("- {}\n", commit.subject));
        }
        output.push('\n');
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    #[instrument(skip(self, summary, config, links), fields(version = %summary.version, section_count = summary.sections.len()))]
    fn format(
        &self,
        summary: &ReleaseSummary,
        config: &ChangelogConfig,
        links: &CompareLinks,
    ) -> String {
        let mut output = String::new();

        // Document header and legend, re-emitted on every render so the
        // output can replace the boilerplate of an existing file.
        output.push_str(&format!("# {}\n\n", config.title));
        output.push_str(&format!(
            "All notable changes to this project will be documented in this file. \
             See [Conventional Commits]({}) for commit guidelines.\n\n",
            config.convention_url
        ));
        output.push_str("---\n\n");

        if self.include_anchor {
            output.push_str(&format!("<a name=\"{}\"></a>\n", summary.version));
        }

        let compare = links.release_url(summary.previous_tag.as_deref(), &summary.tag);
        let date = summary.date.format("%Y-%m-%d");
        output.push_str(&format!(
            "## [{}]({}) ({})\n\n",
            summary.version, compare, date
        ));

        for section in &summary.sections {
            if section.is_empty() {
                continue;
            }
            Self::push_commit_list(&mut output, &section.title, &section.commits);
        }

        if !summary.breaking.is_empty() {
            Self::push_commit_list(&mut output, "Breaking Changes", &summary.breaking);
        }

        debug!(output_len = output.len(), "markdown changelog formatted");
        output
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Section;
    use chrono::{TimeZone, Utc};

    fn commit(subject: &str) -> ClassifiedCommit {
        ClassifiedCommit {
            subject: subject.to_string(),
            ..Default::default()
        }
    }

    fn summary() -> ReleaseSummary {
        ReleaseSummary {
            version: "1.3.0".to_string(),
            tag: "v1.3.0".to_string(),
            previous_tag: Some("v1.2.3".to_string()),
            date: Utc.with_ymd_and_hms(2024, 3, 14, 12, 0, 0).unwrap(),
            sections: vec![
                Section {
                    title: "Features".to_string(),
                    commits: vec![commit("add search"), commit("add filters")],
                },
                Section {
                    title: "Bug Fixes".to_string(),
                    commits: vec![commit("null check")],
                },
            ],
            breaking: vec![],
        }
    }

    fn links() -> CompareLinks {
        CompareLinks {
            base: "https://github.com/acme/widget/compare".to_string(),
            default_branch: "master".to_string(),
        }
    }

    #[test]
    fn test_format_document_header() {
        let formatter = MarkdownFormatter::new();
        let output = formatter.format(&summary(), &ChangelogConfig::default(), &links());

        assert!(output.starts_with("# Change Log\n"));
        assert!(output.contains("[Conventional Commits](https://conventionalcommits.org)"));
        assert!(output.contains("---\n"));
    }

    #[test]
    fn test_format_release_header() {
        let formatter = MarkdownFormatter::new();
        let output = formatter.format(&summary(), &ChangelogConfig::default(), &links());

        assert!(output.contains("<a name=\"1.3.0\"></a>"));
        assert!(output.contains(
            "## [1.3.0](https://github.com/acme/widget/compare/v1.2.3...v1.3.0/) (2024-03-14)"
        ));
    }

    #[test]
    fn test_format_sections_in_order() {
        let formatter = MarkdownFormatter::new();
        let output = formatter.format(&summary(), &ChangelogConfig::default(), &links());

        let features = output.find("### Features").unwrap();
        let fixes = output.find("### Bug Fixes").unwrap();
        assert!(features < fixes);

        let search = output.find("- add search").unwrap();
        let filters = output.find("- add filters").unwrap();
        assert!(search < filters);
    }

    #[test]
    fn test_format_breaking_changes_section() {
        let formatter = MarkdownFormatter::new();
        let mut summary = summary();
        summary.breaking.push(commit("remove legacy API"));

        let output = formatter.format(&summary, &ChangelogConfig::default(), &links());

        assert!(output.contains("### Breaking Changes"));
        assert!(output.contains("- remove legacy API"));
    }

    #[test]
    fn test_format_first_release_links_default_branch() {
        let formatter = MarkdownFormatter::new();
        let mut summary = summary();
        summary.previous_tag = None;

        let output = formatter.format(&summary, &ChangelogConfig::default(), &links());

        assert!(output
            .contains("## [1.3.0](https://github.com/acme/widget/compare/master...v1.3.0/)"));
    }
}
