//! Changelog formatters

mod markdown;

pub use markdown::MarkdownFormatter;

use kourou_core::config::ChangelogConfig;

use crate::renderer::{CompareLinks, ReleaseSummary};

/// Trait for changelog formatters
pub trait ChangelogFormatter: Send + Sync {
    /// Format a release summary into a self-contained document
    fn format(
        &self,
        summary: &ReleaseSummary,
        config: &ChangelogConfig,
        links: &CompareLinks,
    ) -> String;

    /// Get the file extension for this format
    fn extension(&self) -> &'static str;
}

/// Merge a freshly rendered document with an existing changelog.
///
/// Everything above the first line beginning with `##` is boilerplate the
/// rendered document re-emits itself, so it is discarded; everything from
/// that line on is preserved below the new section.
pub fn splice(rendered: &str, existing: &str) -> String {
    let mut pos = 0;
    for line in existing.split_inclusive('\n') {
        if line.starts_with("##") {
            return format!("{rendered}\n{}", &existing[pos..]);
        }
        pos += line.len();
    }

    rendered.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splice_keeps_prior_releases() {
        let existing = "# Change Log\n\nlegend text\n\n## [1.0.0](url) (2024-01-01)\n\n- old\n";
        let rendered = "# Change Log\n\n## [1.1.0](url) (2024-02-01)\n\n- new\n";

        let merged = splice(rendered, existing);

        assert!(merged.starts_with(rendered));
        assert!(merged.contains("## [1.0.0](url) (2024-01-01)"));
        // The old boilerplate is gone; only the new document's title remains.
        assert_eq!(merged.matches("# Change Log").count(), 1);
        assert!(!merged.contains("legend text"));
    }

    #[test]
    fn test_splice_without_marker_replaces_file() {
        let merged = splice("# Change Log\n\nnew\n", "just some notes\n");
        assert_eq!(merged, "# Change Log\n\nnew\n");
    }

    #[test]
    fn test_splice_empty_existing() {
        let merged = splice("rendered\n", "");
        assert_eq!(merged, "rendered\n");
    }
}
