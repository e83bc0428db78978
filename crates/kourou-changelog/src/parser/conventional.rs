//! Conventional Commits classifier
//!
//! Parses commit messages following the Conventional Commits specification:
//! https://www.conventionalcommits.org/

use std::sync::LazyLock;

use regex::Regex;

use super::CommitParser;
use crate::rules::RuleTable;
use crate::types::{ClassifiedCommit, CommitNote, BREAKING_CHANGE};

/// Regex for parsing conventional commit headers
static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<type>\w*)(?:\((?P<scope>.*)\))?: (?P<subject>.*)$").expect("Invalid regex")
});

/// Classifier for Conventional Commits format
pub struct ConventionalParser {
    table: RuleTable,
    note_keywords: Vec<String>,
}

impl ConventionalParser {
    /// Create a classifier over the built-in rule table
    pub fn new() -> Self {
        Self::with_table(RuleTable::conventional())
    }

    /// Create a classifier over a custom rule table
    pub fn with_table(table: RuleTable) -> Self {
        Self {
            table,
            note_keywords: vec![BREAKING_CHANGE.to_string()],
        }
    }

    /// Add a note keyword to scan body lines for
    pub fn with_note_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.note_keywords.push(keyword.into());
        self
    }

    fn parse_header(&self, header: &str, commit: &mut ClassifiedCommit) {
        match HEADER_REGEX.captures(header) {
            Some(caps) => {
                commit.commit_type = self.table.type_for_tag(&caps["type"]);
                commit.scope = caps
                    .name("scope")
                    .map(|m| m.as_str())
                    .filter(|s| !s.is_empty())
                    .map(str::to_string);
                commit.subject = caps["subject"].to_string();
            }
            None => {
                commit.subject = header.to_string();
            }
        }
    }

    fn parse_note(&self, line: &str) -> Option<CommitNote> {
        for keyword in &self.note_keywords {
            if let Some(rest) = line.strip_prefix(keyword.as_str()) {
                let text = rest.strip_prefix(':').unwrap_or(rest).trim_start();
                return Some(CommitNote::new(keyword, text));
            }
        }
        None
    }
}

impl Default for ConventionalParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CommitParser for ConventionalParser {
    fn classify(&self, message: &str) -> ClassifiedCommit {
        let mut commit = ClassifiedCommit::default();

        let lines: Vec<&str> = message
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let Some((header, body)) = lines.split_first() else {
            return commit;
        };

        self.parse_header(header, &mut commit);

        for line in body {
            if let Some(note) = self.parse_note(line) {
                commit.notes.push(note);
            }
        }

        commit
    }
}
