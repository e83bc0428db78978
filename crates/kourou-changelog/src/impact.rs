//! Version impact aggregation

use tracing::debug;

use kourou_version::VersionImpact;

use crate::rules::CommitType;
use crate::types::ClassifiedCommit;

/// Reduce a list of classified commits to a single impact level.
///
/// `feat` raises the impact to at least minor, `fix` to at least patch, and
/// a breaking-change note to major regardless of type. Every other type
/// contributes nothing, and an empty list yields [`VersionImpact::None`].
/// The fold is a pure maximum, so input order cannot change the result.
pub fn compute_impact(commits: &[ClassifiedCommit]) -> VersionImpact {
    let mut impact = VersionImpact::None;

    for commit in commits {
        match commit.commit_type {
            Some(CommitType::Feat) => impact = impact.max(VersionImpact::Minor),
            Some(CommitType::Fix) => impact = impact.max(VersionImpact::Patch),
            _ => {}
        }

        if commit.is_breaking() {
            impact = impact.max(VersionImpact::Major);
        }
    }

    debug!(commit_count = commits.len(), impact = %impact, "impact computed");
    impact
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{CommitParser, ConventionalParser};

    fn classify(messages: &[&str]) -> Vec<ClassifiedCommit> {
        let parser = ConventionalParser::new();
        messages.iter().map(|m| parser.classify(m)).collect()
    }

    #[test]
    fn test_empty_list_is_none() {
        assert_eq!(compute_impact(&[]), VersionImpact::None);
    }

    #[test]
    fn test_feat_is_minor() {
        let commits = classify(&["feat: add search"]);
        assert_eq!(compute_impact(&commits), VersionImpact::Minor);
    }

    #[test]
    fn test_fix_is_patch() {
        let commits = classify(&["fix: null check"]);
        assert_eq!(compute_impact(&commits), VersionImpact::Patch);
    }

    #[test]
    fn test_feat_outranks_fix() {
        let commits = classify(&["fix: null check", "feat: add search"]);
        assert_eq!(compute_impact(&commits), VersionImpact::Minor);
    }

    #[test]
    fn test_breaking_note_is_major() {
        let commits = classify(&["fix: crash\n\nBREAKING CHANGE: removes legacy API"]);
        assert_eq!(compute_impact(&commits), VersionImpact::Major);
    }

    #[test]
    fn test_breaking_outranks_type() {
        let commits = classify(&[
            "feat: add search",
            "docs: readme\n\nBREAKING CHANGE: config keys renamed",
        ]);
        assert_eq!(compute_impact(&commits), VersionImpact::Major);
    }

    #[test]
    fn test_other_types_contribute_nothing() {
        let commits = classify(&["chore: bump deps", "style: fmt", "ci: cache"]);
        assert_eq!(compute_impact(&commits), VersionImpact::None);
    }

    #[test]
    fn test_order_does_not_matter() {
        let forward = classify(&["feat: a", "fix: b", "chore: c"]);
        let backward = classify(&["chore: c", "fix: b", "feat: a"]);
        assert_eq!(compute_impact(&forward), compute_impact(&backward));
    }

    #[test]
    fn test_adding_a_commit_never_decreases_impact() {
        let messages = [
            "chore: deps",
            "fix: crash",
            "feat: search",
            "feat: api\n\nBREAKING CHANGE: gone",
        ];

        let mut previous = VersionImpact::None;
        for len in 0..=messages.len() {
            let commits = classify(&messages[..len]);
            let impact = compute_impact(&commits);
            assert!(impact >= previous);
            previous = impact;
        }
    }
}
