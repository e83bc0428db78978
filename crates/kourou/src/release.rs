//! Release planning pipeline
//!
//! Wires the classifier, impact calculator, incrementer, and renderer into
//! the one pass a release automation needs: commit messages in, next version
//! and changelog text out.

use serde::Serialize;
use tracing::{info, instrument};

use kourou_changelog::{
    compute_impact, ChangelogRenderer, ClassifiedCommit, CommitParser, CompareLinks,
    ConventionalParser, RuleTable,
};
use kourou_core::config::Config;
use kourou_core::error::{ChangelogError, Result};
use kourou_core::remote::RemoteUrl;
use kourou_core::source::CommitSource;
use kourou_version::{SemanticVersion, VersionImpact, VersionIncrementer};

/// The outcome of planning a release
#[derive(Debug, Clone, Serialize)]
pub struct ReleasePlan {
    /// The version the project is currently at
    pub current: SemanticVersion,
    /// The computed next version
    pub next: SemanticVersion,
    /// Aggregated impact; `None` when the version was supplied manually
    pub impact: Option<VersionImpact>,
    /// Tag name for the next version
    pub tag: String,
    /// Tag of the release being superseded, when a number moved
    pub previous_tag: Option<String>,
    /// The classified commits behind the plan
    pub commits: Vec<ClassifiedCommit>,
}

impl ReleasePlan {
    /// Named environment values for surrounding automation: the full semver
    /// string, the numeric core, and the tag name.
    pub fn environment(&self) -> Vec<(String, String)> {
        vec![
            ("KOUROU_SEMVER".to_string(), self.next.to_string()),
            ("KOUROU_VERSION".to_string(), self.next.core_version()),
            ("KOUROU_TAG".to_string(), self.tag.clone()),
        ]
    }
}

/// Computes release plans and changelogs from commit history
pub struct ReleasePlanner {
    config: Config,
    parser: ConventionalParser,
    incrementer: VersionIncrementer,
    renderer: ChangelogRenderer,
}

impl ReleasePlanner {
    /// Create a planner from configuration
    pub fn new(config: Config) -> Self {
        let incrementer = VersionIncrementer::new()
            .with_prerelease_label(&config.versioning.prerelease_label)
            .with_tag_prefix(&config.versioning.tag_prefix);
        let renderer = ChangelogRenderer::new(config.changelog.clone());

        Self {
            config,
            parser: ConventionalParser::new(),
            incrementer,
            renderer,
        }
    }

    /// Substitute the convention rule table
    pub fn with_table(mut self, table: RuleTable) -> Self {
        self.parser = ConventionalParser::with_table(table.clone());
        self.renderer = self.renderer.with_table(table);
        self
    }

    /// Plan the next release.
    ///
    /// `release_as` bypasses impact aggregation entirely: the supplied
    /// version is parsed and used as-is.
    #[instrument(skip(self, messages), fields(commit_count = messages.len()))]
    pub fn plan(
        &self,
        current_version: &str,
        messages: &[String],
        on_release_branch: bool,
        release_as: Option<&str>,
    ) -> Result<ReleasePlan> {
        let pattern = Some(self.config.versioning.tag_pattern.as_str());
        let current = SemanticVersion::parse(current_version, pattern)?;

        let commits: Vec<ClassifiedCommit> =
            messages.iter().map(|m| self.parser.classify(m)).collect();

        if let Some(version) = release_as {
            let next = SemanticVersion::parse(version, pattern)?;
            info!(current = %current, next = %next, "using manual release version");
            return Ok(ReleasePlan {
                tag: self.incrementer.tag_name(&next),
                current,
                next,
                impact: None,
                previous_tag: None,
                commits,
            });
        }

        let impact = compute_impact(&commits);
        let next = self
            .incrementer
            .next_version(&current, impact, on_release_branch);

        info!(current = %current, next = %next.version, impact = %impact, "release planned");

        Ok(ReleasePlan {
            current,
            tag: self.incrementer.tag_name(&next.version),
            next: next.version,
            impact: Some(impact),
            previous_tag: next.previous_tag,
            commits,
        })
    }

    /// Plan the next release from a commit source
    pub fn plan_from_source(
        &self,
        current_version: &str,
        source: &dyn CommitSource,
        release_as: Option<&str>,
    ) -> Result<ReleasePlan> {
        let messages = source.commit_messages()?;
        let on_release_branch = source.on_release_branch()?;
        self.plan(current_version, &messages, on_release_branch, release_as)
    }

    /// Render the changelog document for a plan.
    ///
    /// Requires a configured remote URL to build compare links.
    pub fn render_changelog(&self, plan: &ReleasePlan) -> Result<String> {
        let remote = self
            .config
            .repository
            .remote_url
            .as_deref()
            .and_then(RemoteUrl::parse)
            .ok_or(ChangelogError::MissingRemote)?;
        let links = CompareLinks::from_remote(&remote, &self.config.repository.branch);

        Ok(self.renderer.render_release(
            plan.next.to_string(),
            &plan.tag,
            plan.previous_tag.clone(),
            &plan.commits,
            &links,
        ))
    }
}
