//! Repository remote URL parsing
//!
//! Turns a configured git remote (scp-like or https form) into the web and
//! compare URLs the changelog links against.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static SCP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<user>[^@]+)@(?P<host>[^:]+):(?P<org>[^/]+)/(?P<repo>.+?)\.git$")
        .expect("Invalid regex")
});

static HTTPS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(?P<host>[^/]+)/(?P<org>[^/]+)/(?P<repo>.+?)(?:\.git)?/?$")
        .expect("Invalid regex")
});

/// A parsed repository remote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteUrl {
    /// Host name (e.g. "github.com")
    pub host: String,
    /// Owning organization or user
    pub organization: String,
    /// Repository name, without the ".git" suffix
    pub repository: String,
}

impl RemoteUrl {
    /// Parse a remote URL in scp-like (`git@host:org/repo.git`) or https
    /// (`https://host/org/repo`) form. Returns `None` for anything else.
    pub fn parse(url: &str) -> Option<Self> {
        let caps = SCP_REGEX
            .captures(url)
            .or_else(|| HTTPS_REGEX.captures(url))?;

        Some(Self {
            host: caps["host"].to_string(),
            organization: caps["org"].to_string(),
            repository: caps["repo"].to_string(),
        })
    }

    /// The browsable project URL
    pub fn web_url(&self) -> String {
        format!(
            "https://{}/{}/{}",
            self.host, self.organization, self.repository
        )
    }

    /// Base URL for commit-range comparison links
    pub fn compare_url(&self) -> String {
        format!("{}/compare", self.web_url())
    }
}
