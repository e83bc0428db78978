//! Configuration validation

use regex::Regex;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate a loaded configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.repository.branch.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "repository.branch".to_string(),
            message: "release branch must not be empty".to_string(),
        }
        .into());
    }

    if Regex::new(&config.versioning.tag_pattern).is_err() {
        return Err(ConfigError::InvalidValue {
            field: "versioning.tag_pattern".to_string(),
            message: format!(
                "'{}' is not a valid regular expression",
                config.versioning.tag_pattern
            ),
        }
        .into());
    }

    let label = &config.versioning.prerelease_label;
    if !label.is_empty()
        && !label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(ConfigError::InvalidValue {
            field: "versioning.prerelease_label".to_string(),
            message: format!("'{label}' contains characters not allowed in a pre-release tag"),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_empty_branch_rejected() {
        let mut config = Config::default();
        config.repository.branch = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_bad_tag_pattern_rejected() {
        let mut config = Config::default();
        config.versioning.tag_pattern = "[v".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_bad_prerelease_label_rejected() {
        let mut config = Config::default();
        config.versioning.prerelease_label = "pre.view".to_string();
        assert!(validate_config(&config).is_err());
    }
}
