//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.ticketdash.toml` files. The API token is deliberately not part of the
//! file; it comes from the `JIRA_API_TOKEN` environment variable or flag.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Jira connection settings.
    #[serde(default)]
    pub jira: JiraConfig,

    /// Report output settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Jira connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JiraConfig {
    /// Base URL of the Jira instance, e.g. `https://example.atlassian.net`.
    #[serde(default)]
    pub base_url: String,

    /// Account username (usually an email address).
    #[serde(default)]
    pub username: String,

    /// Project key the dashboard reports on.
    #[serde(default = "default_project")]
    pub project: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for JiraConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            username: String::new(),
            project: default_project(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_project() -> String {
    "MOP".to_string()
}

fn default_timeout() -> u64 {
    30
}

/// Report output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Default output file path.
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
        }
    }
}

fn default_output() -> String {
    "ticket_dashboard.html".to_string()
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(".ticketdash.toml");

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments (and their environment variable fallbacks) take
    /// precedence over config file settings.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref base_url) = args.base_url {
            self.jira.base_url = base_url.clone();
        }
        if let Some(ref username) = args.user {
            self.jira.username = username.clone();
        }
        if let Some(ref project) = args.project {
            self.jira.project = project.clone();
        }
        if let Some(timeout) = args.timeout {
            self.jira.timeout_seconds = timeout;
        }
        if let Some(ref output) = args.output {
            self.report.output = output.display().to_string();
        }
    }

    /// Validate that the merged configuration is usable.
    pub fn validate(&self) -> Result<(), String> {
        if self.jira.base_url.is_empty() {
            return Err(
                "Jira base URL is not set (use --base-url, JIRA_BASE_URL, or .ticketdash.toml)"
                    .to_string(),
            );
        }
        if !self.jira.base_url.starts_with("http://") && !self.jira.base_url.starts_with("https://")
        {
            return Err("Jira base URL must start with 'http://' or 'https://'".to_string());
        }
        if self.jira.username.is_empty() {
            return Err(
                "Jira username is not set (use --user, JIRA_USERNAME, or .ticketdash.toml)"
                    .to_string(),
            );
        }
        if self.jira.project.is_empty() {
            return Err("Jira project key must not be empty".to_string());
        }
        Ok(())
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.jira.project, "MOP");
        assert_eq!(config.jira.timeout_seconds, 30);
        assert_eq!(config.report.output, "ticket_dashboard.html");
        assert!(config.jira.base_url.is_empty());
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[jira]
base_url = "https://example.atlassian.net"
username = "reporter@example.com"
project = "WEB"
timeout_seconds = 10

[report]
output = "web_dashboard.html"
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.jira.base_url, "https://example.atlassian.net");
        assert_eq!(config.jira.username, "reporter@example.com");
        assert_eq!(config.jira.project, "WEB");
        assert_eq!(config.jira.timeout_seconds, 10);
        assert_eq!(config.report.output, "web_dashboard.html");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[jira]\nbase_url = \"https://j.example\"\n").unwrap();
        assert_eq!(config.jira.base_url, "https://j.example");
        assert_eq!(config.jira.project, "MOP");
        assert_eq!(config.report.output, "ticket_dashboard.html");
    }

    #[test]
    fn test_validate_requires_base_url_and_username() {
        let mut config = Config::default();
        assert!(config.validate().is_err());

        config.jira.base_url = "https://example.atlassian.net".to_string();
        assert!(config.validate().is_err());

        config.jira.username = "reporter@example.com".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_scheme() {
        let mut config = Config::default();
        config.jira.base_url = "example.atlassian.net".to_string();
        config.jira.username = "reporter@example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(!toml_str.is_empty());
        assert!(toml_str.contains("[jira]"));
        assert!(toml_str.contains("[report]"));
        assert!(toml_str.contains("project = \"MOP\""));
        // The token never belongs in the config file.
        assert!(!toml_str.contains("token"));
    }
}
