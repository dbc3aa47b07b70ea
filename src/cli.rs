//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;

/// Ticketdash - Jira ticket dashboard generator
///
/// Queries a Jira project for label and story-point breakdowns and renders
/// the result as a single self-contained HTML page (or JSON).
///
/// Examples:
///   ticketdash --base-url https://example.atlassian.net --user me@example.com
///   ticketdash -p WEB --output web_dashboard.html
///   ticketdash --format json --output dashboard.json
///   ticketdash --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Base URL of the Jira instance
    ///
    /// Example: https://example.atlassian.net.
    /// Can also be set via JIRA_BASE_URL or .ticketdash.toml.
    #[arg(long, value_name = "URL", env = "JIRA_BASE_URL")]
    pub base_url: Option<String>,

    /// Jira account username (usually an email address)
    ///
    /// Can also be set via JIRA_USERNAME or .ticketdash.toml.
    #[arg(short, long, value_name = "NAME", env = "JIRA_USERNAME")]
    pub user: Option<String>,

    /// Jira API token paired with the username
    ///
    /// Read from the JIRA_API_TOKEN environment variable; never stored in
    /// the config file.
    #[arg(long, value_name = "TOKEN", env = "JIRA_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Project key to report on
    #[arg(short, long, value_name = "KEY", env = "JIRA_PROJECT")]
    pub project: Option<String>,

    /// Output file path for the dashboard
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (html, json)
    #[arg(long, default_value = "html", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .ticketdash.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .ticketdash.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Self-contained HTML page (default)
    #[default]
    Html,
    /// JSON document
    Json,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err("Timeout must be at least 1 second".to_string());
            }
        }

        if let Some(ref base_url) = self.base_url {
            if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                return Err("Jira base URL must start with 'http://' or 'https://'".to_string());
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
