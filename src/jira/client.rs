//! HTTP client for the Jira search endpoint.
//!
//! All requests use HTTP Basic Auth with a username and API token. There is
//! no retry logic: a failed query fails fast and the caller decides whether
//! the dashboard can still be rendered.

use crate::jira::jql;
use crate::models::SearchResult;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Connection settings for the Jira client.
///
/// Injected explicitly so nothing about the target instance is baked into
/// the binary.
#[derive(Debug, Clone)]
pub struct JiraSettings {
    /// Base URL of the Jira instance, e.g. `https://example.atlassian.net`.
    pub base_url: String,
    /// Account username (usually an email address).
    pub username: String,
    /// API token paired with the username.
    pub api_token: String,
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
}

/// Errors returned by Jira queries.
#[derive(Debug, Error)]
pub enum JiraError {
    /// The tracker rejected the credentials (HTTP 401/403).
    #[error("Jira rejected the credentials (HTTP {status}); check JIRA_API_TOKEN and username")]
    Unauthorized { status: u16, body: String },

    /// Any other non-success HTTP response.
    #[error("Jira returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Transport-level failure (connection, timeout, malformed body).
    #[error("request to Jira failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl JiraError {
    /// True for the authentication-flavored failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, JiraError::Unauthorized { .. })
    }
}

/// Build the search endpoint URL from an instance base URL.
fn search_endpoint(base_url: &str) -> String {
    format!("{}/rest/api/3/search", base_url.trim_end_matches('/'))
}

/// Map a non-success HTTP status to the typed error.
///
/// 401 and 403 both surface as `Unauthorized`; Jira answers either
/// depending on how the credentials are wrong.
fn error_for_status(status: StatusCode, body: String) -> JiraError {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        JiraError::Unauthorized {
            status: status.as_u16(),
            body,
        }
    } else {
        JiraError::Http {
            status: status.as_u16(),
            body,
        }
    }
}

/// Client for the Jira search API.
pub struct JiraClient {
    settings: JiraSettings,
    http: reqwest::Client,
}

impl JiraClient {
    /// Create a client with the given settings.
    pub fn new(settings: JiraSettings) -> Result<Self, JiraError> {
        info!(
            "Initializing Jira client for {} as {}",
            settings.base_url, settings.username
        );

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()?;

        Ok(Self { settings, http })
    }

    /// Run a single JQL search and return the parsed result set.
    pub async fn search(&self, query: &str) -> Result<SearchResult, JiraError> {
        let url = search_endpoint(&self.settings.base_url);
        debug!("GET {} jql={}", url, query);

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.settings.username, Some(&self.settings.api_token))
            .query(&[("jql", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, body));
        }

        let result: SearchResult = response.json().await?;
        debug!("Query matched {} issues", result.total);
        Ok(result)
    }

    /// All issues in the project.
    pub async fn all_issues(&self, project: &str) -> Result<SearchResult, JiraError> {
        self.search(&jql::all_issues(project)).await
    }

    /// Issues completed within the last 7 days.
    pub async fn completed_last_week(&self, project: &str) -> Result<SearchResult, JiraError> {
        self.search(&jql::completed_last_week(project)).await
    }

    /// Issues with a story point estimate in `[min_points, max_points]`,
    /// or `[min_points, inf)` when no upper bound is given.
    pub async fn by_story_points(
        &self,
        project: &str,
        min_points: u32,
        max_points: Option<u32>,
    ) -> Result<SearchResult, JiraError> {
        self.search(&jql::story_points_in_range(project, min_points, max_points))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_settings() -> JiraSettings {
        JiraSettings {
            base_url: "https://example.atlassian.net".to_string(),
            username: "reporter@example.com".to_string(),
            api_token: "token".to_string(),
            timeout_seconds: 30,
        }
    }

    #[test]
    fn test_search_endpoint() {
        assert_eq!(
            search_endpoint("https://example.atlassian.net"),
            "https://example.atlassian.net/rest/api/3/search"
        );
    }

    #[test]
    fn test_search_endpoint_trailing_slash() {
        assert_eq!(
            search_endpoint("https://example.atlassian.net/"),
            "https://example.atlassian.net/rest/api/3/search"
        );
    }

    #[test]
    fn test_client_construction() {
        assert!(JiraClient::new(make_settings()).is_ok());
    }

    #[test]
    fn test_error_for_status_unauthorized() {
        let err = error_for_status(StatusCode::UNAUTHORIZED, "denied".to_string());
        assert!(err.is_auth_error());
        match err {
            JiraError::Unauthorized { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "denied");
            }
            other => panic!("expected Unauthorized, got {:?}", other),
        }
    }

    #[test]
    fn test_error_for_status_forbidden() {
        let err = error_for_status(StatusCode::FORBIDDEN, String::new());
        assert!(err.is_auth_error());
    }

    #[test]
    fn test_error_for_status_server_error() {
        let err = error_for_status(StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string());
        assert!(!err.is_auth_error());
        match err {
            JiraError::Http { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected Http, got {:?}", other),
        }
    }

    #[test]
    fn test_unauthorized_is_auth_error() {
        let err = JiraError::Unauthorized {
            status: 401,
            body: String::new(),
        };
        assert!(err.is_auth_error());

        let err = JiraError::Http {
            status: 500,
            body: "boom".to_string(),
        };
        assert!(!err.is_auth_error());
    }

    #[test]
    fn test_error_display() {
        let err = JiraError::Http {
            status: 404,
            body: "no such project".to_string(),
        };
        assert_eq!(err.to_string(), "Jira returned HTTP 404: no such project");

        let err = JiraError::Unauthorized {
            status: 401,
            body: String::new(),
        };
        assert!(err.to_string().contains("JIRA_API_TOKEN"));
    }
}
