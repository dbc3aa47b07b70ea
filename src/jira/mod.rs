//! Jira REST API access.
//!
//! This module provides the HTTP client for the Jira search endpoint and
//! the JQL builders for the dashboard's canned queries.

mod client;
pub mod jql;

pub use client::{JiraClient, JiraError, JiraSettings};
