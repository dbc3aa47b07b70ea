//! Data models for the ticket dashboard.
//!
//! This module contains the structures used throughout the application:
//! the wire types deserialized from the Jira search endpoint and the
//! aggregated dashboard that the report generators consume.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a ticket, derived from its labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketCategory {
    /// Carries the "frontend" label.
    Frontend,
    /// Carries the "backend" label (and no "frontend" label).
    Backend,
    /// Carries the "fullstack" label (and neither of the above).
    Fullstack,
    /// None of the recognized labels.
    Other,
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketCategory::Frontend => write!(f, "Frontend"),
            TicketCategory::Backend => write!(f, "Backend"),
            TicketCategory::Fullstack => write!(f, "Fullstack"),
            TicketCategory::Other => write!(f, "Other"),
        }
    }
}

/// Response from `GET /rest/api/3/search`.
///
/// Only the fields the dashboard consumes are modeled; Jira returns many more.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Total number of issues matching the query.
    pub total: usize,
    /// The issues in the current page of results.
    #[serde(default)]
    pub issues: Vec<Issue>,
}

/// A single issue as returned by the search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Issue key, e.g. "MOP-42".
    #[serde(default)]
    pub key: String,
    /// The subset of issue fields the dashboard reads.
    #[serde(default)]
    pub fields: IssueFields,
}

/// Issue fields relevant to aggregation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueFields {
    /// Free-text labels attached to the issue.
    #[serde(default)]
    pub labels: Vec<String>,
}

/// Per-category issue counts derived from label inspection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTally {
    pub frontend: usize,
    pub backend: usize,
    pub fullstack: usize,
    pub other: usize,
}

impl CategoryTally {
    /// Total issues across all four categories.
    pub fn total(&self) -> usize {
        self.frontend + self.backend + self.fullstack + self.other
    }

    /// Count for a single category.
    pub fn count(&self, category: TicketCategory) -> usize {
        match category {
            TicketCategory::Frontend => self.frontend,
            TicketCategory::Backend => self.backend,
            TicketCategory::Fullstack => self.fullstack,
            TicketCategory::Other => self.other,
        }
    }

    /// Increment the counter for a category.
    pub fn record(&mut self, category: TicketCategory) {
        match category {
            TicketCategory::Frontend => self.frontend += 1,
            TicketCategory::Backend => self.backend += 1,
            TicketCategory::Fullstack => self.fullstack += 1,
            TicketCategory::Other => self.other += 1,
        }
    }
}

/// Category percentages relative to the full ticket count.
///
/// Floor division; the four values may sum to less than 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPercentages {
    pub frontend: u8,
    pub backend: u8,
    pub fullstack: u8,
    pub other: u8,
}

/// A story-point threshold and its (possibly failed) ticket count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdTile {
    /// Human-readable label, e.g. "Story points >= 3".
    pub label: String,
    /// Inclusive lower bound on the estimate.
    pub min_points: u32,
    /// Inclusive upper bound, if the range is closed.
    pub max_points: Option<u32>,
    /// Matching issue count, if the query succeeded.
    pub count: Option<usize>,
    /// Error message, if the query failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ThresholdTile {
    /// Label for a threshold range, matching the original dashboard wording.
    pub fn describe(min_points: u32, max_points: Option<u32>) -> String {
        match max_points {
            Some(max) => format!("Story points between {} and {}", min_points, max),
            None => format!("Story points >= {}", min_points),
        }
    }
}

/// The fully aggregated dashboard: everything the renderers need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    /// Project key the queries were scoped to.
    pub project: String,
    /// When the dashboard was generated.
    pub generated_at: DateTime<Utc>,
    /// Total tickets in the project.
    pub total_tickets: usize,
    /// Tickets resolved as Done within the last 7 days.
    pub completed_last_week: usize,
    /// Per-category counts.
    pub tally: CategoryTally,
    /// Per-category percentages of the total.
    pub percentages: CategoryPercentages,
    /// Story-point threshold tiles, in display order.
    pub thresholds: Vec<ThresholdTile>,
}

impl Dashboard {
    /// True if every threshold query succeeded.
    pub fn all_thresholds_resolved(&self) -> bool {
        self.thresholds.iter().all(|t| t.count.is_some())
    }
}
