//! Dashboard report generation.
//!
//! Renders the aggregated dashboard as a self-contained HTML page
//! (inline CSS and SVG charts, works offline) or as pretty-printed JSON.

mod charts;
mod html;

pub use html::generate_html_report;

use crate::models::Dashboard;
use anyhow::Result;

/// Generate a JSON report.
pub fn generate_json_report(dashboard: &Dashboard) -> Result<String> {
    serde_json::to_string_pretty(dashboard).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryPercentages, CategoryTally, ThresholdTile};
    use chrono::Utc;

    fn make_dashboard() -> Dashboard {
        Dashboard {
            project: "MOP".to_string(),
            generated_at: Utc::now(),
            total_tickets: 10,
            completed_last_week: 4,
            tally: CategoryTally {
                frontend: 3,
                backend: 2,
                fullstack: 1,
                other: 4,
            },
            percentages: CategoryPercentages {
                frontend: 30,
                backend: 20,
                fullstack: 10,
                other: 40,
            },
            thresholds: vec![ThresholdTile {
                label: ThresholdTile::describe(2, None),
                min_points: 2,
                max_points: None,
                count: Some(6),
                error: None,
            }],
        }
    }

    #[test]
    fn test_generate_json_report() {
        let json = generate_json_report(&make_dashboard()).unwrap();

        assert!(json.contains("\"project\": \"MOP\""));
        assert!(json.contains("\"total_tickets\": 10"));
        assert!(json.contains("\"completed_last_week\": 4"));
        assert!(json.contains("\"thresholds\""));
        // Errors are omitted from JSON when absent.
        assert!(!json.contains("\"error\""));
    }
}
