//! HTML dashboard page generation.
//!
//! Produces a single self-contained page: a header, nine summary tiles,
//! a bar chart, and a pie chart. All CSS is inlined; the page works
//! offline with no scripting.

use crate::models::{Dashboard, ThresholdTile};
use crate::report::charts::{render_bar_chart, render_pie_chart};

/// Render the complete dashboard page.
pub fn generate_html_report(dashboard: &Dashboard) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{project} Ticket Dashboard</title>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        <h1>{project} Ticket Dashboard</h1>
        {tiles}
        {charts}
        {footer}
    </div>
</body>
</html>"#,
        project = escape(&dashboard.project),
        css = inline_css(),
        tiles = render_tiles(dashboard),
        charts = render_charts(dashboard),
        footer = render_footer(dashboard),
    )
}

/// The nine summary tiles: completed count, four category percentages,
/// four story-point threshold counts.
fn render_tiles(dashboard: &Dashboard) -> String {
    let mut tiles = String::new();
    tiles.push_str("<div class=\"tile-grid\">\n");

    tiles.push_str(&tile(
        "Tickets Completed Last 7 Days",
        &dashboard.completed_last_week.to_string(),
    ));
    tiles.push_str(&tile(
        "Frontend Tickets Percentage",
        &format!("{}%", dashboard.percentages.frontend),
    ));
    tiles.push_str(&tile(
        "Backend Tickets Percentage",
        &format!("{}%", dashboard.percentages.backend),
    ));
    tiles.push_str(&tile(
        "Fullstack Tickets Percentage",
        &format!("{}%", dashboard.percentages.fullstack),
    ));
    tiles.push_str(&tile(
        "Other Tickets Percentage",
        &format!("{}%", dashboard.percentages.other),
    ));

    for threshold in &dashboard.thresholds {
        tiles.push_str(&threshold_tile(threshold));
    }

    tiles.push_str("</div>\n");
    tiles
}

/// A single labeled value tile.
fn tile(label: &str, value: &str) -> String {
    format!(
        "<div class=\"tile\"><h3>{}</h3><p>{}</p></div>\n",
        escape(label),
        escape(value)
    )
}

/// A threshold tile; failed queries render a failure note instead of a count.
fn threshold_tile(threshold: &ThresholdTile) -> String {
    match threshold.count {
        Some(count) => tile(&threshold.label, &count.to_string()),
        None => format!(
            "<div class=\"tile tile-error\"><h3>{}</h3><p class=\"error-note\">unavailable: {}</p></div>\n",
            escape(&threshold.label),
            escape(threshold.error.as_deref().unwrap_or("query failed")),
        ),
    }
}

/// Side-by-side bar and pie charts.
fn render_charts(dashboard: &Dashboard) -> String {
    format!(
        r#"<div class="chart-row">
<div class="chart-card">
<h2>Ticket Types</h2>
{bar}
</div>
<div class="chart-card">
<h2>Number of Tickets vs. Completed Last 7 Days</h2>
{pie}
</div>
</div>
"#,
        bar = render_bar_chart(&dashboard.percentages),
        pie = render_pie_chart(dashboard.total_tickets, dashboard.completed_last_week),
    )
}

fn render_footer(dashboard: &Dashboard) -> String {
    format!(
        "<p class=\"footer\">Generated {} &middot; {} tickets in project {}</p>\n",
        dashboard.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        dashboard.total_tickets,
        escape(&dashboard.project),
    )
}

/// Page styling, carried over from the original dashboard's look:
/// light gray page, white cards with a soft shadow.
fn inline_css() -> &'static str {
    r#"
body { background-color: #F5F5F5; font-family: 'Segoe UI', Helvetica, Arial, sans-serif; margin: 0; color: #333333; }
.container { max-width: 1100px; margin: 0 auto; padding: 20px; }
h1 { background-color: #FFFFFF; padding: 10px; border-radius: 5px; box-shadow: 2px 2px 5px rgba(0, 0, 0, 0.1); }
.tile-grid { display: grid; grid-template-columns: repeat(3, 1fr); grid-gap: 20px; margin-bottom: 20px; }
.tile { background-color: #FFFFFF; padding: 20px; border-radius: 5px; box-shadow: 2px 2px 5px rgba(0, 0, 0, 0.1); }
.tile h3 { margin: 0 0 8px 0; font-size: 14px; font-weight: 600; }
.tile p { margin: 0; font-size: 28px; }
.tile-error { border-left: 4px solid #FF6F61; }
.error-note { font-size: 14px; color: #AA3333; }
.chart-row { display: grid; grid-template-columns: 3fr 2fr; grid-gap: 20px; }
.chart-card { background-color: #FFFFFF; padding: 20px; border-radius: 5px; box-shadow: 2px 2px 5px rgba(0, 0, 0, 0.1); }
.chart-card h2 { font-size: 16px; margin-top: 0; }
.chart { width: 100%; height: auto; }
.chart-empty { color: #666666; }
.footer { color: #888888; font-size: 12px; margin-top: 20px; }
"#
}

/// Minimal HTML escaping for text interpolated into the page.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryPercentages, CategoryTally};
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
            thresholds: vec![
                ThresholdTile {
                    label: ThresholdTile::describe(2, None),
                    min_points: 2,
                    max_points: None,
                    count: Some(6),
                    error: None,
                },
                ThresholdTile {
                    label: ThresholdTile::describe(3, None),
                    min_points: 3,
                    max_points: None,
                    count: Some(5),
                    error: None,
                },
                ThresholdTile {
                    label: ThresholdTile::describe(4, None),
                    min_points: 4,
                    max_points: None,
                    count: Some(3),
                    error: None,
                },
                ThresholdTile {
                    label: ThresholdTile::describe(5, Some(8)),
                    min_points: 5,
                    max_points: Some(8),
                    count: Some(7),
                    error: None,
                },
            ],
        }
    }

    #[test]
    fn test_page_structure() {
        let html = generate_html_report(&make_dashboard());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>MOP Ticket Dashboard</title>"));
        assert!(html.contains("Ticket Types"));
        assert!(html.contains("Number of Tickets vs. Completed Last 7 Days"));
        assert!(html.contains("</html>"));
    }

    #[test]
    fn test_nine_tiles_rendered() {
        let html = generate_html_report(&make_dashboard());

        assert_eq!(html.matches("<div class=\"tile\">").count(), 9);
        assert!(html.contains("Tickets Completed Last 7 Days"));
        assert!(html.contains("Frontend Tickets Percentage"));
        assert!(html.contains("<p>30%</p>"));
        assert!(html.contains("Story points between 5 and 8"));
        assert!(html.contains("<p>7</p>"));
    }

    #[test]
    fn test_failed_threshold_renders_note() {
        let mut dashboard = make_dashboard();
        dashboard.thresholds[2].count = None;
        dashboard.thresholds[2].error = Some("Jira returned HTTP 500: oops".to_string());

        let html = generate_html_report(&dashboard);

        assert!(html.contains("tile-error"));
        assert!(html.contains("unavailable: Jira returned HTTP 500: oops"));
        // The other tiles are unaffected.
        assert!(html.contains("<p>6</p>"));
    }

    #[test]
    fn test_zero_tickets_page_still_renders() {
        let dashboard = Dashboard {
            project: "MOP".to_string(),
            generated_at: Utc::now(),
            total_tickets: 0,
            completed_last_week: 0,
            tally: CategoryTally::default(),
            percentages: CategoryPercentages::default(),
            thresholds: vec![],
        };

        let html = generate_html_report(&dashboard);
        assert!(html.contains("<p>0%</p>"));
        assert!(html.contains("No ticket data"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a <b> & \"c\""), "a &lt;b&gt; &amp; &quot;c&quot;");
    }
}
