//! Inline SVG chart rendering.
//!
//! The bar and pie charts are emitted as plain SVG markup so the report
//! page needs no external assets or scripting.

use crate::models::{CategoryPercentages, TicketCategory};
use std::f64::consts::PI;

// Palette carried over from the original dashboard.
const BAR_COLORS: [&str; 4] = ["#FF6F61", "#FFCC5C", "#8B8B8B", "#5D9CEC"];
const PIE_COLORS: [&str; 2] = ["#5D9CEC", "#FF6F61"];

/// Bar chart of the four category percentages.
///
/// Bar order matches the original dashboard: Frontend, Fullstack,
/// Backend, Other.
pub fn render_bar_chart(percentages: &CategoryPercentages) -> String {
    let bars = [
        (TicketCategory::Frontend, percentages.frontend),
        (TicketCategory::Fullstack, percentages.fullstack),
        (TicketCategory::Backend, percentages.backend),
        (TicketCategory::Other, percentages.other),
    ];

    let width = 460.0;
    let height = 300.0;
    let left = 50.0;
    let bottom = height - 40.0;
    let plot_height = bottom - 20.0;
    let slot = (width - left - 10.0) / bars.len() as f64;
    let bar_width = slot * 0.6;

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg class="chart" viewBox="0 0 {width} {height}" role="img" aria-label="Ticket types by percentage">"#
    ));

    // Horizontal gridlines every 20%.
    for step in 0..=5 {
        let pct = step * 20;
        let y = bottom - plot_height * (pct as f64 / 100.0);
        svg.push_str(&format!(
            r##"<line x1="{left}" y1="{y:.1}" x2="{x2}" y2="{y:.1}" stroke="#DDDDDD" stroke-width="1"/>"##,
            x2 = width - 10.0
        ));
        svg.push_str(&format!(
            r##"<text x="{x}" y="{ty:.1}" text-anchor="end" font-size="11" fill="#666666">{pct}</text>"##,
            x = left - 6.0,
            ty = y + 4.0
        ));
    }

    for (i, (category, pct)) in bars.iter().enumerate() {
        let bar_height = plot_height * (*pct as f64 / 100.0);
        let x = left + slot * i as f64 + (slot - bar_width) / 2.0;
        let y = bottom - bar_height;
        let color = BAR_COLORS[i];

        svg.push_str(&format!(
            r#"<rect x="{x:.1}" y="{y:.1}" width="{bar_width:.1}" height="{bar_height:.1}" fill="{color}"/>"#
        ));
        svg.push_str(&format!(
            r##"<text x="{cx:.1}" y="{vy:.1}" text-anchor="middle" font-size="12" fill="#333333">{pct}%</text>"##,
            cx = x + bar_width / 2.0,
            vy = y - 5.0
        ));
        svg.push_str(&format!(
            r##"<text x="{cx:.1}" y="{ly:.1}" text-anchor="middle" font-size="12" fill="#333333">{category}</text>"##,
            cx = x + bar_width / 2.0,
            ly = bottom + 18.0
        ));
    }

    // Baseline.
    svg.push_str(&format!(
        r##"<line x1="{left}" y1="{bottom}" x2="{x2}" y2="{bottom}" stroke="#333333" stroke-width="1"/>"##,
        x2 = width - 10.0
    ));

    svg.push_str("</svg>");
    svg
}

/// Pie chart of total tickets vs. tickets completed in the last 7 days.
///
/// The completed slice is pulled out from the pie, like the original
/// chart's exploded slice.
pub fn render_pie_chart(total_tickets: usize, completed_last_week: usize) -> String {
    let sum = total_tickets + completed_last_week;
    if sum == 0 {
        return r#"<p class="chart-empty">No ticket data to chart.</p>"#.to_string();
    }

    let width = 360.0;
    let height = 300.0;
    let cx = width / 2.0;
    let cy = 140.0;
    let radius = 100.0;
    let explode = 12.0;

    let slices = [
        ("Tickets", total_tickets, PIE_COLORS[0], 0.0),
        ("Completed Last 7 Days", completed_last_week, PIE_COLORS[1], explode),
    ];

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg class="chart" viewBox="0 0 {width} {height}" role="img" aria-label="Tickets vs completed last 7 days">"#
    ));

    // Start at the top of the circle, matching the original chart.
    let mut angle = PI / 2.0;
    for (label, value, color, offset) in slices {
        if value == 0 {
            continue;
        }
        let fraction = value as f64 / sum as f64;
        let sweep = fraction * 2.0 * PI;
        svg.push_str(&pie_slice(cx, cy, radius, angle, sweep, offset, color, label));
        angle += sweep;
    }

    // Legend with percentage labels.
    let mut ly = height - 44.0;
    for (label, value, color, _) in slices {
        let pct = value as f64 / sum as f64 * 100.0;
        svg.push_str(&format!(
            r#"<rect x="20" y="{ry:.1}" width="12" height="12" fill="{color}"/>"#,
            ry = ly - 10.0
        ));
        svg.push_str(&format!(
            r##"<text x="38" y="{ly:.1}" font-size="12" fill="#333333">{label}: {value} ({pct:.1}%)</text>"##
        ));
        ly += 20.0;
    }

    svg.push_str("</svg>");
    svg
}

/// A single pie slice as an SVG path, offset along its bisector.
#[allow(clippy::too_many_arguments)]
fn pie_slice(
    cx: f64,
    cy: f64,
    radius: f64,
    start: f64,
    sweep: f64,
    offset: f64,
    color: &str,
    label: &str,
) -> String {
    let mid = start + sweep / 2.0;
    let (dx, dy) = (offset * mid.cos(), -offset * mid.sin());
    let cx = cx + dx;
    let cy = cy + dy;

    // A sweep covering the whole circle collapses to a degenerate arc, so
    // draw a full circle instead.
    if sweep >= 2.0 * PI - 1e-9 {
        return format!(
            r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="{radius}" fill="{color}"><title>{label}</title></circle>"#
        );
    }

    let (x0, y0) = point_on_circle(cx, cy, radius, start);
    let (x1, y1) = point_on_circle(cx, cy, radius, start + sweep);
    let large_arc = if sweep > PI { 1 } else { 0 };

    format!(
        r##"<path d="M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {radius} {radius} 0 {large_arc} 0 {x1:.2} {y1:.2} Z" fill="{color}" stroke="#FFFFFF" stroke-width="1"><title>{label}</title></path>"##
    )
}

/// Point on a circle, with SVG's inverted y axis.
fn point_on_circle(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy - radius * angle.sin())
}
