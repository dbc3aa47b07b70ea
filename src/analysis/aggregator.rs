//! Label classification and tally computation.

use crate::models::{CategoryPercentages, CategoryTally, SearchResult, TicketCategory};

/// Classify an issue by its labels.
///
/// Precedence order: frontend, then backend, then fullstack. An issue
/// labeled both "frontend" and "backend" counts as frontend only. Every
/// issue lands in exactly one category.
pub fn classify(labels: &[String]) -> TicketCategory {
    if labels.iter().any(|l| l == "frontend") {
        TicketCategory::Frontend
    } else if labels.iter().any(|l| l == "backend") {
        TicketCategory::Backend
    } else if labels.iter().any(|l| l == "fullstack") {
        TicketCategory::Fullstack
    } else {
        TicketCategory::Other
    }
}

/// Tally every issue in a result set into the four categories.
pub fn aggregate(result: &SearchResult) -> CategoryTally {
    let mut tally = CategoryTally::default();

    for issue in &result.issues {
        tally.record(classify(&issue.fields.labels));
    }

    tally
}

/// Integer percentage, rounded down.
///
/// A zero total yields 0 rather than a division fault.
pub fn percentage(count: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    // A malformed response can report a total smaller than the returned
    // issue page; clamp rather than truncate past 100.
    (count * 100 / total).min(100) as u8
}

/// Percentages for all four categories against the full ticket count.
///
/// `total` is the project-wide count, which may exceed the tally's own sum
/// when the search endpoint pages its results.
pub fn percentages(tally: &CategoryTally, total: usize) -> CategoryPercentages {
    CategoryPercentages {
        frontend: percentage(tally.count(TicketCategory::Frontend), total),
        backend: percentage(tally.count(TicketCategory::Backend), total),
        fullstack: percentage(tally.count(TicketCategory::Fullstack), total),
        other: percentage(tally.count(TicketCategory::Other), total),
    }
}
