//! Ticket aggregation.
//!
//! Pure functions: label classification, per-category tallying, and
//! percentage arithmetic. No I/O happens here.

mod aggregator;

pub use aggregator::{aggregate, classify, percentage, percentages};
