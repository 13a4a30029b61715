//! Aggregation of interval values over flattened spans.

mod aggregator;
mod span;

pub use aggregator::{Aggregator, CombineFn};
pub use span::AggregatedSpan;
