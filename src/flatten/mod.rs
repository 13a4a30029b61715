//! Flattening: overlapping intervals to an adjacent, non-overlapping partition.
//!
//! The [`Flattener`] sweeps the sorted [`SignedBound`]s of the input and
//! emits one [`FlatSpan`] between every pair of distinct coordinates, tagged
//! with the indices of the input intervals active there. Discrete intervals
//! skip the sweep and are appended after all spans.

mod flattener;
mod signed_bound;
mod span;
mod steps;

pub use flattener::Flattener;
pub use signed_bound::{signed_bounds, BoundKind, SignedBound};
pub use span::FlatSpan;
pub use steps::{StepFn, Steps};
