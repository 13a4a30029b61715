//! intvg - Interval graphs for stacked-bar rendering
//!
//! Flattens overlapping, value-bearing intervals over any ordered domain into
//! adjacent spans, aggregates the values active over each span, and projects
//! the result onto a percentage axis.
//!
//! ```
//! use intvg::{Interval, IntervalGraph, PercentSpan};
//!
//! let graph = IntervalGraph::new(vec![
//!     Interval::valued(0_i64, 10, 0.25),
//!     Interval::valued(5, 20, 0.5),
//! ]);
//! let view = graph.view().unwrap();
//! assert!(matches!(
//!     &view[1],
//!     PercentSpan::Span { value_label: Some(label), .. } if label == "75%"
//! ));
//! ```

pub mod aggregate;
pub mod bound;
pub mod convert;
pub mod error;
pub mod flatten;
pub mod graph;
pub mod interval;
pub mod value;
pub mod view;

pub use aggregate::{AggregatedSpan, Aggregator};
pub use bound::Bound;
pub use convert::Conversions;
pub use error::{Field, GraphError};
pub use flatten::{FlatSpan, Flattener, Steps};
pub use graph::IntervalGraph;
pub use interval::{truncate, Interval};
pub use value::Value;
pub use view::{ColorLookup, Normalizer, NumericSpan, Palette, PercentSpan, Rounding};

/// Position of an interval in the input sequence.
pub type IntervalId = usize;
