use std::fmt;

use thiserror::Error;

use crate::IntervalId;

/// Part of an interval that failed a conversion check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    LowBound,
    HighBound,
    Value,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::LowBound => write!(f, "Lower bound"),
            Field::HighBound => write!(f, "Higher bound"),
            Field::Value => write!(f, "Value"),
        }
    }
}

/// Errors raised by the flattening, aggregation and view stages.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
    #[error("{field} of interval {index} cannot be converted to a finite numeric value")]
    Validation { index: IntervalId, field: Field },

    #[error("Bounds of interval {0} are not comparable")]
    Comparison(IntervalId),

    #[error("Value {0} did not match any range in the color palette")]
    UnmatchedColor(f64),
}
