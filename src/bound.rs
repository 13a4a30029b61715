//! Ordered domains usable as interval bounds.
//!
//! Any `PartialOrd + Clone` type can bound an interval. The [`Bound`] trait
//! adds the two default projections the view stage needs: a numeric position
//! on the axis and a human readable label. Both can be overridden per graph
//! through [`Conversions`](crate::convert::Conversions), so implementing this
//! trait is only required to get the defaults.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use qtty::{Quantity, Unit};

use crate::error::GraphError;
use crate::IntervalId;

/// Label format shared by the calendar bounds.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// An ordered value with default numeric and string projections.
pub trait Bound: PartialOrd + Clone {
    /// Position on the numeric axis, `None` when the value has no finite position.
    fn position(&self) -> Option<f64>;

    /// Label shown next to the bound.
    fn label(&self) -> String;
}

/// Compares two bounds, reporting `id` as the culprit if they are not comparable.
pub fn compare_bounds<B: PartialOrd>(a: &B, b: &B, id: IntervalId) -> Result<Ordering, GraphError> {
    a.partial_cmp(b).ok_or(GraphError::Comparison(id))
}

macro_rules! integer_bound {
    ($($t:ty),*) => {
        $(
            impl Bound for $t {
                fn position(&self) -> Option<f64> {
                    Some(*self as f64)
                }

                fn label(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

integer_bound!(i32, i64, u32, u64, usize);

impl Bound for f64 {
    fn position(&self) -> Option<f64> {
        self.is_finite().then_some(*self)
    }

    fn label(&self) -> String {
        self.to_string()
    }
}

impl Bound for NaiveDate {
    /// Seconds since the UNIX epoch at midnight UTC.
    fn position(&self) -> Option<f64> {
        self.and_hms_opt(0, 0, 0)
            .map(|midnight| midnight.and_utc().timestamp() as f64)
    }

    fn label(&self) -> String {
        self.format(DATE_FORMAT).to_string()
    }
}

impl Bound for NaiveDateTime {
    fn position(&self) -> Option<f64> {
        Some(self.and_utc().timestamp() as f64)
    }

    fn label(&self) -> String {
        self.format(DATE_FORMAT).to_string()
    }
}

impl Bound for DateTime<Utc> {
    fn position(&self) -> Option<f64> {
        Some(self.timestamp() as f64)
    }

    fn label(&self) -> String {
        self.format(DATE_FORMAT).to_string()
    }
}

impl<U: Unit> Bound for Quantity<U> {
    fn position(&self) -> Option<f64> {
        let v = self.value();
        v.is_finite().then_some(v)
    }

    fn label(&self) -> String {
        format!("{:.3}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qtty::Second;

    #[test]
    fn compare_reports_incomparable_bounds() {
        assert_eq!(compare_bounds(&1.0, &2.0, 0), Ok(Ordering::Less));
        assert_eq!(compare_bounds(&f64::NAN, &2.0, 4), Err(GraphError::Comparison(4)));
    }

    #[test]
    fn integer_bounds() {
        assert_eq!(Bound::position(&42_i64), Some(42.0));
        assert_eq!(Bound::label(&-3_i32), "-3");
        assert_eq!(Bound::position(&7_usize), Some(7.0));
    }

    #[test]
    fn float_bound_rejects_nan() {
        assert_eq!(Bound::position(&1.5_f64), Some(1.5));
        assert_eq!(Bound::position(&f64::NAN), None);
        assert_eq!(Bound::position(&f64::INFINITY), None);
    }

    #[test]
    fn naive_date_is_midnight_timestamp() {
        let d = NaiveDate::from_ymd_opt(1970, 1, 2).unwrap();
        assert_eq!(d.position(), Some(86400.0));
        assert_eq!(d.label(), "1970-01-02");
    }

    #[test]
    fn naive_date_time_label_drops_time() {
        let dt = NaiveDate::from_ymd_opt(2019, 1, 3)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(dt.label(), "2019-01-03");
        assert_eq!(dt.and_utc().position(), dt.position());
    }

    #[test]
    fn quantity_bound() {
        let q = Quantity::<Second>::new(12.5);
        assert_eq!(q.position(), Some(12.5));
        assert_eq!(q.label(), "12.500");
    }
}
