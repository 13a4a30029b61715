use super::Interval;
use crate::bound::compare_bounds;
use crate::convert::Conversions;
use crate::error::{Field, GraphError};

/// Checks that every interval can be projected by `conversions`.
///
/// Each bound must convert to a finite number, each present value too, and
/// the two bounds of an interval must be comparable. String projections are
/// infallible and need no check. The first failure is returned.
///
/// Not run on construction: graphs holding malformed intervals can be built
/// freely and only fail here or when a view is requested.
pub fn validate<B: PartialOrd, V>(
    intervals: &[Interval<B, V>],
    conversions: &Conversions<B, V>,
) -> Result<(), GraphError> {
    for (index, interval) in intervals.iter().enumerate() {
        if conversions.bound_numeric(&interval.low).is_none() {
            return Err(GraphError::Validation {
                index,
                field: Field::LowBound,
            });
        }
        if conversions.bound_numeric(&interval.high).is_none() {
            return Err(GraphError::Validation {
                index,
                field: Field::HighBound,
            });
        }
        if let Some(value) = &interval.value {
            if conversions.value_numeric(value).is_none() {
                return Err(GraphError::Validation {
                    index,
                    field: Field::Value,
                });
            }
        }
        compare_bounds(&interval.low, &interval.high, index)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_intervals() {
        let intervals = vec![Interval::valued(0, 2, 0.5), Interval::valueless(1, 3)];
        assert_eq!(validate(&intervals, &Conversions::default()), Ok(()));
    }

    #[test]
    fn rejects_unconvertible_bound() {
        let intervals = vec![
            Interval::valued(0.0, 2.0, 1_i64),
            Interval::valued(1.0, f64::INFINITY, 1),
        ];
        assert_eq!(
            validate(&intervals, &Conversions::default()),
            Err(GraphError::Validation {
                index: 1,
                field: Field::HighBound
            })
        );
    }

    #[test]
    fn rejects_unconvertible_value() {
        let intervals = vec![Interval::valued(0, 1, f64::NAN)];
        assert_eq!(
            validate(&intervals, &Conversions::default()),
            Err(GraphError::Validation {
                index: 0,
                field: Field::Value
            })
        );
    }

    #[test]
    fn custom_conversion_drives_validation() {
        let intervals = vec![Interval::valued(0_i64, 1, 1_i64), Interval::valued(-4, 1, 1)];
        let conversions = Conversions::<i64, i64>::default()
            .with_bound_to_numeric(|b| (*b >= 0).then_some(*b as f64));
        assert_eq!(
            validate(&intervals, &conversions),
            Err(GraphError::Validation {
                index: 1,
                field: Field::LowBound
            })
        );
    }

    #[test]
    fn incomparable_bounds_with_permissive_conversion() {
        let intervals = vec![Interval::valueless(f64::NAN, 1.0)];
        let conversions = Conversions::<f64, f64>::default().with_bound_to_numeric(|_| Some(0.0));
        assert_eq!(
            validate(&intervals, &conversions),
            Err(GraphError::Comparison(0))
        );
    }
}
