use std::fmt;
use std::sync::Arc;

use super::span::AggregatedSpan;
use crate::flatten::FlatSpan;
use crate::interval::Interval;
use crate::value::Value;

pub type CombineFn<V> = Arc<dyn Fn(Option<V>, Option<V>) -> Option<V> + Send + Sync>;

/// Reduces the values active over each flattened span to a single value.
///
/// Kept apart from the flattener so a partition computed once can be
/// aggregated again with another combine function.
///
/// # Example
///
/// ```
/// use intvg::aggregate::Aggregator;
/// use intvg::flatten::Flattener;
/// use intvg::interval::Interval;
///
/// let intervals = vec![Interval::valued(0, 2, 3), Interval::valued(1, 3, 5)];
/// let flat = Flattener::new().flatten(&intervals).unwrap();
///
/// let sums = Aggregator::default().aggregate(&flat, &intervals);
/// assert_eq!(sums[1].value(), Some(&8));
///
/// let max = Aggregator::new(|a: Option<i32>, b: Option<i32>| a.max(b));
/// assert_eq!(max.aggregate(&flat, &intervals)[1].value(), Some(&5));
/// ```
pub struct Aggregator<V> {
    combine: CombineFn<V>,
}

impl<V> Aggregator<V> {
    pub fn new(
        combine: impl Fn(Option<V>, Option<V>) -> Option<V> + Send + Sync + 'static,
    ) -> Self {
        Self {
            combine: Arc::new(combine),
        }
    }

    pub fn combine_fn(&self) -> &CombineFn<V> {
        &self.combine
    }
}

impl<V: Clone> Aggregator<V> {
    /// Folds `values` left to right, seeded with the first one.
    ///
    /// `None` for an empty input; a single value comes back unchanged and
    /// the combine function is not called.
    pub fn reduce(&self, values: impl IntoIterator<Item = Option<V>>) -> Option<V> {
        let mut values = values.into_iter();
        let first = values.next()?;
        values.fold(first, |acc, v| (self.combine)(acc, v))
    }

    /// Aggregates every span from the values of the original intervals active over it.
    ///
    /// Values are gathered in original order, valueless intervals included
    /// as `None`. Spans with no active interval get `None`.
    pub fn aggregate<B: Clone>(
        &self,
        spans: &[FlatSpan<B>],
        originals: &[Interval<B, V>],
    ) -> Vec<AggregatedSpan<B, V>> {
        let aggregated: Vec<_> = spans
            .iter()
            .map(|span| {
                debug_assert!(
                    span.active.iter().all(|&id| id < originals.len()),
                    "active set references an interval outside the input"
                );
                let values = span
                    .active
                    .iter()
                    .filter_map(|&id| originals.get(id))
                    .map(|interval| interval.value.clone());
                AggregatedSpan {
                    low: span.low.clone(),
                    high: span.high.clone(),
                    value: self.reduce(values),
                }
            })
            .collect();
        log::debug!("aggregated values over {} spans", aggregated.len());
        aggregated
    }
}

impl<V: Value + 'static> Default for Aggregator<V> {
    fn default() -> Self {
        Self::new(V::combine)
    }
}

impl<V> Clone for Aggregator<V> {
    fn clone(&self) -> Self {
        Self {
            combine: Arc::clone(&self.combine),
        }
    }
}

impl<V> fmt::Debug for Aggregator<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aggregator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::flatten::Flattener;

    #[test]
    fn default_sum_over_overlaps() {
        let intervals = vec![Interval::valued(0, 2, 1), Interval::valued(1, 3, 1)];
        let flat = Flattener::new().flatten(&intervals).unwrap();
        let values: Vec<_> = Aggregator::default()
            .aggregate(&flat, &intervals)
            .into_iter()
            .map(|s| (s.low, s.high, s.value))
            .collect();
        assert_eq!(values, vec![(0, 1, Some(1)), (1, 2, Some(2)), (2, 3, Some(1))]);
    }

    #[test]
    fn gaps_aggregate_to_none() {
        let intervals = vec![Interval::valued(0, 1, 0.5), Interval::valued(2, 3, 0.5)];
        let flat = Flattener::new().flatten(&intervals).unwrap();
        let aggregated = Aggregator::default().aggregate(&flat, &intervals);
        assert_eq!(aggregated[1].value(), None);
        assert_eq!(aggregated[0].value(), Some(&0.5));
    }

    #[test]
    fn valueless_intervals_take_part_as_none() {
        let intervals = vec![Interval::valueless(0, 6), Interval::valued(1, 3, 2)];
        let flat = Flattener::new().flatten(&intervals).unwrap();
        let aggregated = Aggregator::<i64>::default().aggregate(&flat, &intervals);
        let values: Vec<_> = aggregated.iter().map(|s| s.value().copied()).collect();
        assert_eq!(values, vec![None, Some(2), None]);
    }

    #[test]
    fn values_are_folded_in_original_order() {
        let intervals = vec![
            Interval::valued(0, 4, "a".to_string()),
            Interval::valued(1, 4, "b".to_string()),
            Interval::valued(0, 4, "c".to_string()),
        ];
        let flat = Flattener::new().flatten(&intervals).unwrap();
        let concat = Aggregator::new(|a: Option<String>, b: Option<String>| {
            Some(format!("{}{}", a.unwrap_or_default(), b.unwrap_or_default()))
        });
        let aggregated = concat.aggregate(&flat, &intervals);
        assert_eq!(aggregated[0].value().map(String::as_str), Some("ac"));
        assert_eq!(aggregated[1].value().map(String::as_str), Some("abc"));
    }

    #[test]
    fn single_value_skips_combine() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let aggregator = Aggregator::new(move |a: Option<i64>, b: Option<i64>| {
            counter.fetch_add(1, Ordering::SeqCst);
            i64::combine(a, b)
        });
        assert_eq!(aggregator.reduce([Some(7)]), Some(7));
        assert_eq!(aggregator.reduce([None]), None);
        assert_eq!(aggregator.reduce(std::iter::empty()), None);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(aggregator.reduce([Some(1), None, Some(2)]), Some(3));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn discrete_points_aggregate_to_none() {
        let intervals = vec![Interval::valued(0, 2, 1), Interval::valued(1, 1, 9)];
        let flat = Flattener::new().flatten(&intervals).unwrap();
        let aggregated = Aggregator::default().aggregate(&flat, &intervals);
        let last = aggregated.last().unwrap();
        assert!(last.is_discrete());
        assert_eq!(last.value(), None);
    }

    #[test]
    fn reaggregation_reuses_the_partition() {
        let intervals = vec![Interval::valued(0, 2, 0.25), Interval::valued(1, 3, 0.5)];
        let flat = Flattener::new().flatten(&intervals).unwrap();
        let sum = Aggregator::default().aggregate(&flat, &intervals);
        let max = Aggregator::new(|a: Option<f64>, b: Option<f64>| match (a, b) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        })
        .aggregate(&flat, &intervals);
        assert_eq!(sum[1].value(), Some(&0.75));
        assert_eq!(max[1].value(), Some(&0.5));
    }
}
