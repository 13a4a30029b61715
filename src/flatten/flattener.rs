//! Sweep-line flattening of overlapping intervals.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::signed_bound::{ensure_comparable, signed_bounds, BoundKind, SignedBound};
use super::span::FlatSpan;
use super::steps::Steps;
use crate::bound::compare_bounds;
use crate::error::GraphError;
use crate::interval::{extract_discrete, Interval};
use crate::IntervalId;

/// Turns overlapping intervals into adjacent, non-overlapping spans.
///
/// Each output span records which input intervals are active over it, so
/// values can be aggregated later without sweeping again.
///
/// # Example
///
/// ```
/// use intvg::flatten::Flattener;
/// use intvg::interval::Interval;
///
/// let intervals = vec![Interval::valued(0, 2, 1), Interval::valued(1, 3, 1)];
/// let spans = Flattener::new().flatten(&intervals).unwrap();
/// let bounds: Vec<_> = spans.iter().map(|s| (*s.low(), *s.high())).collect();
/// assert_eq!(bounds, vec![(0, 1), (1, 2), (2, 3)]);
/// ```
#[derive(Debug, Clone)]
pub struct Flattener<B> {
    steps: Steps<B>,
}

impl<B> Default for Flattener<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> Flattener<B> {
    /// Flattener for a continuous domain.
    pub fn new() -> Self {
        Self {
            steps: Steps::none(),
        }
    }

    /// Flattener for a domain with a smallest increment.
    pub fn with_steps(steps: Steps<B>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &Steps<B> {
        &self.steps
    }
}

impl<B: PartialOrd + Clone> Flattener<B> {
    /// Flattens `intervals` into ordered spans followed by discrete points.
    ///
    /// Active sets hold indices into `intervals`.
    pub fn flatten<V>(&self, intervals: &[Interval<B, V>]) -> Result<Vec<FlatSpan<B>>, GraphError> {
        let (spans, discrete) = extract_discrete(intervals);
        let bounds = signed_bounds(&spans)?;
        let mut flat = self.sweep(&bounds)?;
        let span_count = flat.len();
        flat.extend(
            discrete
                .into_iter()
                .map(|(_, point)| FlatSpan::point(point.low.clone())),
        );
        log::debug!(
            "flattened {} intervals into {} spans and {} discrete points",
            intervals.len(),
            span_count,
            flat.len() - span_count
        );
        Ok(flat)
    }

    /// Sweeps sorted signed bounds, emitting one span per pair of distinct coordinates.
    ///
    /// Bound updates at a coordinate are applied before the span starting
    /// there is emitted. With steps configured, a span ending where another
    /// interval starts is shortened by one step, and a span starting where an
    /// interval ended is moved up by one step; spans left empty are dropped.
    pub fn sweep<V>(
        &self,
        bounds: &[SignedBound<'_, B, V>],
    ) -> Result<Vec<FlatSpan<B>>, GraphError> {
        let mut active: BTreeSet<IntervalId> = BTreeSet::new();
        let mut spans = Vec::with_capacity(bounds.len().saturating_sub(1));

        for pair in bounds.windows(2) {
            let (cur, next) = (&pair[0], &pair[1]);
            match cur.kind {
                BoundKind::Low => {
                    active.insert(cur.id);
                }
                BoundKind::High => {
                    active.remove(&cur.id);
                }
            }

            if compare_bounds(cur.at, next.at, next.id)? == Ordering::Equal {
                continue;
            }

            let low = match cur.kind {
                BoundKind::High => self.steps.increment(cur.at),
                BoundKind::Low => None,
            }
            .unwrap_or_else(|| cur.at.clone());
            let high = match next.kind {
                BoundKind::Low => self.steps.decrement(next.at),
                BoundKind::High => None,
            }
            .unwrap_or_else(|| next.at.clone());

            if compare_bounds(&high, &low, next.id)? != Ordering::Greater {
                log::trace!(
                    "dropping span between bounds of intervals {} and {}: emptied by steps",
                    cur.id,
                    next.id
                );
                continue;
            }

            spans.push(FlatSpan {
                low,
                high,
                active: active.clone(),
            });
        }

        Ok(spans)
    }

    /// Merges intervals with equal values that touch end to start.
    ///
    /// Intervals touch when the next low equals the previous high or, with an
    /// increment configured, the previous high moved one step up. Overlapping
    /// intervals are left as they are. The result is ordered by low bound.
    pub fn join<V>(&self, intervals: &[Interval<B, V>]) -> Result<Vec<Interval<B, V>>, GraphError>
    where
        V: PartialEq + Clone,
    {
        let mut sorted: Vec<(IntervalId, &Interval<B, V>)> = intervals.iter().enumerate().collect();
        ensure_comparable(sorted.iter().map(|(id, iv)| (&iv.low, *id)))?;
        sorted.sort_by(|a, b| a.1.low.partial_cmp(&b.1.low).unwrap_or(Ordering::Equal));

        let mut joined: Vec<Interval<B, V>> = Vec::with_capacity(sorted.len());
        for (id, interval) in sorted {
            if let Some(last) = joined.last_mut() {
                if last.value == interval.value && self.touches(&last.high, &interval.low, id)? {
                    last.high = interval.high.clone();
                    continue;
                }
            }
            joined.push(interval.clone());
        }
        Ok(joined)
    }

    fn touches(&self, high: &B, next_low: &B, id: IntervalId) -> Result<bool, GraphError> {
        if compare_bounds(high, next_low, id)? == Ordering::Equal {
            return Ok(true);
        }
        match self.steps.increment(high) {
            Some(stepped) => Ok(compare_bounds(&stepped, next_low, id)? == Ordering::Equal),
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn summary<B: Clone>(spans: &[FlatSpan<B>]) -> Vec<(B, B, Vec<IntervalId>)> {
        spans
            .iter()
            .map(|s| (s.low().clone(), s.high().clone(), s.active().iter().copied().collect()))
            .collect()
    }

    #[test]
    fn two_overlapping_intervals() {
        let intervals = vec![Interval::valued(0, 2, 1), Interval::valued(1, 3, 1)];
        let spans = Flattener::new().flatten(&intervals).unwrap();
        assert_eq!(
            summary(&spans),
            vec![(0, 1, vec![0]), (1, 2, vec![0, 1]), (2, 3, vec![1])]
        );
    }

    #[test]
    fn gaps_become_empty_spans() {
        let intervals = vec![Interval::valued(0, 1, 1), Interval::valued(3, 4, 1)];
        let spans = Flattener::new().flatten(&intervals).unwrap();
        assert_eq!(
            summary(&spans),
            vec![(0, 1, vec![0]), (1, 3, vec![]), (3, 4, vec![1])]
        );
    }

    #[test]
    fn shared_bounds_create_no_zero_width_span() {
        let intervals = vec![
            Interval::valued(0, 2, 1),
            Interval::valued(0, 2, 1),
            Interval::valued(2, 4, 1),
        ];
        let spans = Flattener::new().flatten(&intervals).unwrap();
        assert_eq!(summary(&spans), vec![(0, 2, vec![0, 1]), (2, 4, vec![2])]);
    }

    #[test]
    fn nested_interval() {
        let intervals = vec![Interval::valued(0, 10, 1), Interval::valued(3, 5, 1)];
        let spans = Flattener::new().flatten(&intervals).unwrap();
        assert_eq!(
            summary(&spans),
            vec![(0, 3, vec![0]), (3, 5, vec![0, 1]), (5, 10, vec![0])]
        );
    }

    #[test]
    fn discrete_points_come_last() {
        let intervals = vec![
            Interval::discrete(1),
            Interval::valued(0, 2, 1),
            Interval::valued(1, 3, 1),
        ];
        let spans = Flattener::new().flatten(&intervals).unwrap();
        assert_eq!(spans.len(), 4);
        let last = spans.last().unwrap();
        assert!(last.is_discrete());
        assert_eq!(*last.low(), 1);
        assert!(last.active().is_empty());
        assert_eq!(summary(&spans[..3])[1], (1, 2, vec![1, 2]));
    }

    #[test]
    fn empty_and_single_point_inputs() {
        let flattener = Flattener::new();
        assert!(flattener.flatten::<i64>(&Vec::<Interval<i64, i64>>::new()).unwrap().is_empty());
        let only_point = vec![Interval::<i64, i64>::discrete(5)];
        let spans = flattener.flatten(&only_point).unwrap();
        assert_eq!(spans.len(), 1);
        assert!(spans[0].is_discrete());
    }

    #[test]
    fn integer_steps_separate_touching_intervals() {
        let intervals = vec![Interval::valued(0, 1, 5), Interval::valued(2, 3, 5)];
        let spans = Flattener::with_steps(Steps::<i64>::by(1)).flatten(&intervals).unwrap();
        assert_eq!(summary(&spans), vec![(0, 1, vec![0]), (2, 3, vec![1])]);
    }

    #[test]
    fn intervals_sharing_an_endpoint_stay_adjacent_with_steps() {
        let intervals = vec![Interval::valued(0, 5, 1), Interval::valued(5, 9, 1)];
        let spans = Flattener::with_steps(Steps::<i64>::by(1)).flatten(&intervals).unwrap();
        assert_eq!(summary(&spans), vec![(0, 5, vec![0]), (5, 9, vec![1])]);
    }

    #[test]
    fn second_steps_on_days() {
        let d = |day| -> NaiveDateTime {
            NaiveDate::from_ymd_opt(1970, 1, day)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        };
        let intervals = vec![
            Interval::valueless(d(1), d(6)),
            Interval::valued(d(2), d(4), 2),
            Interval::valued(d(3), d(5), 2),
        ];
        let spans = Flattener::with_steps(Steps::one_second())
            .flatten(&intervals)
            .unwrap();
        let ts: Vec<_> = spans
            .iter()
            .map(|s| (s.low().and_utc().timestamp(), s.high().and_utc().timestamp()))
            .collect();
        assert_eq!(
            ts,
            vec![
                (0, 86399),
                (86400, 172799),
                (172800, 259200),
                (259201, 345600),
                (345601, 432000),
            ]
        );
        assert_eq!(spans[2].active().len(), 3);
        assert_eq!(spans[2].low().format("%Y-%m-%d").to_string(), "1970-01-03");
        assert_eq!(spans[2].high().format("%Y-%m-%d").to_string(), "1970-01-04");
    }

    #[test]
    fn incomparable_bounds_are_reported() {
        let intervals = vec![Interval::valued(0.0, f64::NAN, 1)];
        assert_eq!(
            Flattener::new().flatten(&intervals).unwrap_err(),
            GraphError::Comparison(0)
        );
    }

    #[test]
    fn join_merges_touching_equal_values() {
        let flattener = Flattener::with_steps(Steps::<i64>::by(1));
        let intervals = vec![
            Interval::valued(4, 5, 10),
            Interval::valued(0, 1, 5),
            Interval::valued(6, 8, 10),
            Interval::valued(2, 3, 5),
        ];
        assert_eq!(
            flattener.join(&intervals).unwrap(),
            vec![Interval::valued(0, 3, 5), Interval::valued(4, 8, 10)]
        );
    }

    #[test]
    fn join_leaves_overlaps_and_distinct_values() {
        let flattener = Flattener::with_steps(Steps::<i64>::by(1));
        let intervals = vec![
            Interval::valued(2, 3, 5),
            Interval::valued(4, 7, 10),
            Interval::valued(6, 8, 10),
            Interval::valued(0, 3, 5),
        ];
        assert_eq!(
            flattener.join(&intervals).unwrap(),
            vec![
                Interval::valued(0, 3, 5),
                Interval::valued(2, 3, 5),
                Interval::valued(4, 7, 10),
                Interval::valued(6, 8, 10),
            ]
        );
    }

    #[test]
    fn join_without_steps_needs_shared_bound() {
        let intervals = vec![
            Interval::valued(0, 1, 5),
            Interval::valued(2, 3, 5),
            Interval::valued(3, 4, 5),
        ];
        assert_eq!(
            Flattener::new().join(&intervals).unwrap(),
            vec![Interval::valued(0, 1, 5), Interval::valued(2, 4, 5)]
        );
    }
}
