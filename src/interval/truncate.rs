//! Clipping of interval sets to a window.

use std::cmp::Ordering;

use super::Interval;
use crate::bound::compare_bounds;
use crate::error::GraphError;
use crate::IntervalId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Lower,
    Upper,
}

impl Side {
    /// Returns true if `value` lies beyond `limit` on this side.
    fn beyond<B: PartialOrd>(
        self,
        value: &B,
        limit: &B,
        id: IntervalId,
    ) -> Result<bool, GraphError> {
        let ord = compare_bounds(value, limit, id)?;
        Ok(match self {
            Side::Lower => ord == Ordering::Less,
            Side::Upper => ord == Ordering::Greater,
        })
    }
}

/// Truncates every interval to `[lower, upper]`.
///
/// Intervals lying entirely beyond a limit are dropped, intervals crossing it
/// are clipped to it. With `padding`, a valueless interval is added between
/// each limit and the nearest remaining bound when they differ, so the
/// result always spans the requested window. The lower limit is applied
/// first, its padding interval goes to the front; the upper padding interval
/// is appended.
///
/// # Example
///
/// ```
/// use intvg::interval::{truncate, Interval};
///
/// let intervals = vec![Interval::valued(0, 3, 1), Interval::valued(2, 5, 1)];
/// let truncated = truncate(&intervals, Some(&1), Some(&4), false).unwrap();
/// assert_eq!(truncated, vec![Interval::valued(1, 3, 1), Interval::valued(2, 4, 1)]);
/// ```
pub fn truncate<B, V>(
    intervals: &[Interval<B, V>],
    lower: Option<&B>,
    upper: Option<&B>,
    padding: bool,
) -> Result<Vec<Interval<B, V>>, GraphError>
where
    B: PartialOrd + Clone,
    V: Clone,
{
    let mut entries: Vec<Entry<B, V>> = intervals.iter().cloned().enumerate().collect();
    for (side, limit) in [(Side::Lower, lower), (Side::Upper, upper)] {
        let Some(limit) = limit else {
            continue;
        };
        entries = clip(entries, side, limit)?;
        if padding {
            pad(&mut entries, side, limit)?;
        }
    }
    Ok(entries.into_iter().map(|(_, interval)| interval).collect())
}

/// An interval tagged with its index in the caller's input.
type Entry<B, V> = (IntervalId, Interval<B, V>);

fn clip<B, V>(
    entries: Vec<Entry<B, V>>,
    side: Side,
    limit: &B,
) -> Result<Vec<Entry<B, V>>, GraphError>
where
    B: PartialOrd + Clone,
{
    let mut kept = Vec::with_capacity(entries.len());
    for (id, mut interval) in entries {
        let (outer, inner) = match side {
            Side::Lower => (&interval.low, &interval.high),
            Side::Upper => (&interval.high, &interval.low),
        };
        if side.beyond(outer, limit, id)? {
            if side.beyond(inner, limit, id)? {
                continue;
            }
            match side {
                Side::Lower => interval.low = limit.clone(),
                Side::Upper => interval.high = limit.clone(),
            }
        }
        kept.push((id, interval));
    }
    Ok(kept)
}

/// Adds a valueless interval between `limit` and the outermost bound on
/// `side`. The padding carries the id of the interval it extends.
fn pad<B, V>(entries: &mut Vec<Entry<B, V>>, side: Side, limit: &B) -> Result<(), GraphError>
where
    B: PartialOrd + Clone,
{
    let outermost = match side {
        Side::Lower => outer_bound(entries.iter().map(|(id, iv)| (*id, &iv.low)), Ordering::Less)?,
        Side::Upper => {
            outer_bound(entries.iter().map(|(id, iv)| (*id, &iv.high)), Ordering::Greater)?
        }
    };
    let Some((id, bound)) = outermost else {
        return Ok(());
    };
    if !side.beyond(limit, bound, id)? {
        return Ok(());
    }
    let bound = bound.clone();
    match side {
        Side::Lower => entries.insert(
            0,
            (
                id,
                Interval {
                    low: limit.clone(),
                    high: bound,
                    value: None,
                },
            ),
        ),
        Side::Upper => entries.push((
            id,
            Interval {
                low: bound,
                high: limit.clone(),
                value: None,
            },
        )),
    }
    Ok(())
}

/// Smallest low bound, `None` for an empty set.
pub fn min_bound<B: PartialOrd, V>(intervals: &[Interval<B, V>]) -> Result<Option<&B>, GraphError> {
    let lows = intervals.iter().enumerate().map(|(id, iv)| (id, &iv.low));
    Ok(outer_bound(lows, Ordering::Less)?.map(|(_, bound)| bound))
}

/// Largest high bound, `None` for an empty set.
pub fn max_bound<B: PartialOrd, V>(intervals: &[Interval<B, V>]) -> Result<Option<&B>, GraphError> {
    let highs = intervals.iter().enumerate().map(|(id, iv)| (id, &iv.high));
    Ok(outer_bound(highs, Ordering::Greater)?.map(|(_, bound)| bound))
}

fn outer_bound<'a, B: PartialOrd + 'a>(
    bounds: impl IntoIterator<Item = (IntervalId, &'a B)>,
    wanted: Ordering,
) -> Result<Option<(IntervalId, &'a B)>, GraphError> {
    let mut best: Option<(IntervalId, &'a B)> = None;
    for (id, candidate) in bounds {
        best = match best {
            Some((_, current)) if compare_bounds(candidate, current, id)? != wanted => best,
            _ => Some((id, candidate)),
        };
    }
    Ok(best)
}
