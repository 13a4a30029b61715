use std::cmp::Ordering;

use crate::bound::compare_bounds;
use crate::error::GraphError;
use crate::interval::Indexed;
use crate::IntervalId;

/// Which end of an interval a signed bound comes from.
///
/// The declaration order is the tie-break at equal coordinates: intervals
/// ending at a point are closed before intervals starting there are opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BoundKind {
    /// `-`: the interval stops being active.
    High,
    /// `+`: the interval becomes active.
    Low,
}

/// One endpoint of an input interval, tagged with its origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignedBound<'a, B, V> {
    pub(crate) at: &'a B,
    pub(crate) kind: BoundKind,
    pub(crate) id: IntervalId,
    pub(crate) value: Option<&'a V>,
}

impl<'a, B, V> SignedBound<'a, B, V> {
    pub fn at(&self) -> &'a B {
        self.at
    }

    pub fn kind(&self) -> BoundKind {
        self.kind
    }

    pub fn id(&self) -> IntervalId {
        self.id
    }

    /// Value of the interval this bound belongs to.
    pub fn value(&self) -> Option<&'a V> {
        self.value
    }
}

/// Emits both bounds of every interval, sorted by coordinate.
///
/// The sort is stable, so bounds of the same kind at the same coordinate
/// keep the input order.
pub fn signed_bounds<'a, B: PartialOrd, V>(
    intervals: &[Indexed<'a, B, V>],
) -> Result<Vec<SignedBound<'a, B, V>>, GraphError> {
    let mut bounds = Vec::with_capacity(intervals.len() * 2);
    for &(id, interval) in intervals {
        bounds.push(SignedBound {
            at: interval.low(),
            kind: BoundKind::Low,
            id,
            value: interval.value(),
        });
        bounds.push(SignedBound {
            at: interval.high(),
            kind: BoundKind::High,
            id,
            value: interval.value(),
        });
    }
    ensure_comparable(bounds.iter().map(|b| (b.at, b.id)))?;
    bounds.sort_by(|a, b| {
        a.at
            .partial_cmp(b.at)
            .unwrap_or(Ordering::Equal)
            .then(a.kind.cmp(&b.kind))
    });
    Ok(bounds)
}

/// Fails if any bound is incomparable with the first one.
///
/// Run before sorting so the comparator passed to `sort_by` is total.
pub(crate) fn ensure_comparable<'a, B: PartialOrd + 'a>(
    bounds: impl IntoIterator<Item = (&'a B, IntervalId)>,
) -> Result<(), GraphError> {
    let mut bounds = bounds.into_iter();
    let Some((first, first_id)) = bounds.next() else {
        return Ok(());
    };
    compare_bounds(first, first, first_id)?;
    for (bound, id) in bounds {
        compare_bounds(bound, first, id)?;
    }
    Ok(())
}
