use std::collections::BTreeSet;

use crate::IntervalId;

/// A piece of the flattened partition with the input intervals active over it.
///
/// Discrete points are carried as spans whose bounds are equal and whose
/// active set is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatSpan<B> {
    pub(crate) low: B,
    pub(crate) high: B,
    pub(crate) active: BTreeSet<IntervalId>,
}

impl<B> FlatSpan<B> {
    pub fn new(low: B, high: B, active: BTreeSet<IntervalId>) -> Self {
        Self { low, high, active }
    }

    pub fn low(&self) -> &B {
        &self.low
    }

    pub fn high(&self) -> &B {
        &self.high
    }

    /// Indices of the input intervals covering this span, ascending.
    pub fn active(&self) -> &BTreeSet<IntervalId> {
        &self.active
    }
}

impl<B: Clone> FlatSpan<B> {
    pub(crate) fn point(at: B) -> Self {
        Self {
            low: at.clone(),
            high: at,
            active: BTreeSet::new(),
        }
    }
}

impl<B: PartialEq> FlatSpan<B> {
    pub fn is_discrete(&self) -> bool {
        self.low == self.high
    }
}
