use super::Interval;
use crate::IntervalId;

/// An interval paired with its position in the original input.
pub type Indexed<'a, B, V> = (IntervalId, &'a Interval<B, V>);

/// Splits `intervals` into spans and discrete points, keeping input order and indices.
pub fn extract_discrete<B: PartialOrd, V>(
    intervals: &[Interval<B, V>],
) -> (Vec<Indexed<'_, B, V>>, Vec<Indexed<'_, B, V>>) {
    intervals
        .iter()
        .enumerate()
        .partition(|(_, interval)| !interval.is_discrete())
}
