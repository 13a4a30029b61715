//! Value-bearing interval over an ordered domain.

use std::fmt::{self, Display};

/// Closed range `[low, high]` carrying an optional value.
///
/// Bounds given in the wrong order are swapped on construction. An interval
/// whose bounds are equal is *discrete*: it marks a single labeled point and
/// is never merged with spans.
#[derive(Debug, Clone, PartialEq)]
pub struct Interval<B, V> {
    pub(crate) low: B,
    pub(crate) high: B,
    pub(crate) value: Option<V>,
}

impl<B: PartialOrd, V> Interval<B, V> {
    /// Creates `[low, high]`, swapping the bounds if `low > high`.
    pub fn new(low: B, high: B, value: Option<V>) -> Self {
        if low > high {
            Self {
                low: high,
                high: low,
                value,
            }
        } else {
            Self { low, high, value }
        }
    }

    /// Creates `[low, high]` carrying `value`.
    pub fn valued(low: B, high: B, value: V) -> Self {
        Self::new(low, high, Some(value))
    }

    /// Creates a valueless interval.
    pub fn valueless(low: B, high: B) -> Self {
        Self::new(low, high, None)
    }

    /// Returns true if both bounds are equal.
    pub fn is_discrete(&self) -> bool {
        self.low == self.high
    }
}

impl<B: Clone, V> Interval<B, V> {
    /// Creates the discrete interval `[point, point]`.
    pub fn discrete(point: B) -> Self {
        Self {
            low: point.clone(),
            high: point,
            value: None,
        }
    }
}

impl<B, V> Interval<B, V> {
    pub fn low(&self) -> &B {
        &self.low
    }

    pub fn high(&self) -> &B {
        &self.high
    }

    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    pub fn into_parts(self) -> (B, B, Option<V>) {
        (self.low, self.high, self.value)
    }
}

impl<B: Display, V: Display> Display for Interval<B, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)?;
        if let Some(v) = &self.value {
            write!(f, " = {}", v)?;
        }
        Ok(())
    }
}

impl<B: PartialOrd, V> From<(B, B)> for Interval<B, V> {
    fn from((low, high): (B, B)) -> Self {
        Self::valueless(low, high)
    }
}

impl<B: PartialOrd, V> From<(B, B, V)> for Interval<B, V> {
    fn from((low, high, value): (B, B, V)) -> Self {
        Self::valued(low, high, value)
    }
}

// =============================================================================
// Interval Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<B: serde::Serialize, V: serde::Serialize> serde::Serialize for Interval<B, V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeTuple;
        let mut s = serializer.serialize_tuple(3)?;
        s.serialize_element(&self.low)?;
        s.serialize_element(&self.high)?;
        s.serialize_element(&self.value)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, B, V> serde::Deserialize<'de> for Interval<B, V>
where
    B: serde::Deserialize<'de> + PartialOrd,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (low, high, value) = <(B, B, Option<V>)>::deserialize(deserializer)?;
        Ok(Self::new(low, high, value))
    }
}
