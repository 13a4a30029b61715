/// A flattened span carrying the aggregate of its active values.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedSpan<B, V> {
    pub(crate) low: B,
    pub(crate) high: B,
    pub(crate) value: Option<V>,
}

impl<B, V> AggregatedSpan<B, V> {
    pub fn new(low: B, high: B, value: Option<V>) -> Self {
        Self { low, high, value }
    }

    pub fn low(&self) -> &B {
        &self.low
    }

    pub fn high(&self) -> &B {
        &self.high
    }

    /// Aggregated value, `None` over gaps and discrete points.
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }
}

impl<B: PartialEq, V> AggregatedSpan<B, V> {
    pub fn is_discrete(&self) -> bool {
        self.low == self.high
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<B: serde::Serialize, V: serde::Serialize> serde::Serialize for AggregatedSpan<B, V> {
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
impl<'de, B, V> serde::Deserialize<'de> for AggregatedSpan<B, V>
where
    B: serde::Deserialize<'de>,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (low, high, value) = <(B, B, Option<V>)>::deserialize(deserializer)?;
        Ok(Self { low, high, value })
    }
}
