/// One entry of the rendered bar, in percent of the full axis.
///
/// Serialized as a bare array: six elements for a span, two for a discrete
/// point, in field order. Renderers tell them apart by length.
#[derive(Debug, Clone, PartialEq)]
pub enum PercentSpan {
    Span {
        /// Offset of the low bound from the left edge.
        start_pct: f64,
        /// Offset of the high bound from the right edge.
        end_pct: f64,
        color: Option<String>,
        start_label: String,
        end_label: String,
        value_label: Option<String>,
    },
    Discrete {
        position_pct: f64,
        label: String,
    },
}

impl PercentSpan {
    pub fn is_discrete(&self) -> bool {
        matches!(self, PercentSpan::Discrete { .. })
    }

    /// Number of elements in the serialized form.
    pub fn arity(&self) -> usize {
        match self {
            PercentSpan::Span { .. } => 6,
            PercentSpan::Discrete { .. } => 2,
        }
    }
}

/// Bounds and value of an aggregated span on the numeric axis, shifted so
/// that the smallest bound is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumericSpan {
    pub low: f64,
    pub high: f64,
    pub value: Option<f64>,
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for PercentSpan {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeTuple;
        let mut s = serializer.serialize_tuple(self.arity())?;
        match self {
            PercentSpan::Span {
                start_pct,
                end_pct,
                color,
                start_label,
                end_label,
                value_label,
            } => {
                s.serialize_element(start_pct)?;
                s.serialize_element(end_pct)?;
                s.serialize_element(color)?;
                s.serialize_element(start_label)?;
                s.serialize_element(end_label)?;
                s.serialize_element(value_label)?;
            }
            PercentSpan::Discrete {
                position_pct,
                label,
            } => {
                s.serialize_element(position_pct)?;
                s.serialize_element(label)?;
            }
        }
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PercentSpan {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Span(f64, f64, Option<String>, String, String, Option<String>),
            Discrete(f64, String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Span(start_pct, end_pct, color, start_label, end_label, value_label) => {
                PercentSpan::Span {
                    start_pct,
                    end_pct,
                    color,
                    start_label,
                    end_label,
                    value_label,
                }
            }
            Raw::Discrete(position_pct, label) => PercentSpan::Discrete {
                position_pct,
                label,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span() -> PercentSpan {
        PercentSpan::Span {
            start_pct: 33.33,
            end_pct: 33.33,
            color: Some("color_1".to_string()),
            start_label: "1".to_string(),
            end_label: "2".to_string(),
            value_label: None,
        }
    }

    #[test]
    fn arity_matches_kind() {
        let point = PercentSpan::Discrete {
            position_pct: 50.0,
            label: "1".to_string(),
        };
        assert_eq!(span().arity(), 6);
        assert_eq!(point.arity(), 2);
        assert!(point.is_discrete());
        assert!(!span().is_discrete());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_arrays_and_round_trips() {
        let view = vec![
            span(),
            PercentSpan::Discrete {
                position_pct: 50.0,
                label: "1".to_string(),
            },
        ];
        let json = serde_json::to_string(&view).unwrap();
        assert_eq!(
            json,
            r#"[[33.33,33.33,"color_1","1","2",null],[50.0,"1"]]"#
        );
        let back: Vec<PercentSpan> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, view);
    }
}
