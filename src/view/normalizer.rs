//! Projection of aggregated spans onto a percentage axis.

use std::fmt;
use std::sync::Arc;

use super::palette::{ColorLookup, Palette};
use super::percent_span::{NumericSpan, PercentSpan};
use super::rounding::Rounding;
use crate::aggregate::AggregatedSpan;
use crate::bound::Bound;
use crate::convert::Conversions;
use crate::error::{Field, GraphError};
use crate::value::Value;

/// Builds the renderable view of aggregated spans.
///
/// The axis runs from the smallest low bound (0%) to the largest high bound
/// (100%) over all entries, discrete points included.
pub struct Normalizer<B, V> {
    conversions: Conversions<B, V>,
    rounding: Rounding,
    colors: Arc<dyn ColorLookup>,
}

impl<B, V> Normalizer<B, V> {
    pub fn new(conversions: Conversions<B, V>) -> Self {
        Self {
            conversions,
            rounding: Rounding::default(),
            colors: Arc::new(Palette::default()),
        }
    }

    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn with_colors(mut self, colors: impl ColorLookup + 'static) -> Self {
        self.colors = Arc::new(colors);
        self
    }

    pub fn with_conversions(mut self, conversions: Conversions<B, V>) -> Self {
        self.conversions = conversions;
        self
    }

    pub fn conversions(&self) -> &Conversions<B, V> {
        &self.conversions
    }

    pub fn rounding(&self) -> Rounding {
        self.rounding
    }
}

impl<B: PartialEq, V> Normalizer<B, V> {
    /// Numeric bounds shifted to start at zero, with numeric values.
    ///
    /// Errors name the index of the offending span.
    pub fn numeric_values(
        &self,
        spans: &[AggregatedSpan<B, V>],
    ) -> Result<Vec<NumericSpan>, GraphError> {
        let mut numeric = Vec::with_capacity(spans.len());
        for (index, span) in spans.iter().enumerate() {
            let low = self
                .conversions
                .bound_numeric(&span.low)
                .ok_or(GraphError::Validation {
                    index,
                    field: Field::LowBound,
                })?;
            let high = self
                .conversions
                .bound_numeric(&span.high)
                .ok_or(GraphError::Validation {
                    index,
                    field: Field::HighBound,
                })?;
            let value = match &span.value {
                Some(v) => Some(self.conversions.value_numeric(v).ok_or(GraphError::Validation {
                    index,
                    field: Field::Value,
                })?),
                None => None,
            };
            numeric.push(NumericSpan { low, high, value });
        }

        let min = numeric.iter().map(|n| n.low).fold(f64::INFINITY, f64::min);
        for n in &mut numeric {
            n.low -= min;
            n.high -= min;
        }
        Ok(numeric)
    }

    /// Converts aggregated spans to percentages, discrete points last.
    ///
    /// Span ends are measured from the right edge. When every bound sits at
    /// the same position all percentages are zero.
    pub fn create_view(
        &self,
        spans: &[AggregatedSpan<B, V>],
    ) -> Result<Vec<PercentSpan>, GraphError> {
        let numeric = self.numeric_values(spans)?;
        let extent = numeric.iter().map(|n| n.high).fold(0.0, f64::max);
        let pct = |x: f64| {
            if extent > 0.0 {
                self.rounding.apply(x / extent * 100.0)
            } else {
                0.0
            }
        };

        let mut bars = Vec::with_capacity(spans.len());
        let mut points = Vec::new();
        for (span, n) in spans.iter().zip(&numeric) {
            if span.is_discrete() {
                points.push(PercentSpan::Discrete {
                    position_pct: pct(n.low),
                    label: self.conversions.bound_string(&span.low),
                });
            } else {
                bars.push(PercentSpan::Span {
                    start_pct: pct(n.low),
                    end_pct: self.rounding.apply(100.0 - pct(n.high)),
                    color: self.colors.color_for(n.value)?,
                    start_label: self.conversions.bound_string(&span.low),
                    end_label: self.conversions.bound_string(&span.high),
                    value_label: span.value.as_ref().map(|v| self.conversions.value_string(v)),
                });
            }
        }
        log::debug!(
            "built view with {} spans and {} discrete points",
            bars.len(),
            points.len()
        );
        bars.append(&mut points);
        Ok(bars)
    }
}

impl<B: Bound + 'static, V: Value + 'static> Default for Normalizer<B, V> {
    fn default() -> Self {
        Self::new(Conversions::default())
    }
}

impl<B, V> Clone for Normalizer<B, V> {
    fn clone(&self) -> Self {
        Self {
            conversions: self.conversions.clone(),
            rounding: self.rounding,
            colors: Arc::clone(&self.colors),
        }
    }
}

impl<B, V> fmt::Debug for Normalizer<B, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer")
            .field("rounding", &self.rounding)
            .finish_non_exhaustive()
    }
}
