//! Color lookup for aggregated values.

use crate::error::GraphError;

/// Maps the numeric weight of a span to a color reference.
///
/// `None` is the weight of a span with no value.
pub trait ColorLookup: Send + Sync {
    fn color_for(&self, weight: Option<f64>) -> Result<Option<String>, GraphError>;
}

impl<F> ColorLookup for F
where
    F: Fn(Option<f64>) -> Option<String> + Send + Sync,
{
    fn color_for(&self, weight: Option<f64>) -> Result<Option<String>, GraphError> {
        Ok(self(weight))
    }
}

/// Threshold table of colors.
///
/// Stops are kept sorted by threshold. A weight takes the color of:
/// * the first stop, if below its threshold;
/// * a stop repeating the previous threshold, if exactly equal to it;
/// * the first other stop whose threshold is above the weight;
/// * the last stop, if above every threshold.
///
/// Repeating a threshold therefore gives a single value its own color.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    stops: Vec<(f64, String)>,
    background: Option<String>,
}

impl Palette {
    pub fn new<S: Into<String>>(stops: impl IntoIterator<Item = (f64, S)>) -> Self {
        let mut stops: Vec<(f64, String)> = stops.into_iter().map(|(t, c)| (t, c.into())).collect();
        stops.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self {
            stops,
            background: None,
        }
    }

    /// Color of valueless spans.
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    pub fn stops(&self) -> &[(f64, String)] {
        &self.stops
    }

    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    /// Color for a present weight.
    pub fn color(&self, weight: f64) -> Result<&str, GraphError> {
        let last = self.stops.len().saturating_sub(1);
        for (i, (threshold, color)) in self.stops.iter().enumerate() {
            let matched = match i.checked_sub(1).map(|p| self.stops[p].0) {
                None => weight < *threshold,
                Some(previous) if previous == *threshold => weight == *threshold,
                Some(_) => weight < *threshold,
            };
            if matched || (i == last && weight > *threshold) {
                return Ok(color);
            }
        }
        Err(GraphError::UnmatchedColor(weight))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new([
            (0.0, "#ff5450"),
            (0.0, "#ff5450"),
            (50.0, "#ff9431"),
            (100.0, "#d7e174"),
            (100.0, "#5cb781"),
            (100.0, "#557ebf"),
        ])
    }
}

impl ColorLookup for Palette {
    fn color_for(&self, weight: Option<f64>) -> Result<Option<String>, GraphError> {
        match weight {
            Some(w) => self.color(w).map(|c| Some(c.to_string())),
            None => Ok(self.background.clone()),
        }
    }
}
