//! Percentage view of aggregated spans, ready for rendering.

mod normalizer;
mod palette;
mod percent_span;
mod rounding;

pub use normalizer::Normalizer;
pub use palette::{ColorLookup, Palette};
pub use percent_span::{NumericSpan, PercentSpan};
pub use rounding::Rounding;
