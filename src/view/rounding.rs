use crate::value::round_hundredths;

/// Precision of the percentages produced by the normalizer.
///
/// Rounding is half away from zero in both modes. `Integer` reproduces the
/// whole-percent output of older renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    #[default]
    Hundredths,
    Integer,
}

impl Rounding {
    pub fn apply(self, v: f64) -> f64 {
        match self {
            Rounding::Hundredths => round_hundredths(v),
            Rounding::Integer => v.round(),
        }
    }
}
