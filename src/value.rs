//! Values carried by intervals.

/// Rounds half away from zero to two decimal places.
pub fn round_hundredths(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// A value carried by an interval, with default projections and aggregation.
pub trait Value: Clone {
    /// Numeric weight handed to the color lookup.
    fn weight(&self) -> Option<f64>;

    /// Caption shown for a span carrying this value.
    fn caption(&self) -> String;

    /// Combines two (possibly missing) values into one.
    ///
    /// Called left to right over the values active on a span, so it must
    /// accept a missing left operand.
    fn combine(a: Option<Self>, b: Option<Self>) -> Option<Self>;
}

/// Fractions in `[0, 1]`, displayed as percentages.
///
/// The weight is `v * 100` rounded half away from zero, not truncated, so
/// `0.125` weighs 13 and picks up the color of a threshold at 13.
impl Value for f64 {
    fn weight(&self) -> Option<f64> {
        let w = (self * 100.0).round();
        w.is_finite().then_some(w)
    }

    fn caption(&self) -> String {
        format!("{}%", round_hundredths(self * 100.0))
    }

    fn combine(a: Option<Self>, b: Option<Self>) -> Option<Self> {
        if a.is_none() && b.is_none() {
            return None;
        }
        Some(round_hundredths(a.unwrap_or(0.0) + b.unwrap_or(0.0)))
    }
}

macro_rules! integer_value {
    ($($t:ty),*) => {
        $(
            impl Value for $t {
                fn weight(&self) -> Option<f64> {
                    Some(*self as f64)
                }

                fn caption(&self) -> String {
                    self.to_string()
                }

                fn combine(a: Option<Self>, b: Option<Self>) -> Option<Self> {
                    match (a, b) {
                        (None, None) => None,
                        (a, b) => Some(a.unwrap_or(0).saturating_add(b.unwrap_or(0))),
                    }
                }
            }
        )*
    };
}

integer_value!(i32, i64, u32, u64);
