//! Pluggable conversions from bounds and values to their numeric and string forms.

use std::fmt;
use std::sync::Arc;

use crate::bound::Bound;
use crate::value::Value;

pub type NumericFn<T> = Arc<dyn Fn(&T) -> Option<f64> + Send + Sync>;
pub type StringFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// The four conversion functions used by validation and by the view stage.
///
/// Defaults come from [`Bound`] and [`Value`]; any of them can be replaced
/// with a closure, which is how custom bound or value types are supported
/// without implementing those traits.
///
/// # Example
///
/// ```
/// use intvg::convert::Conversions;
///
/// let conversions = Conversions::<i64, i64>::default()
///     .with_bound_to_string(|b| format!("day {b}"));
/// assert_eq!(conversions.bound_string(&3), "day 3");
/// assert_eq!(conversions.bound_numeric(&3), Some(3.0));
/// ```
pub struct Conversions<B, V> {
    pub bound_to_numeric: NumericFn<B>,
    pub bound_to_string: StringFn<B>,
    pub value_to_numeric: NumericFn<V>,
    pub value_to_string: StringFn<V>,
}

impl<B, V> Conversions<B, V> {
    pub fn new(
        bound_to_numeric: impl Fn(&B) -> Option<f64> + Send + Sync + 'static,
        bound_to_string: impl Fn(&B) -> String + Send + Sync + 'static,
        value_to_numeric: impl Fn(&V) -> Option<f64> + Send + Sync + 'static,
        value_to_string: impl Fn(&V) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            bound_to_numeric: Arc::new(bound_to_numeric),
            bound_to_string: Arc::new(bound_to_string),
            value_to_numeric: Arc::new(value_to_numeric),
            value_to_string: Arc::new(value_to_string),
        }
    }

    pub fn with_bound_to_numeric(
        mut self,
        f: impl Fn(&B) -> Option<f64> + Send + Sync + 'static,
    ) -> Self {
        self.bound_to_numeric = Arc::new(f);
        self
    }

    pub fn with_bound_to_string(
        mut self,
        f: impl Fn(&B) -> String + Send + Sync + 'static,
    ) -> Self {
        self.bound_to_string = Arc::new(f);
        self
    }

    pub fn with_value_to_numeric(
        mut self,
        f: impl Fn(&V) -> Option<f64> + Send + Sync + 'static,
    ) -> Self {
        self.value_to_numeric = Arc::new(f);
        self
    }

    pub fn with_value_to_string(
        mut self,
        f: impl Fn(&V) -> String + Send + Sync + 'static,
    ) -> Self {
        self.value_to_string = Arc::new(f);
        self
    }

    /// Numeric position of a bound; non-finite results count as unconvertible.
    pub fn bound_numeric(&self, bound: &B) -> Option<f64> {
        (self.bound_to_numeric)(bound).filter(|v| v.is_finite())
    }

    pub fn bound_string(&self, bound: &B) -> String {
        (self.bound_to_string)(bound)
    }

    /// Numeric weight of a value; non-finite results count as unconvertible.
    pub fn value_numeric(&self, value: &V) -> Option<f64> {
        (self.value_to_numeric)(value).filter(|v| v.is_finite())
    }

    pub fn value_string(&self, value: &V) -> String {
        (self.value_to_string)(value)
    }
}

impl<B: Bound + 'static, V: Value + 'static> Default for Conversions<B, V> {
    fn default() -> Self {
        Self::new(B::position, B::label, V::weight, V::caption)
    }
}

impl<B, V> Clone for Conversions<B, V> {
    fn clone(&self) -> Self {
        Self {
            bound_to_numeric: Arc::clone(&self.bound_to_numeric),
            bound_to_string: Arc::clone(&self.bound_to_string),
            value_to_numeric: Arc::clone(&self.value_to_numeric),
            value_to_string: Arc::clone(&self.value_to_string),
        }
    }
}

impl<B, V> fmt::Debug for Conversions<B, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conversions").finish_non_exhaustive()
    }
}
