//! Input intervals and the preprocessing applied before flattening.

mod discrete;
mod interval;
mod truncate;
mod validate;

pub use discrete::{extract_discrete, Indexed};
pub use interval::Interval;
pub use truncate::{max_bound, min_bound, truncate};
pub use validate::validate;
