//! Value formatting.
//!
//! Pure functions that turn primitive argument values into display text.
//! Numeric formatting runs a fixed pipeline (stringify, group, sign, pad)
//! driven by [`NumberFormat`] options; strings pass through; booleans map
//! to a fixed token pair.

mod error;
mod number;
mod spec;
mod value;

pub use error::FormatError;
pub use number::{MAX_PRECISION, MAX_WIDTH, NumberFormat, float, integer};
pub use value::{boolean, text};
