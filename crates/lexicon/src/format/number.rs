//! Numeric formatting pipeline.
//!
//! Both entry points run the same fixed stages: stringify, group, sign,
//! pad. Options never reorder the stages, they only switch each one on.

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::format::FormatError;

/// Maximum accepted pad width.
pub const MAX_WIDTH: usize = 256;

/// Maximum accepted fractional precision.
pub const MAX_PRECISION: usize = 100;

/// Options controlling numeric formatting.
///
/// Serializes with the field names dictionary files use (`padCharacter`,
/// `width`, `precision`, `comma`, `alwaysSign`); absent fields deserialize
/// to their defaults.
///
/// # Example
///
/// ```
/// use lexicon::format::{self, NumberFormat};
///
/// let options = NumberFormat::builder().width(8).pad('0').comma(true).build();
/// assert_eq!(format::integer(1234, &options).unwrap(), "0001,234");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NumberFormat {
    /// Fill character for left padding; space when unset.
    #[serde(rename = "padCharacter")]
    pub pad: Option<char>,

    /// Minimum printed width. Shorter output is left-padded, longer output
    /// is never truncated.
    pub width: Option<usize>,

    /// Exact count of fractional digits. Unset prints the shortest natural
    /// form. Does not apply to [`integer`].
    pub precision: Option<usize>,

    /// Group the integer part with `,` every three digits.
    #[builder(default)]
    pub comma: bool,

    /// Prefix strictly positive values with `+`.
    #[builder(default)]
    pub always_sign: bool,
}

/// Format a floating-point value.
///
/// # Example
///
/// ```
/// use lexicon::format::{self, NumberFormat};
///
/// let options = NumberFormat::builder().precision(2).comma(true).build();
/// assert_eq!(format::float(1234.5, &options).unwrap(), "1,234.50");
/// ```
pub fn float(value: f64, options: &NumberFormat) -> Result<String, FormatError> {
    check_bounds(options)?;
    if !value.is_finite() {
        return Err(FormatError::NonFinite { value });
    }
    // Negative zero prints as plain zero.
    let value = if value == 0.0 { 0.0 } else { value };
    let digits = match options.precision {
        Some(precision) => format!("{value:.precision$}"),
        None => value.to_string(),
    };
    Ok(finish(digits, value > 0.0, options))
}

/// Format an integer.
///
/// Integers carry no fractional digits, so `precision` does not apply and
/// the value is never rounded.
///
/// # Example
///
/// ```
/// use lexicon::format::{self, NumberFormat};
///
/// let options = NumberFormat::builder().always_sign(true).build();
/// assert_eq!(format::integer(5, &options).unwrap(), "+5");
/// assert_eq!(format::integer(-5, &options).unwrap(), "-5");
/// assert_eq!(format::integer(0, &options).unwrap(), "0");
/// ```
pub fn integer(value: i64, options: &NumberFormat) -> Result<String, FormatError> {
    check_bounds(options)?;
    Ok(finish(value.to_string(), value > 0, options))
}

/// Validate option bounds. Also used by the format-spec parser.
pub(super) fn check_bounds(options: &NumberFormat) -> Result<(), FormatError> {
    if let Some(width) = options.width {
        if width > MAX_WIDTH {
            return Err(FormatError::WidthOutOfRange {
                width,
                max: MAX_WIDTH,
            });
        }
    }
    if let Some(precision) = options.precision {
        if precision > MAX_PRECISION {
            return Err(FormatError::PrecisionOutOfRange {
                precision,
                max: MAX_PRECISION,
            });
        }
    }
    Ok(())
}

/// Shared tail of the pipeline: group, sign, pad.
fn finish(digits: String, positive: bool, options: &NumberFormat) -> String {
    let mut result = if options.comma {
        group_thousands(&digits)
    } else {
        digits
    };
    if positive && options.always_sign {
        result.insert(0, '+');
    }
    pad_left(result, options)
}

/// Insert `,` separators every three digits of the integer part.
fn group_thousands(digits: &str) -> String {
    let (sign, unsigned) = match digits.strip_prefix('-') {
        Some(unsigned) => ("-", unsigned),
        None => ("", digits),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(digits.len() + 4);
    out.push_str(sign);
    let mut pending = integer.len();
    for c in integer.chars() {
        out.push(c);
        pending -= 1;
        if pending > 0 && pending % 3 == 0 {
            out.push(',');
        }
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Left-pad to the requested width. Applies to the final string, sign and
/// separators included, and never truncates.
fn pad_left(digits: String, options: &NumberFormat) -> String {
    let Some(width) = options.width else {
        return digits;
    };
    let length = digits.chars().count();
    if length >= width {
        return digits;
    }
    let fill = options.pad.unwrap_or(' ');
    let mut out = String::with_capacity(width + digits.len());
    for _ in length..width {
        out.push(fill);
    }
    out.push_str(&digits);
    out
}
