//! Format-spec parser.
//!
//! Parses the compact option syntax dictionary sources use for numeric
//! arguments: optional flags (`0` zero-pad, `,` comma grouping, `+` always
//! sign), an optional width with no leading zero, and an optional
//! `.precision` — e.g. `"0,+8.2"`, `"03"`, `".2"`, or `""`.

use winnow::combinator::{opt, preceded, repeat};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

use crate::format::FormatError;
use crate::format::number::{NumberFormat, check_bounds};

impl NumberFormat {
    /// Parse a format-spec string into options.
    ///
    /// The whole input must be consumed; trailing characters are an error,
    /// as are widths or precisions beyond the supported bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use lexicon::format::NumberFormat;
    ///
    /// let options = NumberFormat::parse("0,+8.2").unwrap();
    /// assert_eq!(options.pad, Some('0'));
    /// assert_eq!(options.width, Some(8));
    /// assert_eq!(options.precision, Some(2));
    /// assert!(options.comma);
    /// assert!(options.always_sign);
    ///
    /// assert_eq!(NumberFormat::parse("").unwrap(), NumberFormat::default());
    /// assert!(NumberFormat::parse("8x").is_err());
    /// ```
    pub fn parse(spec: &str) -> Result<NumberFormat, FormatError> {
        let mut remaining = spec;
        let options = format_spec(&mut remaining).map_err(|e| FormatError::InvalidSpec {
            spec: spec.to_string(),
            message: format!("parse error: {e}"),
        })?;
        if !remaining.is_empty() {
            return Err(FormatError::InvalidSpec {
                spec: spec.to_string(),
                message: format!(
                    "unexpected character: '{}'",
                    remaining.chars().next().unwrap_or('?')
                ),
            });
        }
        check_bounds(&options)?;
        Ok(options)
    }
}

/// Parse a full spec: flags, then width, then `.precision`.
fn format_spec(input: &mut &str) -> ModalResult<NumberFormat> {
    let flags: Vec<char> = repeat(0.., one_of(['0', ',', '+'])).parse_next(input)?;
    let width: Option<usize> = opt(width).parse_next(input)?;
    let precision: Option<usize> = opt(preceded('.', precision)).parse_next(input)?;

    Ok(NumberFormat {
        pad: flags.contains(&'0').then_some('0'),
        width,
        precision,
        comma: flags.contains(&','),
        always_sign: flags.contains(&'+'),
    })
}

/// Parse a width: a digit 1-9 followed by digits. The leading-zero
/// restriction is what keeps a `0` flag unambiguous.
fn width(input: &mut &str) -> ModalResult<usize> {
    let first = one_of('1'..='9').parse_next(input)?;
    let rest: &str = take_while(0.., |c: char| c.is_ascii_digit()).parse_next(input)?;
    let mut digits = String::with_capacity(1 + rest.len());
    digits.push(first);
    digits.push_str(rest);
    digits
        .parse()
        .map_err(|_| ErrMode::Backtrack(ContextError::new()))
}

/// Parse a precision: one or more digits, leading zeros allowed.
fn precision(input: &mut &str) -> ModalResult<usize> {
    let digits: &str = take_while(1.., |c: char| c.is_ascii_digit()).parse_next(input)?;
    digits
        .parse()
        .map_err(|_| ErrMode::Backtrack(ContextError::new()))
}
