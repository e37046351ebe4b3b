use thiserror::Error;

/// An error from numeric formatting or format-spec parsing.
#[derive(Debug, Error)]
pub enum FormatError {
    /// A format-spec string failed to parse.
    #[error("invalid number format '{spec}': {message}")]
    InvalidSpec { spec: String, message: String },

    /// Requested pad width beyond the supported bound.
    #[error("pad width {width} exceeds the maximum of {max}")]
    WidthOutOfRange { width: usize, max: usize },

    /// Requested precision beyond the supported bound.
    #[error("precision {precision} exceeds the maximum of {max}")]
    PrecisionOutOfRange { precision: usize, max: usize },

    /// NaN or infinite input.
    #[error("cannot format non-finite value {value}")]
    NonFinite { value: f64 },
}
