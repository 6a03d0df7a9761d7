//! Conversion errors.

use thiserror::Error;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors that can occur when running a conversion.
///
/// The display text is reported verbatim to users, so it is part of the
/// public contract.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Temperature input resolves below -273.15 °C.
    #[error("Temperature value below absolute zero is not valid.")]
    BelowAbsoluteZero,

    /// Negative distance input.
    #[error("Negative distance values are not valid.")]
    NegativeDistance,

    /// Negative weight input.
    #[error("Negative weight values are not valid.")]
    NegativeWeight,

    /// Negative volume input.
    #[error("Negative volume values are not valid.")]
    NegativeVolume,

    /// Name does not match any registered conversion.
    #[error("Invalid conversion type: {name}")]
    UnknownConversion { name: String },
}
