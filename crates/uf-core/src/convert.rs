//! Conversion dispatch: input validation, magnitude clamping, formula
//! application.

use crate::catalog::{self, Category, ConversionEntry, TempScale};
use crate::error::{ConvertError, ConvertResult};
use crate::numeric::Real;

/// Lower bound for any temperature once re-expressed in Celsius.
pub const ABSOLUTE_ZERO_C: Real = -273.15;

/// Inputs beyond this magnitude are clamped before the formula runs.
pub const MAGNITUDE_LIMIT: Real = 1.0e6;

/// Run the named conversion on `value`.
///
/// The raw input is validated under the conversion's category, then
/// clamped to ±[`MAGNITUDE_LIMIT`], then converted. The result keeps full
/// floating-point precision; display rounding is the caller's concern.
pub fn convert(name: &str, value: Real) -> ConvertResult<Real> {
    let entry =
        catalog::find_conversion(name).ok_or_else(|| ConvertError::UnknownConversion {
            name: name.to_owned(),
        })?;
    check_input(entry, value)?;
    Ok((entry.apply)(clamp_magnitude(value)))
}

/// Category guard. Runs against the raw input, before any clamping.
fn check_input(entry: &ConversionEntry, value: Real) -> ConvertResult<()> {
    match entry.category {
        Category::Temperature => {
            // Entries without a recorded scale guard on the Celsius reading.
            let scale = entry.guard_scale.unwrap_or(TempScale::Celsius);
            if scale.to_celsius(value) < ABSOLUTE_ZERO_C {
                return Err(ConvertError::BelowAbsoluteZero);
            }
        }
        Category::Distance if value < 0.0 => return Err(ConvertError::NegativeDistance),
        Category::Weight if value < 0.0 => return Err(ConvertError::NegativeWeight),
        Category::Volume if value < 0.0 => return Err(ConvertError::NegativeVolume),
        _ => {}
    }
    Ok(())
}

/// Force an out-of-bound magnitude to the nearest bound. NaN passes
/// through unchanged.
pub fn clamp_magnitude(value: Real) -> Real {
    value.clamp(-MAGNITUDE_LIMIT, MAGNITUDE_LIMIT)
}
