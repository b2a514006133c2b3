//! Shared numeric helpers for the models

use crate::{
    constants::limits::MIN_INPUT_RESISTANCE_OHMS,
    errors::{ThermistorError, ThermistorResult},
};

/// Truncate a computed resistance toward zero into ohms
///
/// Saturating: NaN and negative values give `0`, values past `u32::MAX`
/// give `u32::MAX`.
#[inline]
pub(crate) fn truncate_ohms(ohms: f64) -> u32 {
    ohms as u32
}

/// Real cube root that keeps the sign of its argument
///
/// `cbrt(-8) = -2`. A fractional `powf(v, 1/3)` would give NaN there.
#[inline]
pub(crate) fn signed_cbrt(value: f64) -> f64 {
    libm::cbrt(value)
}

/// Reject resistances the logarithm cannot take
pub(crate) fn check_input_resistance(ohms: u32) -> ThermistorResult<()> {
    if ohms < MIN_INPUT_RESISTANCE_OHMS {
        log_warn!("cannot evaluate temperature at {} ohms", ohms);
        return Err(ThermistorError::InvalidInput { ohms });
    }
    Ok(())
}
