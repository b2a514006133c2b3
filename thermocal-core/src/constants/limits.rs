//! Input limits for calibration and evaluation

/// Every Steinhart-Hart calibration resistance must exceed this (ohms).
pub const MIN_CALIBRATION_RESISTANCE_OHMS: u64 = 5;

/// Smallest resistance a model can be evaluated at (ohms).
///
/// `ln(0)` is undefined.
pub const MIN_INPUT_RESISTANCE_OHMS: u32 = 1;
