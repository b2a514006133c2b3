//! Physical Constants for Thermocal
//!
//! Temperature scale constants shared by both calibration models.

/// Offset between the Celsius and Kelvin scales.
///
/// `T(K) = T(°C) + 273.15`. Absolute zero is `-KELVIN_OFFSET` °C.
///
/// Source: NIST Special Publication 330 (2019)
pub const KELVIN_OFFSET: f64 = 273.15;

/// Nominal reference temperature for thermistor datasheets (°C).
///
/// Thermistors are specified by their resistance at this point (R25).
pub const REFERENCE_TEMP_C: f64 = 25.0;

/// Nominal reference temperature in Kelvin (298.15 K).
pub const REFERENCE_TEMP_K: f64 = KELVIN_OFFSET + REFERENCE_TEMP_C;
