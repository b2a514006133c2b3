//! Calibration Points and Temperature Scale Conversion
//!
//! A calibration point is one bench measurement: the thermistor held at a
//! known temperature and its resistance read back. Points are transient
//! inputs; models keep only the coefficients derived from them.
//!
//! Resistances are taken as `u64` so that high-value thermistors measured at
//! cold temperatures fit without narrowing. Outputs are `u32`.

use crate::{
    constants::physics::KELVIN_OFFSET,
    errors::{ThermistorError, ThermistorResult},
};

/// Convert Celsius to Kelvin
#[inline]
pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + KELVIN_OFFSET
}

/// Convert Kelvin to Celsius
#[inline]
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

/// A single (temperature, resistance) measurement
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalibrationPoint {
    /// Temperature in °C
    pub celsius: f64,
    /// Measured resistance in ohms
    pub ohms: u64,
}

impl CalibrationPoint {
    /// Create a calibration point
    pub const fn new(celsius: f64, ohms: u64) -> Self {
        Self { celsius, ohms }
    }

    /// Temperature of this point in Kelvin
    pub fn kelvin(&self) -> f64 {
        celsius_to_kelvin(self.celsius)
    }

    /// Natural log of the resistance
    pub(crate) fn ln_ohms(&self) -> f64 {
        libm::log(self.ohms as f64)
    }
}

impl From<(f64, u64)> for CalibrationPoint {
    fn from((celsius, ohms): (f64, u64)) -> Self {
        Self::new(celsius, ohms)
    }
}

/// Reject points whose temperature is NaN or infinite
pub(crate) fn check_finite(points: &[CalibrationPoint]) -> ThermistorResult<()> {
    if points.iter().all(|p| p.celsius.is_finite()) {
        Ok(())
    } else {
        Err(ThermistorError::InvalidCalibration {
            reason: "calibration temperatures must be finite",
        })
    }
}
