//! Beta parameter model
//!
//! Simplified Steinhart-Hart equation for NTC thermistors, calibrated from
//! two operating points:
//!
//! ```text
//! β   = -T1·T2·ln(R1/R2) / (T1 - T2)
//! R25 = R1 / exp(-β·(T1 - T0) / (T1·T0))
//! ```
//!
//! All temperatures in Kelvin, `T0 = 298.15 K`.

use crate::{
    calibration::{celsius_to_kelvin, check_finite, kelvin_to_celsius, CalibrationPoint},
    constants::physics::{REFERENCE_TEMP_C, REFERENCE_TEMP_K},
    errors::{ThermistorError, ThermistorResult},
    traits::{TemperatureCoefficient, ThermistorModel},
};

use super::utils;

/// Beta parameter equation, derived from two calibration points
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BetaModel {
    /// Sensitivity coefficient β in Kelvin
    beta: f64,

    /// Derived resistance at 25°C in ohms
    r25: u32,
}

impl BetaModel {
    /// Derive β and R25 from two (°C, ohms) measurements
    ///
    /// Fails with [`ThermistorError::InvalidCalibration`] when the two
    /// temperatures are equal in Kelvin, a temperature is not finite, a
    /// resistance is zero or the two resistances are equal.
    pub fn from_values(t1: f64, r1: u64, t2: f64, r2: u64) -> ThermistorResult<Self> {
        Self::from_points([CalibrationPoint::new(t1, r1), CalibrationPoint::new(t2, r2)])
    }

    /// Derive β and R25 from two calibration points
    pub fn from_points(points: [CalibrationPoint; 2]) -> ThermistorResult<Self> {
        check_finite(&points).map_err(|err| {
            log_warn!("rejected Beta calibration: {}", err);
            err
        })?;

        let [p1, p2] = points;
        if p1.ohms == 0 || p2.ohms == 0 {
            return Err(reject("calibration resistances must be non-zero"));
        }
        if p1.ohms == p2.ohms {
            return Err(reject("calibration resistances must be distinct"));
        }

        let t1 = p1.kelvin();
        let t2 = p2.kelvin();
        let t0 = REFERENCE_TEMP_K;
        // Compared after the Kelvin shift, where nearby Celsius values can merge
        if t1 == t2 {
            return Err(reject("calibration temperatures must differ"));
        }

        let beta = -t1 * t2 * libm::log(p1.ohms as f64 / p2.ohms as f64) / (t1 - t2);
        let r25 = utils::truncate_ohms(p1.ohms as f64 / libm::exp(-beta * (t1 - t0) / t1 / t0));

        log_debug!("Beta model: beta={} r25={}", beta, r25);

        Ok(Self { beta, r25 })
    }

    /// Sensitivity coefficient β (K)
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Resistance at 25°C (ohms)
    pub fn r25(&self) -> u32 {
        self.r25
    }
}

fn reject(reason: &'static str) -> ThermistorError {
    log_warn!("rejected Beta calibration: {}", reason);
    ThermistorError::InvalidCalibration { reason }
}

impl ThermistorModel for BetaModel {
    fn resistance_from_temperature(&self, celsius: f64) -> u32 {
        let exponent =
            -self.beta * (celsius - REFERENCE_TEMP_C) / celsius_to_kelvin(celsius) / REFERENCE_TEMP_K;
        utils::truncate_ohms(self.r25 as f64 * libm::exp(exponent))
    }

    fn temperature_from_resistance(&self, ohms: u32) -> ThermistorResult<f64> {
        utils::check_input_resistance(ohms)?;

        let inv_kelvin =
            1.0 / REFERENCE_TEMP_K + 1.0 / self.beta * libm::log(ohms as f64 / self.r25 as f64);
        Ok(kelvin_to_celsius(1.0 / inv_kelvin))
    }

    fn temperature_coefficient(&self) -> TemperatureCoefficient {
        if self.beta < 0.0 {
            TemperatureCoefficient::Ptc
        } else {
            TemperatureCoefficient::Ntc
        }
    }
}
