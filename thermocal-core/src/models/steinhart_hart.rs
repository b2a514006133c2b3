//! Steinhart-Hart model
//!
//! Three-coefficient thermistor equation, calibrated from three operating
//! points:
//!
//! ```text
//! 1/T = A + B·ln(R) + C·ln(R)³
//! ```
//!
//! ## Coefficient Derivation
//!
//! Writing `Li = ln(Ri)` and `Ti` in Kelvin, the three point equations are
//! solved by elimination:
//!
//! ```text
//! C = [(1/T1 - 1/T2) - (L1-L2)·(1/T1 - 1/T3)/(L1-L3)]
//!     / [(L1³ - L2³) - (L1-L2)·(L1³ - L3³)/(L1-L3)]
//! B = [(1/T1 - 1/T2) - C·(L1³ - L2³)] / (L1 - L2)
//! A = 1/T1 - C·L1³ - B·L1
//! ```
//!
//! ## Inverse
//!
//! Resistance from temperature solves the depressed cubic in `ln(R)` with
//! Cardano's formula:
//!
//! ```text
//! X = (A - 1/T) / 2C
//! Y = sqrt(B³/(27·C³) + X²)
//! R = exp(∛(Y - X) - ∛(Y + X))
//! ```
//!
//! `∛` is the signed real cube root. When the discriminant under the square
//! root is negative (PTC coefficients) the result is NaN and the resistance
//! saturates to zero.

use crate::{
    calibration::{celsius_to_kelvin, check_finite, kelvin_to_celsius, CalibrationPoint},
    constants::limits::MIN_CALIBRATION_RESISTANCE_OHMS,
    errors::{ThermistorError, ThermistorResult},
    traits::{TemperatureCoefficient, ThermistorModel},
};

use super::utils;

/// Steinhart-Hart equation, derived from three calibration points
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SteinhartHartModel {
    a: f64,
    b: f64,
    c: f64,
}

impl SteinhartHartModel {
    /// Derive A, B and C from three (°C, ohms) measurements
    ///
    /// Fails with [`ThermistorError::InvalidCalibration`] unless every
    /// resistance exceeds 5 ohms, the three resistances are pairwise distinct,
    /// the first two temperatures differ in Kelvin and every temperature is
    /// finite.
    pub fn from_values(
        t1: f64,
        r1: u64,
        t2: f64,
        r2: u64,
        t3: f64,
        r3: u64,
    ) -> ThermistorResult<Self> {
        Self::from_points([
            CalibrationPoint::new(t1, r1),
            CalibrationPoint::new(t2, r2),
            CalibrationPoint::new(t3, r3),
        ])
    }

    /// Derive A, B and C from three calibration points
    pub fn from_points(points: [CalibrationPoint; 3]) -> ThermistorResult<Self> {
        check_finite(&points).map_err(|err| {
            log_warn!("rejected Steinhart-Hart calibration: {}", err);
            err
        })?;

        let [p1, p2, p3] = points;
        if points.iter().any(|p| p.ohms <= MIN_CALIBRATION_RESISTANCE_OHMS) {
            return Err(reject("calibration resistances must exceed 5 ohms"));
        }
        if p1.ohms == p2.ohms || p2.ohms == p3.ohms || p1.ohms == p3.ohms {
            return Err(reject("calibration resistances must be distinct"));
        }
        let (t1, t2, t3) = (p1.kelvin(), p2.kelvin(), p3.kelvin());
        // Only the first pair is checked, in Kelvin; T3 may repeat T1 or T2
        if t1 == t2 {
            return Err(reject("first two calibration temperatures must differ"));
        }

        let (l1, l2, l3) = (p1.ln_ohms(), p2.ln_ohms(), p3.ln_ohms());
        let (l1_cubed, l2_cubed, l3_cubed) = (l1 * l1 * l1, l2 * l2 * l2, l3 * l3 * l3);

        let inv_t12 = 1.0 / t1 - 1.0 / t2;
        let inv_t13 = 1.0 / t1 - 1.0 / t3;
        let ratio = (l1 - l2) / (l1 - l3);

        let c = (inv_t12 - ratio * inv_t13) / ((l1_cubed - l2_cubed) - ratio * (l1_cubed - l3_cubed));
        let b = (inv_t12 - c * (l1_cubed - l2_cubed)) / (l1 - l2);
        let a = 1.0 / t1 - c * l1_cubed - b * l1;

        log_debug!("Steinhart-Hart model: A={} B={} C={}", a, b, c);

        Ok(Self { a, b, c })
    }

    /// Constant term A (1/K)
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Linear coefficient B (1/K)
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Cubic coefficient C (1/K)
    pub fn c(&self) -> f64 {
        self.c
    }

    /// All three coefficients as `(A, B, C)`
    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }
}

fn reject(reason: &'static str) -> ThermistorError {
    log_warn!("rejected Steinhart-Hart calibration: {}", reason);
    ThermistorError::InvalidCalibration { reason }
}

impl ThermistorModel for SteinhartHartModel {
    fn resistance_from_temperature(&self, celsius: f64) -> u32 {
        let (a, b, c) = self.coefficients();

        let x = (a - 1.0 / celsius_to_kelvin(celsius)) / (2.0 * c);
        let y = libm::sqrt(b * b * b / (c * c * c) / 27.0 + x * x);
        let ln_ohms = utils::signed_cbrt(y - x) - utils::signed_cbrt(y + x);

        utils::truncate_ohms(libm::exp(ln_ohms))
    }

    fn temperature_from_resistance(&self, ohms: u32) -> ThermistorResult<f64> {
        utils::check_input_resistance(ohms)?;

        let ln_ohms = libm::log(ohms as f64);
        let inv_kelvin = self.a + self.b * ln_ohms + self.c * ln_ohms * ln_ohms * ln_ohms;
        Ok(kelvin_to_celsius(1.0 / inv_kelvin))
    }

    // B dominates dT⁻¹/dln(R) for physical thermistors
    fn temperature_coefficient(&self) -> TemperatureCoefficient {
        if self.b < 0.0 {
            TemperatureCoefficient::Ptc
        } else {
            TemperatureCoefficient::Ntc
        }
    }
}
