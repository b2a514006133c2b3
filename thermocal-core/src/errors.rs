//! Error Types for Thermistor Calibration
//!
//! ## Design Philosophy
//!
//! Errors are kept small and `Copy`: every variant carries inline data only
//! (`&'static str` reasons, raw integer inputs), so they can be returned from
//! evaluation paths on targets without an allocator.
//!
//! ## Error Categories
//!
//! ### Calibration Failures
//! - `InvalidCalibration`: the calibration points cannot determine a model
//!   (repeated resistances, repeated temperatures, resistances too small)
//!
//! ### Evaluation Failures
//! - `InvalidInput`: a resistance the model cannot be evaluated at (zero ohms)
//!
//! ### Everything Else
//! Other degenerate arithmetic is not a distinct error. It flows out as a
//! non-finite `f64` (NaN or infinity), or as a saturated `u32` for
//! resistance outputs.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use thermocal_core::{SteinhartHartModel, ThermistorError};
//!
//! match SteinhartHartModel::from_values(-35.0, 112_800, -5.0, 112_800, 35.0, 3_100) {
//!     Ok(_model) => {
//!         // Coefficients derived - store the model
//!     }
//!     Err(ThermistorError::InvalidCalibration { reason }) => {
//!         // Re-measure: the points do not pin down a curve
//!         assert_eq!(reason, "calibration resistances must be distinct");
//!     }
//!     Err(ThermistorError::InvalidInput { .. }) => unreachable!(),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for calibration and evaluation
pub type ThermistorResult<T> = Result<T, ThermistorError>;

/// Thermistor model errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThermistorError {
    /// Calibration points cannot determine the model coefficients
    #[error("Invalid calibration: {reason}")]
    InvalidCalibration {
        /// Which precondition the calibration points violated
        reason: &'static str,
    },

    /// Resistance outside the domain the model can be evaluated on
    #[error("Invalid input: cannot evaluate at {ohms} ohms")]
    InvalidInput {
        /// The rejected resistance
        ohms: u32,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ThermistorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidCalibration { reason } =>
                defmt::write!(fmt, "Invalid calibration: {}", reason),
            Self::InvalidInput { ohms } =>
                defmt::write!(fmt, "Invalid input: {} ohms", ohms),
        }
    }
}
