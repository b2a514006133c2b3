//! Closed-form thermistor calibration
//!
//! Derives the resistance/temperature curve of a thermistor from a handful of
//! calibration measurements, then evaluates it in both directions.
//!
//! Two models are provided:
//! - [`BetaModel`]: one coefficient plus R25, calibrated from two points
//! - [`SteinhartHartModel`]: three coefficients, calibrated from three points
//!
//! Both are immutable `Copy` values and implement [`ThermistorModel`], so a
//! caller can hold either behind `&dyn ThermistorModel`.
//!
//! Key constraints:
//! - No heap allocation, `no_std` without the `std` feature
//! - Coefficients derived analytically, never by iteration
//! - Celsius and ohms at the API boundary, Kelvin only internally
//!
//! ```rust
//! use thermocal_core::{SteinhartHartModel, ThermistorModel};
//!
//! let model = SteinhartHartModel::from_values(
//!     -35.0, 112_800,
//!     -5.0, 19_800,
//!     35.0, 3_100,
//! )?;
//!
//! let ohms = model.resistance_from_temperature(20.0);
//! let celsius = model.temperature_from_resistance(ohms)?;
//! assert!((celsius - 20.0).abs() < 1.0);
//! # Ok::<(), thermocal_core::ThermistorError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

// Optional logging, compiled out without the `log` feature
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

pub mod calibration;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Public API
pub use calibration::{celsius_to_kelvin, kelvin_to_celsius, CalibrationPoint};
pub use errors::{ThermistorError, ThermistorResult};
pub use models::{BetaModel, SteinhartHartModel};
pub use traits::{TemperatureCoefficient, ThermistorModel};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
