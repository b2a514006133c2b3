//! Closed-Form Thermistor Models
//!
//! ## Overview
//!
//! Both models fit a curve exactly through the minimum number of calibration
//! points. No least-squares, no iteration: the coefficients fall out of a
//! direct algebraic solve, and the model is immutable from then on.
//!
//! | Model | Points | Coefficients |
//! |-------|--------|--------------|
//! | [`BetaModel`] | 2 | β, R25 |
//! | [`SteinhartHartModel`] | 3 | A, B, C |
//!
//! ## Beta Parameter Equation
//!
//! ```text
//! 1/T = 1/T0 + (1/β)·ln(R/R25)        T0 = 298.15 K
//! ```
//!
//! ## Steinhart-Hart Equation
//!
//! ```text
//! 1/T = A + B·ln(R) + C·ln(R)³
//! ```
//!
//! The cubic term corrects the curvature the Beta equation misses at the
//! ends of a wide range.
//!
//! ## Usage Example
//!
//! ```rust
//! use thermocal_core::{BetaModel, SteinhartHartModel, ThermistorModel};
//!
//! let beta = BetaModel::from_values(-35.0, 112_800, 35.0, 3_100)?;
//! let sh = SteinhartHartModel::from_values(-35.0, 112_800, -5.0, 19_800, 35.0, 3_100)?;
//!
//! let models: [&dyn ThermistorModel; 2] = [&beta, &sh];
//! for model in models {
//!     let ohms = model.resistance_from_temperature(0.0);
//!     assert!(ohms > 14_000 && ohms < 16_000);
//! }
//! # Ok::<(), thermocal_core::ThermistorError>(())
//! ```

mod beta;
mod steinhart_hart;
mod utils;

pub use beta::BetaModel;
pub use steinhart_hart::SteinhartHartModel;
