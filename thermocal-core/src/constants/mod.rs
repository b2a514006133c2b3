//! Constants for Thermocal Core
//!
//! Centralized numeric values used by the calibration models, each with its
//! unit and origin.
//!
//! ## Organization
//!
//! - **Physics**: temperature scale conversion and the 25°C reference point
//! - **Limits**: bounds on calibration and evaluation inputs
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Use descriptive names that include units

/// Temperature scale constants and the nominal reference point.
pub mod physics;

/// Input limits enforced by the models.
pub mod limits;

// Re-export commonly used constants for convenience
pub use physics::{KELVIN_OFFSET, REFERENCE_TEMP_C, REFERENCE_TEMP_K};

pub use limits::{MIN_CALIBRATION_RESISTANCE_OHMS, MIN_INPUT_RESISTANCE_OHMS};
