//! Common test utilities for integration tests
//!
//! This module provides:
//! - Calibration scenarios taken from real thermistor datasheets
//! - Assertion helpers for resistance and temperature comparisons

#![allow(dead_code)]

pub mod scenarios;

use thermocal_core::ThermistorModel;

/// Assert a computed resistance is within `tolerance` ohms of `expected`
pub fn assert_ohms_near(actual: u32, expected: u64, tolerance: u64) {
    let diff = (actual as i64 - expected as i64).unsigned_abs();
    assert!(
        diff <= tolerance,
        "resistance {actual} differs from {expected} by {diff} (> {tolerance})"
    );
}

/// Assert a computed temperature is within `tolerance` °C of `expected`
pub fn assert_celsius_near(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "temperature {actual} differs from {expected} by more than {tolerance}"
    );
}

/// Resistances sampled every `step` °C across `[from, to]`
pub fn sweep<M: ThermistorModel + ?Sized>(model: &M, from: f64, to: f64, step: f64) -> Vec<(f64, u32)> {
    let mut samples = Vec::new();
    let mut celsius = from;
    while celsius <= to {
        samples.push((celsius, model.resistance_from_temperature(celsius)));
        celsius += step;
    }
    samples
}
