//! Property tests for the calibration models
//!
//! - Temperature -> resistance -> temperature round trips inside the
//!   calibrated range
//! - Resistance never increases with temperature for NTC calibrations
//! - Beta calibration recovers the β of a synthetic curve

mod common;

use proptest::prelude::*;
use thermocal_core::{BetaModel, CalibrationPoint, SteinhartHartModel, ThermistorModel};

use common::scenarios;

/// Ohms on an ideal Beta curve, rounded to the nearest ohm
fn ideal_beta_ohms(beta: f64, r25: f64, celsius: f64) -> u64 {
    let kelvin = celsius + 273.15;
    (r25 * (beta * (1.0 / kelvin - 1.0 / 298.15)).exp()).round() as u64
}

proptest! {
    #[test]
    fn beta_round_trip(celsius in -35.0f64..=35.0) {
        let scenario = scenarios::automotive_ntc();
        let model = BetaModel::from_points(scenario.beta_points()).unwrap();

        let ohms = model.resistance_from_temperature(celsius);
        let back = model.temperature_from_resistance(ohms).unwrap();
        prop_assert!((back - celsius).abs() <= 1.0, "{} -> {} -> {}", celsius, ohms, back);
    }

    #[test]
    fn steinhart_hart_round_trip(celsius in 0.0f64..=50.0) {
        let scenario = scenarios::ntc_10k();
        let model = SteinhartHartModel::from_points(scenario.points).unwrap();

        let ohms = model.resistance_from_temperature(celsius);
        let back = model.temperature_from_resistance(ohms).unwrap();
        prop_assert!((back - celsius).abs() <= 1.0, "{} -> {} -> {}", celsius, ohms, back);
    }

    #[test]
    fn resistance_non_increasing(a in -35.0f64..=35.0, b in -35.0f64..=35.0) {
        let scenario = scenarios::automotive_ntc();
        let beta = BetaModel::from_points(scenario.beta_points()).unwrap();
        let sh = SteinhartHartModel::from_points(scenario.points).unwrap();
        let (cold, hot) = if a <= b { (a, b) } else { (b, a) };

        prop_assert!(beta.resistance_from_temperature(cold) >= beta.resistance_from_temperature(hot));
        prop_assert!(sh.resistance_from_temperature(cold) >= sh.resistance_from_temperature(hot));
    }

    #[test]
    fn beta_recovers_synthetic_curve(
        beta in 2500.0f64..4500.0,
        r25 in 1_000.0f64..100_000.0,
        cold in -40.0f64..0.0,
        hot in 30.0f64..80.0,
    ) {
        let points = [
            CalibrationPoint::new(cold, ideal_beta_ohms(beta, r25, cold)),
            CalibrationPoint::new(hot, ideal_beta_ohms(beta, r25, hot)),
        ];
        let model = BetaModel::from_points(points).unwrap();

        prop_assert!((model.beta() - beta).abs() / beta < 0.01);
        prop_assert!((model.r25() as f64 - r25).abs() / r25 < 0.01);
    }
}
