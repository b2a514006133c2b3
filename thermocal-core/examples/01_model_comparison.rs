//! Beta vs Steinhart-Hart Comparison
//!
//! Calibrates both models from the same NTC bench measurements and prints
//! their resistance curves side by side.
//!
//! ## What You'll Learn
//!
//! - Deriving model coefficients from calibration points
//! - Evaluating models through the shared `ThermistorModel` trait
//! - Handling calibration errors
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_model_comparison
//! ```

use thermocal_core::{
    BetaModel, CalibrationPoint, SteinhartHartModel, ThermistorError, ThermistorModel,
};

fn main() -> Result<(), ThermistorError> {
    println!("Thermocal Model Comparison");
    println!("==========================\n");

    let cold = CalibrationPoint::new(-35.0, 112_800);
    let mid = CalibrationPoint::new(-5.0, 19_800);
    let hot = CalibrationPoint::new(35.0, 3_100);

    let steinhart_hart = SteinhartHartModel::from_points([cold, mid, hot])?;
    let beta = BetaModel::from_points([cold, hot])?;

    let (a, b, c) = steinhart_hart.coefficients();
    println!("Steinhart-Hart: A={a:e} B={b:e} C={c:e}");
    println!("Beta:           beta={:.2} R25={}\n", beta.beta(), beta.r25());

    println!("{:>6}  {:>16}  {:>10}", "T(°C)", "Steinhart-Hart", "Beta");
    for celsius in (-35..=35).step_by(5) {
        let celsius = f64::from(celsius);
        println!(
            "{:>6}  {:>16}  {:>10}",
            celsius,
            steinhart_hart.resistance_from_temperature(celsius),
            beta.resistance_from_temperature(celsius),
        );
    }

    // Repeated resistance cannot pin down three coefficients
    println!();
    match SteinhartHartModel::from_points([cold, cold, hot]) {
        Ok(_) => println!("Unexpectedly accepted degenerate calibration"),
        Err(e) => println!("Degenerate calibration rejected: {e}"),
    }

    Ok(())
}
