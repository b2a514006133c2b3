//! Pre-built calibration scenarios
//!
//! Each scenario is a set of bench measurements for one thermistor. The
//! two-point subset feeds the Beta model, the full set feeds Steinhart-Hart.

use thermocal_core::CalibrationPoint;

/// A thermistor calibration run
pub struct CalibrationScenario {
    pub name: &'static str,
    /// Cold, middle and hot measurements
    pub points: [CalibrationPoint; 3],
}

impl CalibrationScenario {
    /// Outer points, for two-point calibration
    pub fn beta_points(&self) -> [CalibrationPoint; 2] {
        [self.points[0], self.points[2]]
    }

    /// Calibrated temperature range in °C
    pub fn range(&self) -> (f64, f64) {
        (self.points[0].celsius, self.points[2].celsius)
    }
}

/// Automotive NTC measured at -35, -5 and 35°C
pub fn automotive_ntc() -> CalibrationScenario {
    CalibrationScenario {
        name: "automotive_ntc",
        points: [
            CalibrationPoint::new(-35.0, 112_800),
            CalibrationPoint::new(-5.0, 19_800),
            CalibrationPoint::new(35.0, 3_100),
        ],
    }
}

/// Common 10k NTC (B25/50 ≈ 3950) around room temperature
pub fn ntc_10k() -> CalibrationScenario {
    CalibrationScenario {
        name: "ntc_10k",
        points: [
            CalibrationPoint::new(0.0, 32_650),
            CalibrationPoint::new(25.0, 10_000),
            CalibrationPoint::new(50.0, 3_603),
        ],
    }
}

/// All NTC scenarios
pub fn ntc_scenarios() -> [CalibrationScenario; 2] {
    [automotive_ntc(), ntc_10k()]
}
