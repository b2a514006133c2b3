//! Core traits for thermistor models
//!
//! Every model answers the same two questions: what resistance at this
//! temperature, and what temperature at this resistance. Code that does not
//! care which curve is in use should take `&dyn ThermistorModel` or a generic
//! `M: ThermistorModel`.

use crate::errors::ThermistorResult;

/// Direction of the resistance/temperature slope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureCoefficient {
    /// Resistance falls as temperature rises
    Ntc,
    /// Resistance rises with temperature
    Ptc,
}

/// A calibrated resistance/temperature curve
pub trait ThermistorModel {
    /// Resistance in ohms at `celsius`, truncated toward zero
    ///
    /// Results below zero or NaN saturate to `0`, results above `u32::MAX`
    /// saturate to `u32::MAX`.
    fn resistance_from_temperature(&self, celsius: f64) -> u32;

    /// Temperature in °C at which the thermistor reads `ohms`
    fn temperature_from_resistance(&self, ohms: u32) -> ThermistorResult<f64>;

    /// Classify the curve by sampling it at 0°C and 50°C
    fn temperature_coefficient(&self) -> TemperatureCoefficient {
        if self.resistance_from_temperature(50.0) > self.resistance_from_temperature(0.0) {
            TemperatureCoefficient::Ptc
        } else {
            TemperatureCoefficient::Ntc
        }
    }
}

impl<M: ThermistorModel + ?Sized> ThermistorModel for &M {
    fn resistance_from_temperature(&self, celsius: f64) -> u32 {
        (**self).resistance_from_temperature(celsius)
    }

    fn temperature_from_resistance(&self, ohms: u32) -> ThermistorResult<f64> {
        (**self).temperature_from_resistance(ohms)
    }

    fn temperature_coefficient(&self) -> TemperatureCoefficient {
        (**self).temperature_coefficient()
    }
}
