//! Model-wide parameters read from the model file.
use crate::facility::AllocationPolicy;
use crate::units::{Celsius, KilometersPerHour, TonnesPerCelsius};
use anyhow::{Result, ensure};
use serde::Deserialize;

/// Default average travel speed for time estimates
fn default_average_speed() -> KilometersPerHour {
    KilometersPerHour(80.0)
}

/// Default ideal storage temperature
fn default_ideal_temperature() -> Celsius {
    Celsius(4.0)
}

/// Default penalty rate for temperature deviation
fn default_temperature_penalty() -> TonnesPerCelsius {
    TonnesPerCelsius(10.0)
}

/// Model-wide parameters.
///
/// All fields are optional in the model file; the defaults are the conventional values used by
/// the reference data set.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ModelParameters {
    /// Average travel speed used for journey time estimates
    #[serde(rename = "average_speed_km_h", default = "default_average_speed")]
    pub average_speed: KilometersPerHour,
    /// The storage temperature most crops keep best at
    #[serde(default = "default_ideal_temperature")]
    pub ideal_temperature: Celsius,
    /// How much free storage capacity a degree of temperature deviation is worth
    #[serde(default = "default_temperature_penalty")]
    pub temperature_penalty: TonnesPerCelsius,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            average_speed: default_average_speed(),
            ideal_temperature: default_ideal_temperature(),
            temperature_penalty: default_temperature_penalty(),
        }
    }
}

/// Check the `average_speed_km_h` parameter is valid
fn check_average_speed(value: KilometersPerHour) -> Result<()> {
    ensure!(
        value.value().is_finite() && value > KilometersPerHour(0.0),
        "average_speed_km_h must be a finite number greater than zero"
    );

    Ok(())
}

/// Check the `ideal_temperature` parameter is valid
fn check_ideal_temperature(value: Celsius) -> Result<()> {
    ensure!(
        value.value().is_finite(),
        "ideal_temperature must be a finite number"
    );

    Ok(())
}

/// Check the `temperature_penalty` parameter is valid
fn check_temperature_penalty(value: TonnesPerCelsius) -> Result<()> {
    ensure!(
        value.value().is_finite() && value >= TonnesPerCelsius(0.0),
        "temperature_penalty must be a finite number, zero or greater"
    );

    Ok(())
}

impl ModelParameters {
    /// Validate parameters after reading in file
    pub fn validate(&self) -> Result<()> {
        check_average_speed(self.average_speed)?;
        check_ideal_temperature(self.ideal_temperature)?;
        check_temperature_penalty(self.temperature_penalty)?;

        Ok(())
    }

    /// The allocation policy described by these parameters
    pub fn allocation_policy(&self) -> AllocationPolicy {
        AllocationPolicy {
            ideal_temperature: self.ideal_temperature,
            temperature_penalty: self.temperature_penalty,
        }
    }
}
