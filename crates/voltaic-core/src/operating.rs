//! Operating conditions: irradiance and cell temperature.

use crate::error::{Error, Result};

/// One operating point of the array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    /// Incident irradiance (W/m^2).
    pub irradiance: f64,
    /// Cell temperature (K).
    pub temperature: f64,
}

impl OperatingPoint {
    /// Create a new operating point.
    pub fn new(irradiance: f64, temperature: f64) -> Self {
        Self {
            irradiance,
            temperature,
        }
    }

    /// Standard test conditions: 1000 W/m^2 at 298 K.
    pub fn stc() -> Self {
        Self::new(1000.0, 298.0)
    }

    /// Check that both values are finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        if !self.irradiance.is_finite() || self.irradiance <= 0.0 {
            return Err(Error::InvalidOperatingPoint(format!(
                "irradiance must be a positive number, got {}",
                self.irradiance
            )));
        }
        if !self.temperature.is_finite() || self.temperature <= 0.0 {
            return Err(Error::InvalidOperatingPoint(format!(
                "temperature must be a positive number, got {}",
                self.temperature
            )));
        }
        Ok(())
    }
}
