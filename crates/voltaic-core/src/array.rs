//! Array wiring configuration and array-level electrical parameters.

use crate::constants::PanelConstants;
use crate::error::{Error, Result};

/// How the panels are wired: `series` panels per string, `parallel` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Panels connected in series per string.
    pub series: u32,
    /// Parallel strings.
    pub parallel: u32,
}

impl ArrayConfig {
    /// Create a new array configuration.
    pub fn new(series: u32, parallel: u32) -> Self {
        Self { series, parallel }
    }

    /// Check that both counts are strictly positive.
    pub fn validate(&self) -> Result<()> {
        if self.series == 0 {
            return Err(Error::InvalidArrayConfig(
                "series panel count must be a positive integer".into(),
            ));
        }
        if self.parallel == 0 {
            return Err(Error::InvalidArrayConfig(
                "parallel string count must be a positive integer".into(),
            ));
        }
        Ok(())
    }

    /// Scale per-panel datasheet values to the whole array.
    ///
    /// Short-circuit current scales with the parallel string count,
    /// open-circuit voltage and series cell count with the series count.
    pub fn params(&self, constants: &PanelConstants) -> ArrayParams {
        ArrayParams {
            i_sc: constants.i_sc * f64::from(self.parallel),
            v_oc: constants.v_oc * f64::from(self.series),
            n_s: constants.n_s * f64::from(self.series),
        }
    }
}

/// Array-level electrical parameters derived from the wiring configuration.
#[derive(Debug, Clone, Copy)]
pub struct ArrayParams {
    /// Array short-circuit current (A).
    pub i_sc: f64,
    /// Array open-circuit voltage (V).
    pub v_oc: f64,
    /// Series-connected cells across the whole string.
    pub n_s: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaling_is_linear() {
        let constants = PanelConstants::default();
        let params = ArrayConfig::new(4, 3).params(&constants);

        assert_eq!(params.i_sc, 9.35 * 3.0);
        assert_eq!(params.v_oc, 47.4 * 4.0);
        assert_eq!(params.n_s, 72.0 * 4.0);
    }

    #[test]
    fn test_single_panel() {
        let constants = PanelConstants::default();
        let params = ArrayConfig::new(1, 1).params(&constants);

        assert_eq!(params.i_sc, 9.35);
        assert_eq!(params.v_oc, 47.4);
        assert_eq!(params.n_s, 72.0);
    }

    #[test]
    fn test_validate_rejects_zero_counts() {
        assert!(matches!(
            ArrayConfig::new(0, 3).validate(),
            Err(Error::InvalidArrayConfig(_))
        ));
        assert!(matches!(
            ArrayConfig::new(4, 0).validate(),
            Err(Error::InvalidArrayConfig(_))
        ));
        assert!(ArrayConfig::new(4, 3).validate().is_ok());
    }
}
