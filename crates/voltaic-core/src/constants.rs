//! Panel datasheet values and physical constants.

/// Electron charge (C).
pub const Q_ELECTRON: f64 = 1.60217646e-19;

/// Boltzmann constant (J/K).
pub const K_BOLTZMANN: f64 = 1.3806503e-23;

/// Thermal voltage kT/q at a given temperature (V).
pub fn thermal_voltage(temp_k: f64) -> f64 {
    K_BOLTZMANN * temp_k / Q_ELECTRON
}

/// Per-panel datasheet values and single-diode model constants.
///
/// Fixed at construction and passed by reference through the pipeline;
/// nothing mutates them between calls.
#[derive(Debug, Clone)]
pub struct PanelConstants {
    /// Shunt resistance (ohms).
    pub r_sh: f64,
    /// Short-circuit current temperature coefficient (A/K).
    pub k_i: f64,
    /// Reference temperature (K).
    pub t_n: f64,
    /// Diode ideality factor.
    pub n: f64,
    /// Band-gap energy (eV).
    pub e_g0: f64,
    /// Series resistance (ohms).
    pub r_s: f64,
    /// Per-panel short-circuit current (A).
    pub i_sc: f64,
    /// Per-panel open-circuit voltage (V).
    pub v_oc: f64,
    /// Series-connected cells per panel.
    pub n_s: f64,
}

impl Default for PanelConstants {
    fn default() -> Self {
        Self {
            r_sh: 545.82,
            k_i: 0.037,
            t_n: 298.0,
            n: 1.0,
            e_g0: 1.1,
            r_s: 0.39,
            i_sc: 9.35,
            v_oc: 47.4,
            n_s: 72.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thermal_voltage_room_temperature() {
        let vt = thermal_voltage(298.0);
        // kT/q at 298 K is about 25.7 mV
        assert!((vt - 0.02568).abs() < 1e-4, "Vt = {} (expected ~0.02568)", vt);
    }

    #[test]
    fn test_default_datasheet_values() {
        let c = PanelConstants::default();
        assert_eq!(c.i_sc, 9.35);
        assert_eq!(c.v_oc, 47.4);
        assert_eq!(c.n_s, 72.0);
        assert_eq!(c.r_s, 0.39);
        assert_eq!(c.r_sh, 545.82);
    }
}
