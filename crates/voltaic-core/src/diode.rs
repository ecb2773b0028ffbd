//! Single-diode equivalent-circuit model of the panel array.
//!
//! The array is a photogenerated current source in parallel with a diode and
//! a shunt resistor, behind a series resistor. The terminal current at a
//! given voltage is the root of an implicit equation; this module derives
//! the operating-point parameters and evaluates the residual together with
//! its analytic derivative for the solver to iterate on.

use crate::array::ArrayParams;
use crate::constants::{thermal_voltage, PanelConstants, K_BOLTZMANN, Q_ELECTRON};
use crate::error::{Error, Result};
use crate::operating::OperatingPoint;

/// Reference temperature of the photocurrent correction (K).
const T_REF: f64 = 298.0;

/// Reference irradiance the datasheet current is quoted at (W/m^2).
const G_REF: f64 = 1000.0;

/// Currents derived from the array parameters at one operating point.
///
/// Recomputed for every call; never cached across operating points.
#[derive(Debug, Clone, Copy)]
pub struct DerivedParams {
    /// Reverse saturation current (A).
    pub i_rs: f64,
    /// Temperature-adjusted diode saturation current (A).
    pub i_o: f64,
    /// Photogenerated current (A).
    pub i_ph: f64,
}

impl DerivedParams {
    /// Derive the saturation and photogenerated currents.
    ///
    /// ```text
    /// I_rs = I_sc / (exp(q*V_oc / (n*N_s*K*T)) - 1)
    /// I_o  = I_rs * (T/T_n) * exp(q*E_g0*(1/T_n - 1/T) / (n*K))
    /// I_ph = (I_sc + k_i*(T - 298)) * (G / 1000)
    /// ```
    ///
    /// The `I_o` temperature ratio is first-power, matching the model this
    /// implements rather than the cubic variant found in some texts.
    /// Any exponential overflow surfaces as [`Error::NumericOverflow`]
    /// instead of propagating as `inf`/`nan`.
    pub fn derive(
        array: &ArrayParams,
        point: &OperatingPoint,
        constants: &PanelConstants,
    ) -> Result<Self> {
        point.validate()?;

        let t = point.temperature;
        let nvt = constants.n * array.n_s * thermal_voltage(t);

        let e_voc = (array.v_oc / nvt).exp();
        if !e_voc.is_finite() {
            return Err(Error::NumericOverflow(format!(
                "exp overflow deriving reverse saturation current at T = {} K",
                t
            )));
        }
        let i_rs = array.i_sc / (e_voc - 1.0);

        let band_gap_term =
            (Q_ELECTRON * constants.e_g0 * (1.0 / constants.t_n - 1.0 / t)
                / (constants.n * K_BOLTZMANN))
                .exp();
        let i_o = i_rs * (t / constants.t_n) * band_gap_term;

        let i_ph = (array.i_sc + constants.k_i * (t - T_REF)) * (point.irradiance / G_REF);

        if !i_rs.is_finite() || !i_o.is_finite() || !i_ph.is_finite() {
            return Err(Error::NumericOverflow(format!(
                "non-finite derived parameters at G = {} W/m^2, T = {} K",
                point.irradiance, t
            )));
        }

        Ok(Self { i_rs, i_o, i_ph })
    }
}

/// The implicit single-diode current equation, fixed at one operating point.
///
/// Bundles the array parameters, the derived currents, and the junction
/// thermal voltage so the per-sample solver only touches read-only state.
#[derive(Debug, Clone)]
pub struct SingleDiodeModel {
    array: ArrayParams,
    derived: DerivedParams,
    /// Junction thermal voltage n * N_s * k * T / q across the string (V).
    nvt: f64,
    r_s: f64,
    r_sh: f64,
}

impl SingleDiodeModel {
    /// Derive the model for one array configuration and operating point.
    pub fn new(
        array: ArrayParams,
        point: &OperatingPoint,
        constants: &PanelConstants,
    ) -> Result<Self> {
        let derived = DerivedParams::derive(&array, point, constants)?;
        let nvt = constants.n * array.n_s * thermal_voltage(point.temperature);
        Ok(Self {
            array,
            derived,
            nvt,
            r_s: constants.r_s,
            r_sh: constants.r_sh,
        })
    }

    /// Evaluate the implicit equation and its current-derivative.
    ///
    /// Returns `(f, df/dI)` where:
    /// ```text
    /// f(I, V) = I_ph - I_o*(exp((V + I*R_s)/nvt) - 1) - (V + I*R_s)/R_sh - I
    /// ```
    /// `df/dI` is strictly negative (the -1 term bounds it away from zero),
    /// so Newton steps on `f` are always defined. Either value may be
    /// non-finite if the exponential overflows; callers must check.
    pub fn residual(&self, current: f64, voltage: f64) -> (f64, f64) {
        let v_junction = voltage + current * self.r_s;
        let e = (v_junction / self.nvt).exp();

        let f = self.derived.i_ph
            - self.derived.i_o * (e - 1.0)
            - v_junction / self.r_sh
            - current;
        let dfdi = -self.derived.i_o * e * self.r_s / self.nvt - self.r_s / self.r_sh - 1.0;

        (f, dfdi)
    }

    /// Array short-circuit current (A), used to seed the solver.
    pub fn i_sc(&self) -> f64 {
        self.array.i_sc
    }

    /// Array open-circuit voltage (V), the sweep endpoint.
    pub fn v_oc(&self) -> f64 {
        self.array.v_oc
    }

    /// Photogenerated current at this operating point (A), the physical
    /// upper bound on any converged sample.
    pub fn i_ph(&self) -> f64 {
        self.derived.i_ph
    }
}
