//! End-to-end curve computation: validate, derive, sweep, solve, extract.

use nalgebra::DVector;
use rayon::prelude::*;
use voltaic_core::{ArrayConfig, OperatingPoint, PanelConstants, SingleDiodeModel};

use crate::curve::{IvCurve, Mpp};
use crate::error::Result;
use crate::newton::{solve_current, ConvergenceCriteria};
use crate::sweep::voltage_sweep;

/// Options for one curve solve.
#[derive(Debug, Clone)]
pub struct SolveOptions {
    /// Number of voltage samples along the sweep (>= 2).
    pub resolution: usize,
    /// Per-sample Newton criteria.
    pub criteria: ConvergenceCriteria,
    /// Minimum sample count before the solves run on the rayon pool
    /// (below this, sequential is faster).
    pub min_points_for_parallel: usize,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            resolution: 1000,
            criteria: ConvergenceCriteria::default(),
            min_points_for_parallel: 64,
        }
    }
}

impl SolveOptions {
    /// Options with an explicit sweep resolution.
    pub fn with_resolution(resolution: usize) -> Self {
        Self {
            resolution,
            ..Self::default()
        }
    }
}

/// A solved curve together with its maximum power point.
#[derive(Debug, Clone)]
pub struct PvSolution {
    /// The sampled I-V/P-V table.
    pub curve: IvCurve,
    /// The maximum power point of that table.
    pub mpp: Mpp,
}

/// Compute the I-V/P-V characteristic and MPP for one operating point.
///
/// Validation runs first and gates everything downstream. The per-sample
/// solves are independent and run on the rayon pool once the sample count
/// reaches `min_points_for_parallel`; results land back in sweep order
/// either way. The first failing sample aborts the whole call; no partial
/// curve is ever returned.
pub fn solve_pv_curve(
    config: &ArrayConfig,
    point: &OperatingPoint,
    constants: &PanelConstants,
    options: &SolveOptions,
) -> Result<PvSolution> {
    config.validate()?;
    point.validate()?;

    let model = SingleDiodeModel::new(config.params(constants), point, constants)?;
    let voltages = voltage_sweep(model.v_oc(), options.resolution)?;

    let use_parallel = voltages.len() >= options.min_points_for_parallel
        && rayon::current_num_threads() > 1;

    let currents: Vec<f64> = if use_parallel {
        log::debug!(
            "solving {} samples on {} rayon threads",
            voltages.len(),
            rayon::current_num_threads()
        );
        voltages
            .as_slice()
            .par_iter()
            .map(|&v| solve_current(&model, v, &options.criteria))
            .collect::<Result<_>>()?
    } else {
        log::debug!("solving {} samples sequentially", voltages.len());
        voltages
            .iter()
            .map(|&v| solve_current(&model, v, &options.criteria))
            .collect::<Result<_>>()?
    };

    let currents = DVector::from_vec(currents);
    let curve = IvCurve::assemble(&voltages, &currents)?;
    let mpp = curve.mpp()?;

    Ok(PvSolution { curve, mpp })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_reference_scenario() {
        let config = ArrayConfig::new(4, 3);
        let solution = solve_pv_curve(
            &config,
            &OperatingPoint::stc(),
            &PanelConstants::default(),
            &SolveOptions::default(),
        )
        .expect("reference scenario should solve");

        assert_eq!(solution.curve.len(), 1000);

        let first = solution.curve.points()[0];
        let last = solution.curve.points()[999];
        assert_eq!(first.voltage, 0.0);
        assert_eq!(last.voltage, 189.6);
        assert!(
            (first.current - 28.05).abs() < 0.05,
            "I(0) = {}",
            first.current
        );

        // Real arrays never reach the ideal I_sc * V_oc corner.
        assert!(solution.mpp.power < 28.05 * 189.6);
        assert!(solution.mpp.power > 0.0);
    }

    #[test]
    fn test_resolution_is_configurable() {
        let config = ArrayConfig::new(2, 1);
        let solution = solve_pv_curve(
            &config,
            &OperatingPoint::stc(),
            &PanelConstants::default(),
            &SolveOptions::with_resolution(250),
        )
        .unwrap();

        assert_eq!(solution.curve.len(), 250);
        assert_eq!(solution.curve.points()[249].voltage, 47.4 * 2.0);
    }

    #[test]
    fn test_validation_gates_the_pipeline() {
        let constants = PanelConstants::default();
        let options = SolveOptions::default();

        let bad_config = solve_pv_curve(
            &ArrayConfig::new(0, 3),
            &OperatingPoint::stc(),
            &constants,
            &options,
        );
        assert!(matches!(
            bad_config,
            Err(Error::Model(voltaic_core::Error::InvalidArrayConfig(_)))
        ));

        let bad_point = solve_pv_curve(
            &ArrayConfig::new(4, 3),
            &OperatingPoint::new(0.0, 298.0),
            &constants,
            &options,
        );
        assert!(matches!(
            bad_point,
            Err(Error::Model(voltaic_core::Error::InvalidOperatingPoint(_)))
        ));
    }

    #[test]
    fn test_sequential_and_parallel_agree() {
        let config = ArrayConfig::new(4, 3);
        let point = OperatingPoint::stc();
        let constants = PanelConstants::default();

        let sequential = solve_pv_curve(
            &config,
            &point,
            &constants,
            &SolveOptions {
                min_points_for_parallel: usize::MAX,
                ..SolveOptions::default()
            },
        )
        .unwrap();

        let parallel = solve_pv_curve(
            &config,
            &point,
            &constants,
            &SolveOptions {
                min_points_for_parallel: 1,
                ..SolveOptions::default()
            },
        )
        .unwrap();

        assert_eq!(sequential.curve.len(), parallel.curve.len());
        for (s, p) in sequential
            .curve
            .points()
            .iter()
            .zip(parallel.curve.points())
        {
            assert_eq!(s.voltage, p.voltage);
            assert_eq!(s.current, p.current);
        }
        assert_eq!(sequential.mpp, parallel.mpp);
    }
}
