//! # Voltaic
//!
//! Photovoltaic array I-V curve and maximum power point solver.
//!
//! Voltaic models a series/parallel panel array with the single-diode
//! equivalent circuit, sweeps its terminal voltage from short circuit to the
//! datasheet open-circuit voltage, solves the implicit current equation at
//! every sample with Newton-Raphson, and extracts the maximum power point
//! from the assembled curve.
//!
//! ## Quick Start
//!
//! ```rust
//! use voltaic::prelude::*;
//!
//! let solution = solve_pv_curve(
//!     &ArrayConfig::new(4, 3),
//!     &OperatingPoint::stc(),
//!     &PanelConstants::default(),
//!     &SolveOptions::default(),
//! )
//! .unwrap();
//!
//! println!(
//!     "Vmp = {:.2} V, Imp = {:.2} A, Pmax = {:.2} W",
//!     solution.mpp.voltage, solution.mpp.current, solution.mpp.power
//! );
//! ```

// Re-export the member crates
pub use voltaic_core as core;
pub use voltaic_solver as solver;

// ============================================================================
// Convenient re-exports from voltaic_core
// ============================================================================

pub use voltaic_core::{
    thermal_voltage,
    ArrayConfig,
    ArrayParams,
    DerivedParams,
    // Errors
    Error as CoreError,
    OperatingPoint,
    PanelConstants,
    SingleDiodeModel,
};

// ============================================================================
// Convenient re-exports from voltaic_solver
// ============================================================================

pub use voltaic_solver::{
    solve_current,
    // The pipeline
    solve_pv_curve,
    voltage_sweep,
    ConvergenceCriteria,
    CurvePoint,
    // Errors
    Error as SolverError,
    IvCurve,
    Mpp,
    PvSolution,
    SolveOptions,
};

// ============================================================================
// Re-export commonly used external types
// ============================================================================

/// Re-export of nalgebra's dynamic vector type.
pub use nalgebra::DVector;

/// Prelude module containing commonly used types and functions.
///
/// ```rust
/// use voltaic::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        solve_pv_curve, ArrayConfig, ConvergenceCriteria, CurvePoint, IvCurve, Mpp,
        OperatingPoint, PanelConstants, PvSolution, SolveOptions,
    };

    pub use crate::DVector;
}
