//! Error types for voltaic-solver.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("model error: {0}")]
    Model(#[from] voltaic_core::Error),

    #[error("numeric overflow while solving at V = {voltage} V")]
    NumericOverflow { voltage: f64 },

    #[error("no convergence at V = {voltage} V after {iterations} iterations")]
    NonConvergence { voltage: f64, iterations: usize },

    #[error("non-physical current {current} A at V = {voltage} V")]
    PhysicallyInvalid { voltage: f64, current: f64 },

    #[error("sample length mismatch: {voltages} voltages, {currents} currents")]
    LengthMismatch { voltages: usize, currents: usize },

    #[error("empty curve")]
    EmptyCurve,

    #[error("sweep resolution must be at least 2, got {0}")]
    InvalidResolution(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
