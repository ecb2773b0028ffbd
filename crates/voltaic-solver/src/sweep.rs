//! Voltage sample generation for the curve sweep.

use nalgebra::DVector;

use crate::error::{Error, Result};

/// Generate `n` evenly spaced voltage samples from 0 to `v_oc` inclusive.
///
/// Both endpoints land exactly: the first sample is 0 and the last is
/// `v_oc`. Fewer than two samples cannot hold both and is rejected.
pub fn voltage_sweep(v_oc: f64, n: usize) -> Result<DVector<f64>> {
    if n < 2 {
        return Err(Error::InvalidResolution(n));
    }

    Ok(DVector::from_fn(n, |i, _| {
        let t = i as f64 / (n - 1) as f64;
        t * v_oc
    }))
}
