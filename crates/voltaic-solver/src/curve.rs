//! Assembled I-V/P-V curve table and maximum power point extraction.

use nalgebra::DVector;

use crate::error::{Error, Result};

/// One sampled point of the array characteristic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// Terminal voltage (V).
    pub voltage: f64,
    /// Terminal current (A).
    pub current: f64,
    /// Delivered power (W), always `voltage * current`.
    pub power: f64,
}

impl CurvePoint {
    /// Pair a voltage and current sample; power is their exact product.
    pub fn new(voltage: f64, current: f64) -> Self {
        Self {
            voltage,
            current,
            power: voltage * current,
        }
    }
}

/// Maximum power point of a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mpp {
    /// Voltage at maximum power (V).
    pub voltage: f64,
    /// Current at maximum power (A).
    pub current: f64,
    /// Maximum power (W).
    pub power: f64,
}

/// Ordered table of curve samples, non-decreasing in voltage.
#[derive(Debug, Clone)]
pub struct IvCurve {
    points: Vec<CurvePoint>,
}

impl IvCurve {
    /// Pair voltage and current samples index-for-index.
    ///
    /// Converged currents past the model's actual open-circuit voltage are
    /// negative (the fixed datasheet sweep endpoint overshoots it); they are
    /// clamped to zero so every point satisfies `current >= 0`.
    pub fn assemble(voltages: &DVector<f64>, currents: &DVector<f64>) -> Result<Self> {
        if voltages.len() != currents.len() {
            return Err(Error::LengthMismatch {
                voltages: voltages.len(),
                currents: currents.len(),
            });
        }

        let points = voltages
            .iter()
            .zip(currents.iter())
            .map(|(&v, &i)| CurvePoint::new(v, i.max(0.0)))
            .collect();

        Ok(Self { points })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the curve has no samples.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All samples in sweep order.
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Voltage samples in sweep order.
    pub fn voltages(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.voltage).collect()
    }

    /// Current samples in sweep order.
    pub fn currents(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.current).collect()
    }

    /// Power samples in sweep order.
    pub fn powers(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.power).collect()
    }

    /// Find the maximum power point by a single linear scan.
    ///
    /// Ties within floating noise keep the first (lowest-voltage) sample,
    /// so the result is deterministic.
    pub fn mpp(&self) -> Result<Mpp> {
        let mut best: Option<&CurvePoint> = None;

        for point in &self.points {
            if best.is_none_or(|b| point.power > b.power) {
                best = Some(point);
            }
        }

        best.map(|p| Mpp {
            voltage: p.voltage,
            current: p.current,
            power: p.power,
        })
        .ok_or(Error::EmptyCurve)
    }
}
