use std::fmt;

use anyhow::{ensure, Result};
use serde::Serialize;

/// Tolerance on the simplex sum when validating a user-supplied vector.
const SIMPLEX_TOLERANCE: f64 = 1e-9;

/// Number of priority signals (and weight components).
pub const NUM_SIGNALS: usize = 4;

/// A point on the 3-simplex: four non-negative weights `(α, β, γ, δ)` summing to 1.
///
/// Which signal each component governs is decided by the scoring model's
/// `SignalBinding`; this type only carries the numbers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(into = "NamedWeights")]
pub struct WeightVector([f64; NUM_SIGNALS]);

#[derive(Serialize)]
struct NamedWeights { alpha: f64, beta: f64, gamma: f64, delta: f64 }

impl From<WeightVector> for NamedWeights {
    fn from(w: WeightVector) -> Self {
        Self { alpha: w.alpha(), beta: w.beta(), gamma: w.gamma(), delta: w.delta() }
    }
}

impl WeightVector {
    /// Validate and wrap a vector that must already lie on the simplex.
    pub fn new(components: [f64; NUM_SIGNALS]) -> Result<Self> {
        ensure!(components.iter().all(|&c| c.is_finite() && c >= 0.0),
            "[WeightVector.new] components must be finite and non-negative, got {components:?}");
        let sum = components.iter().sum::<f64>();
        ensure!((sum - 1.0).abs() <= SIMPLEX_TOLERANCE,
            "[WeightVector.new] components must sum to 1, got {sum}");

        Ok(Self(components))
    }

    /// The barycenter `(0.25, 0.25, 0.25, 0.25)`.
    pub fn uniform() -> Self { Self([0.25; NUM_SIGNALS]) }

    /// Project an arbitrary vector back onto the simplex: absolute value of every
    /// component, then divide by the component sum.
    ///
    /// This is lossy (sign information is discarded, not reflected). Fails when the
    /// vector is all zeros or carries non-finite components.
    pub fn repair(raw: [f64; NUM_SIGNALS]) -> Result<Self> {
        let abs = raw.map(f64::abs);
        let sum = abs.iter().sum::<f64>();
        ensure!(sum.is_finite() && sum > 0.0,
            "[WeightVector.repair] cannot renormalize {raw:?} (component sum {sum})");

        Ok(Self(abs.map(|c| c / sum)))
    }

    /// Wrap components without validation.
    #[inline] pub(crate) const fn from_raw(components: [f64; NUM_SIGNALS]) -> Self { Self(components) }

    #[inline] pub fn components(&self) -> &[f64; NUM_SIGNALS] { &self.0 }
    #[inline] pub fn alpha(&self) -> f64 { self.0[0] }
    #[inline] pub fn beta(&self) -> f64 { self.0[1] }
    #[inline] pub fn gamma(&self) -> f64 { self.0[2] }
    #[inline] pub fn delta(&self) -> f64 { self.0[3] }

    /// Sum of the components (1.0 up to rounding).
    #[inline] pub fn sum(&self) -> f64 { self.0.iter().sum() }
}

impl fmt::Display for WeightVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(α={:.4}, β={:.4}, γ={:.4}, δ={:.4})", self.alpha(), self.beta(), self.gamma(), self.delta())
    }
}
