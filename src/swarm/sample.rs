use std::f64::consts::PI;

use rand::{distr::Open01, Rng};

use crate::weights::{WeightVector, NUM_SIGNALS};

/// Draw from the symmetric Dirichlet(1, 1, 1, 1) distribution (uniform over the simplex).
///
/// Draws four Exp(1) variates as `-ln U` with `U` in (0, 1), then divides by their
/// sum. Every component is strictly positive.
pub(crate) fn uniform_simplex<R: Rng + ?Sized>(rng: &mut R) -> WeightVector {
    let mut draws = [0.0; NUM_SIGNALS];
    for d in draws.iter_mut() {
        let u: f64 = rng.sample(Open01);
        *d = -u.ln();
    }
    let sum = draws.iter().sum::<f64>();
    WeightVector::from_raw(draws.map(|d| d / sum))
}

/// Draw one standard normal variate with the Box–Muller transform, consuming two
/// uniforms (the cosine branch only).
pub(crate) fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u1: f64 = rng.sample(Open01);
    let u2: f64 = rng.random();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

/// Independent zero-mean Gaussian noise with standard deviation `scale` per component.
pub(crate) fn gaussian_velocity<R: Rng + ?Sized>(rng: &mut R, scale: f64) -> [f64; NUM_SIGNALS] {
    let mut velocity = [0.0; NUM_SIGNALS];
    for v in velocity.iter_mut() {
        *v = scale * standard_normal(rng);
    }
    velocity
}
