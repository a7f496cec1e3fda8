use serde::Serialize;

use crate::WeightVector;

/// Summary of one completed sweep over the swarm.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct IterationRecord {
    pub iteration: usize,
    /// Global-best fitness after the sweep.
    pub best_fitness: f64,
    /// Mean of the particles' fitness values in this sweep.
    pub mean_fitness: f64,
    /// Population standard deviation of the particles' fitness values in this sweep.
    pub std_fitness: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub delta: f64,
}

impl IterationRecord {
    pub(crate) fn new(iteration: usize, best: &WeightVector, best_fitness: f64, fitness: &[f64]) -> Self {
        let (mean_fitness, std_fitness) = mean_std(fitness);
        Self {
            iteration,
            best_fitness,
            mean_fitness,
            std_fitness,
            alpha: best.alpha(),
            beta: best.beta(),
            gamma: best.gamma(),
            delta: best.delta(),
        }
    }

    /// Global-best weights recorded with this sweep.
    pub fn best_weights(&self) -> WeightVector {
        WeightVector::from_raw([self.alpha, self.beta, self.gamma, self.delta])
    }
}

/// Mean and population (ddof = 0) standard deviation. Zero for an empty sample.
pub(crate) fn mean_std(values: &[f64]) -> (f64, f64) {
    if values.is_empty() { return (0.0, 0.0) }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    (mean, var.sqrt())
}
