use crate::{weights::NUM_SIGNALS, WeightVector};

/// One candidate weight vector in flight, with its velocity and personal best.
#[derive(Clone, Debug)]
pub(crate) struct Particle {
    pub position: WeightVector,
    /// Unconstrained; the position is repaired after each move instead.
    pub velocity: [f64; NUM_SIGNALS],
    /// Fitness at the current position.
    pub fitness: f64,
    pub best_position: WeightVector,
    pub best_fitness: f64,
}

impl Particle {
    /// A particle whose personal best is its starting point.
    pub fn new(position: WeightVector, velocity: [f64; NUM_SIGNALS], fitness: f64) -> Self {
        Self { position, velocity, fitness, best_position: position, best_fitness: fitness }
    }

    /// Classic PSO velocity update followed by the unconstrained position step:
    ///
    /// ```text
    /// v ← w·v + c1·r1·(pbest − x) + c2·r2·(gbest − x)
    /// x ← x + v
    /// ```
    ///
    /// Returns the raw (possibly off-simplex) new position.
    pub fn advance(
        &mut self,
        global_best: &WeightVector,
        inertia: f64,
        cognitive: f64,
        social: f64,
        r1: f64,
        r2: f64,
    ) -> [f64; NUM_SIGNALS] {
        let x = self.position.components();
        let pbest = self.best_position.components();
        let gbest = global_best.components();

        let mut raw = [0.0; NUM_SIGNALS];
        for d in 0..NUM_SIGNALS {
            self.velocity[d] = inertia * self.velocity[d]
                + cognitive * r1 * (pbest[d] - x[d])
                + social * r2 * (gbest[d] - x[d]);
            raw[d] = x[d] + self.velocity[d];
        }
        raw
    }

    /// Record a newly evaluated position. Returns true when it improves the personal best.
    pub fn settle(&mut self, position: WeightVector, fitness: f64) -> bool {
        self.position = position;
        self.fitness = fitness;
        if fitness > self.best_fitness {
            self.best_position = position;
            self.best_fitness = fitness;
            true
        } else {
            false
        }
    }
}
