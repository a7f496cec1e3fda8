use anyhow::{Context, Result};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info};

use crate::{
    objective::{ScoringModel, UtilityResult},
    swarm::{
        particle::Particle,
        sample::{gaussian_velocity, uniform_simplex},
        IterationRecord, SwarmConfig,
    },
    WeightVector,
};

/// Result of a completed swarm run.
#[derive(Clone, Debug)]
pub struct SwarmOutcome {
    /// Best weight vector found.
    pub best: WeightVector,
    /// Full utility breakdown at `best`.
    pub result: UtilityResult,
    /// One record per iteration, in order.
    pub history: Vec<IterationRecord>,
}

/// A population of candidate weight vectors searching the simplex for maximum utility.
///
/// All randomness comes from the single generator handed to `new`, drawn in a fixed
/// order: the Dirichlet sample of every particle (by index), then the initial velocity
/// noise of every particle (by index), then per iteration and per particle `r1`
/// followed by `r2`. The same seed therefore replays the same run bit-for-bit.
///
/// The global best is updated as soon as any particle improves on it, so particles
/// later in a sweep are already attracted to improvements found earlier in that sweep.
pub struct Swarm<'m, R: Rng> {
    model: &'m ScoringModel,
    config: SwarmConfig,
    rng: R,
    particles: Vec<Particle>,
    global_best: WeightVector,
    global_best_fitness: f64,
    global_best_result: UtilityResult,
    history: Vec<IterationRecord>,
}

impl<'m, R: Rng> Swarm<'m, R> {
    /// Sample and evaluate the initial swarm.
    ///
    /// Each particle starts at a uniform draw from the simplex with small Gaussian
    /// velocity noise, and is its own personal best. The global best is the first
    /// particle with the highest initial fitness.
    pub fn new(model: &'m ScoringModel, config: SwarmConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        let n = config.n_particles;

        let positions = (0..n).map(|_| uniform_simplex(&mut rng)).collect::<Vec<_>>();
        let velocities = (0..n).map(|_| gaussian_velocity(&mut rng, config.velocity_scale)).collect::<Vec<_>>();

        let mut particles = Vec::with_capacity(n);
        let mut results = Vec::with_capacity(n);
        for (position, velocity) in positions.into_iter().zip(velocities) {
            let result = model.utility(&position)?;
            particles.push(Particle::new(position, velocity, result.total));
            results.push(result);
        }

        let best = (1..n).fold(0, |best, i| if results[i].total > results[best].total { i } else { best });

        Ok(Self {
            model,
            config,
            rng,
            global_best: particles[best].position,
            global_best_fitness: results[best].total,
            global_best_result: results[best],
            particles,
            history: Vec::with_capacity(config.n_iterations),
        })
    }

    #[inline] pub fn config(&self) -> &SwarmConfig { &self.config }
    #[inline] pub fn num_particles(&self) -> usize { self.particles.len() }
    #[inline] pub fn global_best(&self) -> &WeightVector { &self.global_best }
    #[inline] pub fn global_best_fitness(&self) -> f64 { self.global_best_fitness }
    #[inline] pub fn history(&self) -> &[IterationRecord] { &self.history }

    /// Run all iterations and return the best vector found with its history.
    pub fn run(mut self) -> Result<SwarmOutcome> {
        info!("Starting swarm search: {} particles, {} iterations, w={} c1={} c2={}",
            self.config.n_particles, self.config.n_iterations,
            self.config.inertia, self.config.cognitive, self.config.social);

        for iteration in 0..self.config.n_iterations {
            self.sweep(iteration)?;

            let fitness = self.particles.iter().map(|p| p.fitness).collect::<Vec<_>>();
            let record = IterationRecord::new(iteration, &self.global_best, self.global_best_fitness, &fitness);

            let last = iteration + 1 == self.config.n_iterations;
            let log_due = self.config.log_every > 0 && iteration % self.config.log_every == 0;
            if log_due || last {
                info!("Iter {:3} | best {:6.2} | mean {:6.2} | std {:5.2}",
                    iteration, record.best_fitness, record.mean_fitness, record.std_fitness);
            }

            self.history.push(record);
        }

        info!("Swarm search finished: best {} at {}", self.global_best_result, self.global_best);

        Ok(SwarmOutcome {
            best: self.global_best,
            result: self.global_best_result,
            history: self.history,
        })
    }

    /// Move every particle once, in index order.
    fn sweep(&mut self, iteration: usize) -> Result<()> {
        let SwarmConfig { inertia, cognitive, social, .. } = self.config;

        for i in 0..self.particles.len() {
            let r1: f64 = self.rng.random();
            let r2: f64 = self.rng.random();

            let particle = &mut self.particles[i];
            let raw = particle.advance(&self.global_best, inertia, cognitive, social, r1, r2);
            let position = WeightVector::repair(raw)
                .with_context(|| format!("[Swarm] particle {i} left the simplex at iteration {iteration}"))?;

            let result = self.model.utility(&position)?;
            if particle.settle(position, result.total) && result.total > self.global_best_fitness {
                debug!("Iter {iteration}: particle {i} improved global best {:.6} -> {:.6}",
                    self.global_best_fitness, result.total);
                self.global_best = position;
                self.global_best_fitness = result.total;
                self.global_best_result = result;
            }
        }

        Ok(())
    }
}

/// Run a full search with a generator seeded from `config.seed` (or OS entropy).
pub fn optimize(model: &ScoringModel, config: SwarmConfig) -> Result<SwarmOutcome> {
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    Swarm::new(model, config, rng)?.run()
}
