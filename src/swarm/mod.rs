//! Particle swarm search over the weight simplex.

mod config;
mod history;
mod particle;
mod sample;
mod swarm;

pub use config::SwarmConfig;
pub use history::IterationRecord;
pub use swarm::{optimize, Swarm, SwarmOutcome};
