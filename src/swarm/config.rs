use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// Hyperparameters of a swarm run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SwarmConfig {
    /// Number of particles in the swarm.
    pub n_particles: usize,
    /// Number of full sweeps over the swarm. Zero returns the best initial sample.
    pub n_iterations: usize,
    /// Inertia `w`: pull toward the previous velocity.
    #[serde(alias = "w")]
    pub inertia: f64,
    /// Cognitive coefficient `c1`: pull toward the particle's own best.
    #[serde(alias = "c1")]
    pub cognitive: f64,
    /// Social coefficient `c2`: pull toward the swarm's best.
    #[serde(alias = "c2")]
    pub social: f64,
    /// Seed for the run's random generator; `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Standard deviation of the initial Gaussian velocity noise.
    pub velocity_scale: f64,
    /// Emit a progress event every this many iterations (0 disables).
    pub log_every: usize,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            n_particles: 30,
            n_iterations: 150,
            inertia: 0.7,
            cognitive: 1.5,
            social: 1.5,
            seed: None,
            velocity_scale: 0.1,
            log_every: 30,
        }
    }
}

impl SwarmConfig {
    /// Reject configurations the search cannot start from.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.n_particles > 0, "[SwarmConfig] n_particles must be at least 1");
        for (name, value) in [
            ("inertia", self.inertia),
            ("cognitive", self.cognitive),
            ("social", self.social),
            ("velocity_scale", self.velocity_scale),
        ] {
            ensure!(value.is_finite() && value >= 0.0,
                "[SwarmConfig] {name} must be finite and non-negative, got {value}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SwarmConfig;

    #[test]
    fn defaults() {
        let c = SwarmConfig::default();
        assert_eq!((c.n_particles, c.n_iterations), (30, 150));
        assert_eq!((c.inertia, c.cognitive, c.social), (0.7, 1.5, 1.5));
        assert_eq!(c.seed, None);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_empty_swarm_and_bad_coefficients() {
        assert!(SwarmConfig { n_particles: 0, ..Default::default() }.validate().is_err());
        assert!(SwarmConfig { inertia: f64::NAN, ..Default::default() }.validate().is_err());
        assert!(SwarmConfig { social: -1.0, ..Default::default() }.validate().is_err());
        assert!(SwarmConfig { n_iterations: 0, ..Default::default() }.validate().is_ok());
    }

    #[test]
    fn partial_json_uses_defaults() {
        let c: SwarmConfig = serde_json::from_str(r#"{"n_particles": 5, "seed": 7}"#).unwrap();
        assert_eq!(c.n_particles, 5);
        assert_eq!(c.seed, Some(7));
        assert_eq!(c.n_iterations, 150);
    }

    #[test]
    fn accepts_short_coefficient_names() {
        let c: SwarmConfig = serde_json::from_str(r#"{"w": 0.2, "c1": 0.0, "c2": 3.0}"#).unwrap();
        assert_eq!((c.inertia, c.cognitive, c.social), (0.2, 0.0, 3.0));
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(serde_json::from_str::<SwarmConfig>(r#"{"n_particle": 3}"#).is_err());
    }
}
