use std::{fs, path::Path};

use anyhow::{Context, Result};
use hydroswarm::{ModelConfig, SwarmConfig};
use serde::Deserialize;

/// Run configuration file. Every section and field is optional:
///
/// ```toml
/// [swarm]
/// n_particles = 30
/// n_iterations = 150
/// seed = 42
///
/// [model]
/// binding = "documented"
/// floor = 0.3
///
/// [model.coefficients]
/// equity = 0.30
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub swarm: SwarmConfig,
    pub model: ModelConfig,
}

impl RunConfig {
    /// Load configuration from a TOML file at the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("[config] failed to read {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("[config] failed to parse {}", path.display()))
    }
}
