//! The utility surface searched by the swarm: per-pair heuristic scores and their
//! aggregation into equity plus four signal-attention components.

mod binding;
mod gini;
mod model;
mod utility;

pub use binding::SignalBinding;
pub use gini::gini;
pub use model::{ModelConfig, ScoringModel};
pub use utility::{UtilityCoefficients, UtilityResult};
