#![doc = "HydroSwarm public API"]
mod data;
mod normalize;
mod objective;
mod ranking;
mod report;
mod swarm;
mod weights;

#[doc(inline)]
pub use data::{Dataset, SignalMap};

#[doc(inline)]
pub use normalize::{normalize_intensities, normalize_priorities, DEFAULT_FLOOR};

#[doc(inline)]
pub use objective::{gini, ModelConfig, ScoringModel, SignalBinding, UtilityCoefficients, UtilityResult};

#[doc(inline)]
pub use ranking::{rank_categories, rank_zones, RankEntry};

#[doc(inline)]
pub use report::Report;

#[doc(inline)]
pub use swarm::{optimize, IterationRecord, Swarm, SwarmConfig, SwarmOutcome};

#[doc(inline)]
pub use weights::{WeightVector, NUM_SIGNALS};
