mod dataset;
mod reference;
mod signal;

pub use dataset::Dataset;
pub use signal::SignalMap;
