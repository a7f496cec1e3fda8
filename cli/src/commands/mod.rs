pub mod dataset;
pub mod optimize;
pub mod rank;

use anyhow::Result;
use hydroswarm::{Dataset, ModelConfig, ScoringModel};
use tracing::info;

use crate::{cli::DataArgs, config::RunConfig};

/// The `--config` file named on the command line, or the defaults.
pub(crate) fn load_config(args: &DataArgs) -> Result<RunConfig> {
    match &args.config {
        Some(path) => RunConfig::load(path),
        None => Ok(RunConfig::default()),
    }
}

/// Load the dataset named on the command line (or the reference data) and build
/// the scoring model, with `--binding` overriding the configured binding.
pub(crate) fn load_model(args: &DataArgs, mut config: ModelConfig) -> Result<ScoringModel> {
    let dataset = match &args.data {
        Some(path) => {
            info!("Loading dataset from {}", path.display());
            Dataset::read_json(path)?
        }
        None => Dataset::reference()?,
    };

    if let Some(binding) = args.binding { config.binding = binding.into(); }

    info!("Scoring {} building types x {} zones ({} binding)",
        dataset.categories().len(), dataset.zones().len(), config.binding);
    ScoringModel::new(&dataset, config)
}
