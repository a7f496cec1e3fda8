use std::path::PathBuf;

use hydroswarm::SignalBinding;

/// Water-distribution priority weight search (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "hydroswarm", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Search for the weight vector with the highest utility
    Optimize(OptimizeArgs),

    /// Rank zones and building types for a given weight vector
    Rank(RankArgs),

    /// Print the built-in reference dataset as JSON (a template for --data)
    Dataset,
}

/// Weight-to-signal binding for α and β.
#[derive(Copy, Clone, Eq, PartialEq, Debug, clap::ValueEnum)]
pub enum BindingArg {
    /// α → legal, β → social
    Documented,
    /// α → social, β → legal
    Positional,
}

impl From<BindingArg> for SignalBinding {
    fn from(arg: BindingArg) -> Self {
        match arg {
            BindingArg::Documented => SignalBinding::Documented,
            BindingArg::Positional => SignalBinding::Positional,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct DataArgs {
    /// Dataset JSON file, defaults to the built-in reference data
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub data: Option<PathBuf>,

    /// TOML run configuration (swarm and model settings)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Weight-to-signal binding, overrides the config file
    #[arg(long, value_enum)]
    pub binding: Option<BindingArg>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct OptimizeArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Number of particles
    #[arg(long)]
    pub particles: Option<usize>,

    /// Number of iterations
    #[arg(long)]
    pub iterations: Option<usize>,

    /// Inertia coefficient (w)
    #[arg(long)]
    pub inertia: Option<f64>,

    /// Cognitive coefficient (c1)
    #[arg(long)]
    pub cognitive: Option<f64>,

    /// Social coefficient (c2)
    #[arg(long)]
    pub social: Option<f64>,

    /// Random seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Include the per-iteration history in the report
    #[arg(long)]
    pub history: bool,
}

#[derive(clap::Args, Debug)]
pub struct RankArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Comma-separated α,β,γ,δ (renormalized onto the simplex)
    #[arg(short, long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
    pub weights: Vec<f64>,
}
