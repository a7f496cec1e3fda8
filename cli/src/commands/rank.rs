use anyhow::{ensure, Result};
use hydroswarm::{Report, WeightVector};

use crate::{cli::RankArgs, commands::{load_config, load_model}};

/// Score the given weights under the configured model.
fn build_report(args: &RankArgs) -> Result<Report> {
    ensure!(args.weights.len() == 4, "[rank] expected 4 weights (α,β,γ,δ), got {}", args.weights.len());
    let weights = WeightVector::repair([args.weights[0], args.weights[1], args.weights[2], args.weights[3]])?;

    let model = load_model(&args.data, load_config(&args.data)?.model)?;
    Report::for_weights(&model, weights)
}

pub fn run(_cli: &crate::cli::Cli, args: &RankArgs) -> Result<()> {
    let report = build_report(args)?;

    if args.data.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }

    Ok(())
}
