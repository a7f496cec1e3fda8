use anyhow::Result;
use hydroswarm::{optimize, Report, SwarmConfig};

use crate::{cli::OptimizeArgs, commands::{load_config, load_model}};

/// Command-line flags take precedence over the config file, which takes
/// precedence over the defaults.
fn swarm_config(args: &OptimizeArgs, base: SwarmConfig) -> SwarmConfig {
    SwarmConfig {
        n_particles: args.particles.unwrap_or(base.n_particles),
        n_iterations: args.iterations.unwrap_or(base.n_iterations),
        inertia: args.inertia.unwrap_or(base.inertia),
        cognitive: args.cognitive.unwrap_or(base.cognitive),
        social: args.social.unwrap_or(base.social),
        seed: args.seed.or(base.seed),
        ..base
    }
}

pub fn run(_cli: &crate::cli::Cli, args: &OptimizeArgs) -> Result<()> {
    let config = load_config(&args.data)?;

    let model = load_model(&args.data, config.model)?;
    let swarm = swarm_config(args, config.swarm);

    let outcome = optimize(&model, swarm)?;

    let mut report = Report::from_outcome(&model, &outcome);
    if args.history { report = report.with_history(outcome.history); }

    if args.data.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }

    Ok(())
}
