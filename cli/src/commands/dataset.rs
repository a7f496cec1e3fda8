use anyhow::Result;
use hydroswarm::Dataset;

pub fn run(_cli: &crate::cli::Cli) -> Result<()> {
    println!("{}", Dataset::reference()?.to_json_string()?);
    Ok(())
}
