//! Presentation-ready summary of a finished run.

use std::fmt;

use serde::Serialize;

use crate::{
    objective::{ScoringModel, SignalBinding, UtilityCoefficients, UtilityResult},
    ranking::{rank_categories, rank_zones, RankEntry},
    swarm::{IterationRecord, SwarmOutcome},
    WeightVector,
};

/// Best weights, their utility breakdown, and the priority rankings they induce.
#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub weights: WeightVector,
    pub binding: SignalBinding,
    pub coefficients: UtilityCoefficients,
    pub utility: UtilityResult,
    pub zones: Vec<RankEntry>,
    pub categories: Vec<RankEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<IterationRecord>>,
}

impl Report {
    /// Summarize a weight vector that has not come out of a swarm run.
    pub fn for_weights(model: &ScoringModel, weights: WeightVector) -> anyhow::Result<Self> {
        Ok(Self {
            utility: model.utility(&weights)?,
            zones: rank_zones(model, &weights),
            categories: rank_categories(model, &weights),
            binding: model.binding(),
            coefficients: *model.coefficients(),
            weights,
            history: None,
        })
    }

    /// Summarize a swarm run (the history is left out; see `with_history`).
    pub fn from_outcome(model: &ScoringModel, outcome: &SwarmOutcome) -> Self {
        Self {
            weights: outcome.best,
            binding: model.binding(),
            coefficients: *model.coefficients(),
            utility: outcome.result,
            zones: rank_zones(model, &outcome.best),
            categories: rank_categories(model, &outcome.best),
            history: None,
        }
    }

    /// Attach the per-iteration history.
    pub fn with_history(mut self, history: Vec<IterationRecord>) -> Self {
        self.history = Some(history);
        self
    }
}

fn write_table(f: &mut fmt::Formatter<'_>, header: &str, entries: &[RankEntry]) -> fmt::Result {
    let width = entries.iter().map(|e| e.name.chars().count()).max().unwrap_or(0).max(header.len());
    writeln!(f, "  {:>4}  {:<width$}  {:>8}", "Rank", header, "Priority")?;
    for entry in entries {
        writeln!(f, "  {:>4}  {:<width$}  {:>8.4}", entry.rank, entry.name, entry.priority)?;
    }
    Ok(())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(72);
        writeln!(f, "{rule}")?;
        writeln!(f, "OPTIMIZATION RESULTS")?;
        writeln!(f, "{rule}")?;

        writeln!(f, "\nOptimal heuristic weights ({} binding)", self.binding)?;
        let symbols = ["α", "β", "γ", "δ"];
        for ((symbol, signal), weight) in symbols.iter().zip(self.binding.signal_names()).zip(self.weights.components()) {
            writeln!(f, "  {:<18} = {:.4}", format!("{symbol} ({signal})"), weight)?;
        }
        writeln!(f, "  {:<18} = {:.4}", "sum", self.weights.sum())?;

        writeln!(f, "\nTotal utility: {:6.2} / 100", self.utility.total)?;

        let k = &self.coefficients;
        let pct = |c: f64| format!("{:.0}%", 100.0 * c);
        writeln!(f, "\nUtility components")?;
        writeln!(f, "  {:<28} {:6.2}/100", format!("Equity ({})", pct(k.equity)), self.utility.equity)?;
        writeln!(f, "  {:<28} {:.4}", "Gini coefficient", self.utility.gini)?;
        writeln!(f, "  {:<28} {:6.2}/100", format!("Social ({})", pct(k.social)), self.utility.social)?;
        writeln!(f, "  {:<28} {:6.2}/100", format!("Legal ({})", pct(k.legal)), self.utility.legal)?;
        writeln!(f, "  {:<28} {:6.2}/100", format!("Consumption ({})", pct(k.consumption)), self.utility.consumption)?;
        writeln!(f, "  {:<28} {:6.2}/100", format!("Reports ({})", pct(k.reports)), self.utility.reports)?;

        let order = |entries: &[RankEntry]| entries.iter().map(|e| e.name.as_str()).collect::<Vec<_>>().join(" → ");
        writeln!(f, "\nPriority by zone:\n  {}", order(&self.zones))?;
        writeln!(f, "\nPriority by building type:\n  {}", order(&self.categories))?;

        writeln!(f, "\nZones")?;
        write_table(f, "Zone", &self.zones)?;
        writeln!(f, "\nBuilding types")?;
        write_table(f, "Building type", &self.categories)?;

        if let Some(history) = &self.history {
            writeln!(f, "\nHistory ({} iterations)", history.len())?;
            for r in history {
                writeln!(f, "  Iter {:3} | best {:6.2} | mean {:6.2} | std {:5.2} | {}",
                    r.iteration, r.best_fitness, r.mean_fitness, r.std_fitness, r.best_weights())?;
            }
        }

        Ok(())
    }
}
