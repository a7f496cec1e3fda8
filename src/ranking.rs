//! Independent priority rankings of categories and zones for a fixed weight vector.

use serde::Serialize;

use crate::{objective::ScoringModel, WeightVector};

/// One row of a priority ranking.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankEntry {
    /// 1-based position, 1 = highest priority.
    pub rank: usize,
    pub name: String,
    /// Mean heuristic score across the other dimension.
    pub priority: f64,
}

/// Sort by descending priority (ties keep input order) and assign ranks.
fn rank(scores: Vec<(String, f64)>) -> Vec<RankEntry> {
    let mut scores = scores;
    scores.sort_by(|a, b| b.1.total_cmp(&a.1));
    scores.into_iter().enumerate()
        .map(|(i, (name, priority))| RankEntry { rank: i + 1, name, priority })
        .collect()
}

/// Rank categories by their mean heuristic over all zones.
pub fn rank_categories(model: &ScoringModel, weights: &WeightVector) -> Vec<RankEntry> {
    let zones = model.zones().len();
    rank(model.categories().iter().enumerate()
        .map(|(c, name)| {
            let total = (0..zones).map(|z| model.heuristic(weights, c, z)).sum::<f64>();
            (name.to_string(), total / zones as f64)
        })
        .collect())
}

/// Rank zones by their mean heuristic over all categories.
pub fn rank_zones(model: &ScoringModel, weights: &WeightVector) -> Vec<RankEntry> {
    let categories = model.categories().len();
    rank(model.zones().iter().enumerate()
        .map(|(z, name)| {
            let total = (0..categories).map(|c| model.heuristic(weights, c, z)).sum::<f64>();
            (name.to_string(), total / categories as f64)
        })
        .collect())
}
