use std::sync::Arc;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    data::{Dataset, SignalMap},
    normalize::{normalize_intensities, normalize_priorities, DEFAULT_FLOOR},
    objective::{gini, SignalBinding, UtilityCoefficients, UtilityResult},
    WeightVector,
};

/// Settings of the scoring model that are not part of the raw data.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    pub binding: SignalBinding,
    pub coefficients: UtilityCoefficients,
    /// Lower bound for normalized consumption and report intensities.
    pub floor: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            binding: SignalBinding::default(),
            coefficients: UtilityCoefficients::default(),
            floor: DEFAULT_FLOOR,
        }
    }
}

/// Normalized signals for every category and zone, plus the rules that turn a
/// weight vector into heuristic scores and an aggregate utility.
///
/// Built once per run; read-only afterwards.
#[derive(Clone, Debug)]
pub struct ScoringModel {
    categories: Vec<Arc<str>>,
    zones: Vec<Arc<str>>,
    social: SignalMap,
    legal: SignalMap,
    consumption: SignalMap,
    reports: SignalMap,
    config: ModelConfig,
}

impl ScoringModel {
    /// Normalize the dataset's raw signals and validate the model configuration.
    pub fn new(dataset: &Dataset, config: ModelConfig) -> Result<Self> {
        config.coefficients.validate()?;

        Ok(Self {
            categories: dataset.categories().to_vec(),
            zones: dataset.zones().to_vec(),
            social: normalize_priorities(dataset.social()).context("[ScoringModel] social priorities")?,
            legal: normalize_priorities(dataset.legal()).context("[ScoringModel] legal priorities")?,
            consumption: normalize_intensities(dataset.consumption(), config.floor)
                .context("[ScoringModel] consumption intensities")?,
            reports: normalize_intensities(dataset.reports(), config.floor)
                .context("[ScoringModel] report intensities")?,
            config,
        })
    }

    #[inline] pub fn categories(&self) -> &[Arc<str>] { &self.categories }
    #[inline] pub fn zones(&self) -> &[Arc<str>] { &self.zones }
    #[inline] pub fn config(&self) -> &ModelConfig { &self.config }
    #[inline] pub fn binding(&self) -> SignalBinding { self.config.binding }
    #[inline] pub fn coefficients(&self) -> &UtilityCoefficients { &self.config.coefficients }

    /// Normalized social priority per category, in (0, 1].
    #[inline] pub fn social(&self) -> &SignalMap { &self.social }

    /// Normalized legal priority per category, in (0, 1].
    #[inline] pub fn legal(&self) -> &SignalMap { &self.legal }

    /// Normalized consumption per zone, in [floor, 1].
    #[inline] pub fn consumption(&self) -> &SignalMap { &self.consumption }

    /// Normalized report intensity per zone, in [floor, 1].
    #[inline] pub fn reports(&self) -> &SignalMap { &self.reports }

    /// Number of (category, zone) pairs scored by `utility`.
    #[inline] pub fn num_pairs(&self) -> usize { self.categories.len() * self.zones.len() }

    /// Heuristic priority of a (category, zone) pair, by index:
    /// the bound weights times the normalized social, legal, consumption and report signals.
    ///
    /// Panics if either index is out of range.
    pub fn heuristic(&self, weights: &WeightVector, category: usize, zone: usize) -> f64 {
        let w = self.config.binding.resolve(weights);
        w.social * self.social.value(category)
            + w.legal * self.legal.value(category)
            + w.consumption * self.consumption.value(zone)
            + w.reports * self.reports.value(zone)
    }

    /// Heuristic priority of a (category, zone) pair, by name.
    pub fn heuristic_by_name(&self, weights: &WeightVector, category: &str, zone: &str) -> Result<f64> {
        let c = self.social.position(category)
            .with_context(|| format!("[ScoringModel.heuristic] unknown category '{category}'"))?;
        let z = self.consumption.position(zone)
            .with_context(|| format!("[ScoringModel.heuristic] unknown zone '{zone}'"))?;
        Ok(self.heuristic(weights, c, z))
    }

    /// Score a weight vector over the full category × zone cross-product.
    ///
    /// Equity is `100·(1 − gini)` of the heuristic sample. Each signal component is
    /// the share of total heuristic mass attributable to that signal, i.e.
    /// `100·Σ h·s / Σ h`, and is 0 when the heuristic mass is zero. The total is
    /// the coefficient-weighted sum of the five components.
    ///
    /// A non-finite total is reported as an error.
    pub fn utility(&self, weights: &WeightVector) -> Result<UtilityResult> {
        let mut heuristics = Vec::with_capacity(self.num_pairs());
        let (mut social, mut legal, mut consumption, mut reports) = (0.0, 0.0, 0.0, 0.0);

        for c in 0..self.categories.len() {
            for z in 0..self.zones.len() {
                let h = self.heuristic(weights, c, z);
                heuristics.push(h);
                social += h * self.social.value(c);
                legal += h * self.legal.value(c);
                consumption += h * self.consumption.value(z);
                reports += h * self.reports.value(z);
            }
        }

        let mass = heuristics.iter().sum::<f64>();
        let share = |weighted: f64| if mass == 0.0 { 0.0 } else { 100.0 * weighted / mass };

        let gini = gini(&heuristics);
        let equity = 100.0 * (1.0 - gini);
        let (social, legal, consumption, reports) = (share(social), share(legal), share(consumption), share(reports));

        let k = &self.config.coefficients;
        let total = k.equity * equity
            + k.social * social
            + k.legal * legal
            + k.consumption * consumption
            + k.reports * reports;

        ensure!(total.is_finite(), "[ScoringModel.utility] non-finite utility {total} for weights {weights}");

        Ok(UtilityResult { total, equity, social, legal, consumption, reports, gini })
    }
}
