use std::fmt;

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// Fixed mixing coefficients of the five utility components.
///
/// Defaults are 30% equity, 25% social, 25% legal, 10% consumption, 10% reports.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UtilityCoefficients {
    pub equity: f64,
    pub social: f64,
    pub legal: f64,
    pub consumption: f64,
    pub reports: f64,
}

impl Default for UtilityCoefficients {
    fn default() -> Self {
        Self { equity: 0.30, social: 0.25, legal: 0.25, consumption: 0.10, reports: 0.10 }
    }
}

impl UtilityCoefficients {
    /// Coefficients in component order: equity, social, legal, consumption, reports.
    #[inline]
    pub fn as_array(&self) -> [f64; 5] {
        [self.equity, self.social, self.legal, self.consumption, self.reports]
    }

    /// Check every coefficient is non-negative and that they sum to 1, which keeps
    /// the total utility inside [0, 100].
    pub fn validate(&self) -> Result<()> {
        let coefficients = self.as_array();
        ensure!(coefficients.iter().all(|&c| c.is_finite() && c >= 0.0),
            "[UtilityCoefficients] coefficients must be finite and non-negative, got {coefficients:?}");
        let sum = coefficients.iter().sum::<f64>();
        ensure!((sum - 1.0).abs() <= 1e-9, "[UtilityCoefficients] coefficients must sum to 1, got {sum}");
        Ok(())
    }
}

/// Utility of one weight vector, with its component breakdown. All scores are on a
/// 0–100 scale; `gini` is the raw dispersion behind `equity`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct UtilityResult {
    pub total: f64,
    pub equity: f64,
    pub social: f64,
    pub legal: f64,
    pub consumption: f64,
    pub reports: f64,
    pub gini: f64,
}

impl fmt::Display for UtilityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "utility {:.2} (equity={:.2} social={:.2} legal={:.2} consumption={:.2} reports={:.2} gini={:.4})",
            self.total, self.equity, self.social, self.legal, self.consumption, self.reports, self.gini)
    }
}

#[cfg(test)]
mod tests {
    use super::UtilityCoefficients;

    #[test]
    fn default_coefficients_are_valid() {
        let c = UtilityCoefficients::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.equity, 0.30);
        assert_eq!(c.social, 0.25);
    }

    #[test]
    fn rejects_bad_coefficients() {
        let c = UtilityCoefficients { equity: 0.5, ..Default::default() };
        assert!(c.validate().is_err());
        let c = UtilityCoefficients { equity: -0.1, social: 0.65, ..Default::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_unknown_coefficient_names() {
        assert!(serde_json::from_str::<UtilityCoefficients>(r#"{"equality": 0.3}"#).is_err());
        let c: UtilityCoefficients = serde_json::from_str(r#"{"equity": 0.4, "social": 0.15}"#).unwrap();
        assert_eq!((c.equity, c.social, c.legal), (0.4, 0.15, 0.25));
    }
}
