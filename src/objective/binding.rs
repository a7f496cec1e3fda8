use std::{fmt, str::FromStr};

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::WeightVector;

/// How the components of a `WeightVector` attach to the four priority signals.
///
/// γ always governs consumption and δ always governs fault reports; the two
/// variants differ only in which of α/β multiplies the legal signal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalBinding {
    /// α → legal mandate, β → social preference.
    #[default]
    Documented,
    /// α → social preference, β → legal mandate.
    Positional,
}

/// Per-signal multipliers resolved from a weight vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SignalWeights {
    pub social: f64,
    pub legal: f64,
    pub consumption: f64,
    pub reports: f64,
}

impl SignalBinding {
    /// Resolve which component multiplies which signal.
    #[inline]
    pub(crate) fn resolve(&self, weights: &WeightVector) -> SignalWeights {
        let (social, legal) = match self {
            SignalBinding::Documented => (weights.beta(), weights.alpha()),
            SignalBinding::Positional => (weights.alpha(), weights.beta()),
        };
        SignalWeights { social, legal, consumption: weights.gamma(), reports: weights.delta() }
    }

    /// Signal name governed by each of α, β, γ, δ.
    pub fn signal_names(&self) -> [&'static str; 4] {
        match self {
            SignalBinding::Documented => ["legal", "social", "consumption", "reports"],
            SignalBinding::Positional => ["social", "legal", "consumption", "reports"],
        }
    }
}

impl fmt::Display for SignalBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalBinding::Documented => write!(f, "documented"),
            SignalBinding::Positional => write!(f, "positional"),
        }
    }
}

impl FromStr for SignalBinding {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "documented" => Ok(SignalBinding::Documented),
            "positional" => Ok(SignalBinding::Positional),
            other => bail!("unknown signal binding '{other}' (expected 'documented' or 'positional')"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_puts_alpha_on_legal() {
        let w = WeightVector::new([0.4, 0.3, 0.2, 0.1]).unwrap();
        let s = SignalBinding::Documented.resolve(&w);
        assert_eq!((s.legal, s.social, s.consumption, s.reports), (0.4, 0.3, 0.2, 0.1));
    }

    #[test]
    fn positional_puts_alpha_on_social() {
        let w = WeightVector::new([0.4, 0.3, 0.2, 0.1]).unwrap();
        let s = SignalBinding::Positional.resolve(&w);
        assert_eq!((s.social, s.legal, s.consumption, s.reports), (0.4, 0.3, 0.2, 0.1));
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Positional".parse::<SignalBinding>().unwrap(), SignalBinding::Positional);
        assert_eq!("documented".parse::<SignalBinding>().unwrap(), SignalBinding::Documented);
        assert!("legal-first".parse::<SignalBinding>().is_err());
    }
}
