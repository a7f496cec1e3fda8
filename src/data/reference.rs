use anyhow::Result;

use crate::data::{Dataset, SignalMap};

/// Building types, in ranking-table order.
const CATEGORIES: [&str; 7] = [
    "Hospital",
    "Private Clinics",
    "Schools",
    "Houses",
    "Government Offices",
    "Shops",
    "Shopping Centers",
];

/// Neighborhoods of the Gustavo A. Madero borough covered by the survey.
const ZONES: [&str; 7] = [
    "Capultitlán",
    "Villa GAM",
    "Residencial Zacatenco",
    "Tepeyac Insurgentes",
    "Lindavista I",
    "Magdalena de las Salinas",
    "Lindavista II",
];

/// Citizen survey priority, 1..=7 (7 = most important).
const SOCIAL: [f64; 7] = [7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];

/// Legal-mandate priority, 1..=3 (3 = most important), per the national water law
/// and Mexico City regulations.
const LEGAL: [f64; 7] = [3.0, 3.0, 1.0, 3.0, 1.0, 2.0, 2.0];

/// Historical consumption rank, 1..=7.
const CONSUMPTION: [f64; 7] = [6.0, 5.0, 2.0, 1.0, 3.0, 7.0, 4.0];

/// Fault-report rank, 1..=7.
const REPORTS: [f64; 7] = [1.0, 2.0, 7.0, 4.0, 5.0, 3.0, 6.0];

impl Dataset {
    /// The built-in reference dataset: seven building types by seven neighborhoods.
    pub fn reference() -> Result<Self> {
        Self::new(
            CATEGORIES.iter().map(|s| s.to_string()).collect(),
            ZONES.iter().map(|s| s.to_string()).collect(),
            SignalMap::from_pairs(CATEGORIES.into_iter().zip(SOCIAL))?,
            SignalMap::from_pairs(CATEGORIES.into_iter().zip(LEGAL))?,
            SignalMap::from_pairs(ZONES.into_iter().zip(CONSUMPTION))?,
            SignalMap::from_pairs(ZONES.into_iter().zip(REPORTS))?,
        )
    }
}
