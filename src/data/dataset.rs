use std::{collections::HashMap, fs, path::Path, sync::Arc};

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::SignalMap;

/// Raw inputs for one optimization run: the building-type and neighborhood
/// identifier sets plus the four raw signal maps keyed by them.
///
/// The category and zone lists define enumeration order. Every raw map is
/// re-keyed into that order on construction.
#[derive(Clone, Debug)]
pub struct Dataset {
    categories: Vec<Arc<str>>,
    zones: Vec<Arc<str>>,
    social: SignalMap,
    legal: SignalMap,
    consumption: SignalMap,
    reports: SignalMap,
}

/// On-disk JSON layout of a dataset.
#[derive(Debug, Deserialize)]
struct DatasetFile {
    categories: Vec<String>,
    zones: Vec<String>,
    social: HashMap<String, f64>,
    legal: HashMap<String, f64>,
    consumption: HashMap<String, f64>,
    reports: HashMap<String, f64>,
}

/// Borrowed form of [`DatasetFile`] for writing, with maps in identifier order.
#[derive(Serialize)]
struct DatasetFileRef<'a> {
    categories: Vec<&'a str>,
    zones: Vec<&'a str>,
    social: &'a SignalMap,
    legal: &'a SignalMap,
    consumption: &'a SignalMap,
    reports: &'a SignalMap,
}

/// Re-key `raw` so its order follows `ids`, checking both key sets are identical.
fn align(name: &str, ids: &[Arc<str>], raw: &SignalMap) -> Result<SignalMap> {
    ensure!(raw.len() == ids.len(),
        "[Dataset] '{name}' has {} entries, expected {}", raw.len(), ids.len());

    let mut aligned = SignalMap::new();
    for id in ids {
        let value = raw.get(id)
            .with_context(|| format!("[Dataset] '{name}' is missing an entry for '{id}'"))?;
        ensure!(value.is_finite(), "[Dataset] '{name}' value for '{id}' is not finite ({value})");
        aligned.insert(id, value)?;
    }

    Ok(aligned)
}

impl Dataset {
    /// Build a dataset from identifier lists and raw maps, validating that each map
    /// covers exactly its identifier set with finite values.
    pub fn new(
        categories: Vec<String>,
        zones: Vec<String>,
        social: SignalMap,
        legal: SignalMap,
        consumption: SignalMap,
        reports: SignalMap,
    ) -> Result<Self> {
        ensure!(!categories.is_empty(), "[Dataset] at least one category is required");
        ensure!(!zones.is_empty(), "[Dataset] at least one zone is required");

        let categories = categories.into_iter().map(Arc::from).collect::<Vec<Arc<str>>>();
        let zones = zones.into_iter().map(Arc::from).collect::<Vec<Arc<str>>>();

        // Duplicate identifiers surface here as duplicate keys.
        SignalMap::from_pairs(categories.iter().map(|c| (c, 0.0)))
            .context("[Dataset] category list contains duplicates")?;
        SignalMap::from_pairs(zones.iter().map(|z| (z, 0.0)))
            .context("[Dataset] zone list contains duplicates")?;

        Ok(Self {
            social: align("social", &categories, &social)?,
            legal: align("legal", &categories, &legal)?,
            consumption: align("consumption", &zones, &consumption)?,
            reports: align("reports", &zones, &reports)?,
            categories,
            zones,
        })
    }

    /// Parse a dataset from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: DatasetFile = serde_json::from_str(json).context("[Dataset] invalid dataset JSON")?;

        // JSON object order is not meaningful; the identifier lists decide it.
        let ordered = |name: &str, ids: &[String], raw: &HashMap<String, f64>| -> Result<SignalMap> {
            ensure!(raw.len() == ids.len(),
                "[Dataset] '{name}' has {} entries, expected {}", raw.len(), ids.len());
            SignalMap::from_pairs(ids.iter()
                .map(|id| raw.get(id).map(|&v| (id, v))
                    .with_context(|| format!("[Dataset] '{name}' is missing an entry for '{id}'")))
                .collect::<Result<Vec<_>>>()?)
        };

        let social = ordered("social", &file.categories, &file.social)?;
        let legal = ordered("legal", &file.categories, &file.legal)?;
        let consumption = ordered("consumption", &file.zones, &file.consumption)?;
        let reports = ordered("reports", &file.zones, &file.reports)?;

        Self::new(file.categories, file.zones, social, legal, consumption, reports)
    }

    /// Read a dataset from a JSON file.
    pub fn read_json(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("[Dataset] failed to read {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("[Dataset] failed to load {}", path.display()))
    }

    /// Serialize this dataset to pretty-printed JSON (the format read by `from_json_str`).
    ///
    /// Map entries are written in identifier order, so the output is stable.
    pub fn to_json_string(&self) -> Result<String> {
        let file = DatasetFileRef {
            categories: self.categories.iter().map(|c| c.as_ref()).collect(),
            zones: self.zones.iter().map(|z| z.as_ref()).collect(),
            social: &self.social,
            legal: &self.legal,
            consumption: &self.consumption,
            reports: &self.reports,
        };

        Ok(serde_json::to_string_pretty(&file)?)
    }

    #[inline] pub fn categories(&self) -> &[Arc<str>] { &self.categories }
    #[inline] pub fn zones(&self) -> &[Arc<str>] { &self.zones }

    /// Raw social (survey) priority per category.
    #[inline] pub fn social(&self) -> &SignalMap { &self.social }

    /// Raw legal-mandate priority per category.
    #[inline] pub fn legal(&self) -> &SignalMap { &self.legal }

    /// Raw historical consumption per zone.
    #[inline] pub fn consumption(&self) -> &SignalMap { &self.consumption }

    /// Raw fault-report intensity per zone.
    #[inline] pub fn reports(&self) -> &SignalMap { &self.reports }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> Dataset {
        Dataset::new(
            vec!["A".into(), "B".into()],
            vec!["X".into(), "Y".into()],
            SignalMap::from_pairs([("A", 1.0), ("B", 2.0)]).unwrap(),
            SignalMap::from_pairs([("B", 1.0), ("A", 3.0)]).unwrap(),
            SignalMap::from_pairs([("X", 10.0), ("Y", 20.0)]).unwrap(),
            SignalMap::from_pairs([("X", 5.0), ("Y", 5.0)]).unwrap(),
        ).unwrap()
    }

    #[test]
    fn raw_maps_follow_identifier_order() {
        let data = tiny();
        let keys = data.legal().keys().iter().map(|k| k.as_ref()).collect::<Vec<_>>();
        assert_eq!(keys, ["A", "B"]);
        assert_eq!(data.legal().values(), &[3.0, 1.0]);
    }

    #[test]
    fn rejects_missing_and_extra_keys() {
        let missing = Dataset::new(
            vec!["A".into(), "B".into()],
            vec!["X".into()],
            SignalMap::from_pairs([("A", 1.0), ("C", 2.0)]).unwrap(),
            SignalMap::from_pairs([("A", 1.0), ("B", 2.0)]).unwrap(),
            SignalMap::from_pairs([("X", 1.0)]).unwrap(),
            SignalMap::from_pairs([("X", 1.0)]).unwrap(),
        );
        assert!(missing.is_err());

        let extra = Dataset::new(
            vec!["A".into()],
            vec!["X".into()],
            SignalMap::from_pairs([("A", 1.0), ("B", 2.0)]).unwrap(),
            SignalMap::from_pairs([("A", 1.0)]).unwrap(),
            SignalMap::from_pairs([("X", 1.0)]).unwrap(),
            SignalMap::from_pairs([("X", 1.0)]).unwrap(),
        );
        assert!(extra.is_err());
    }

    #[test]
    fn rejects_empty_sets_and_duplicates() {
        let empty = Dataset::new(vec![], vec!["X".into()], SignalMap::new(), SignalMap::new(),
            SignalMap::from_pairs([("X", 1.0)]).unwrap(), SignalMap::from_pairs([("X", 1.0)]).unwrap());
        assert!(empty.is_err());

        let dup = Dataset::new(vec!["A".into(), "A".into()], vec!["X".into()],
            SignalMap::from_pairs([("A", 1.0)]).unwrap(), SignalMap::from_pairs([("A", 1.0)]).unwrap(),
            SignalMap::from_pairs([("X", 1.0)]).unwrap(), SignalMap::from_pairs([("X", 1.0)]).unwrap());
        assert!(dup.is_err());
    }

    #[test]
    fn rejects_non_finite_values() {
        let nan = Dataset::new(vec!["A".into()], vec!["X".into()],
            SignalMap::from_pairs([("A", f64::NAN)]).unwrap(), SignalMap::from_pairs([("A", 1.0)]).unwrap(),
            SignalMap::from_pairs([("X", 1.0)]).unwrap(), SignalMap::from_pairs([("X", 1.0)]).unwrap());
        assert!(nan.is_err());
    }

    #[test]
    fn json_round_trip_keeps_order() {
        let data = tiny();
        let json = data.to_json_string().unwrap();
        let back = Dataset::from_json_str(&json).unwrap();
        assert_eq!(back.categories(), data.categories());
        assert_eq!(back.zones(), data.zones());
        assert_eq!(back.social(), data.social());
        assert_eq!(back.reports(), data.reports());
    }

    #[test]
    fn json_output_lists_entries_in_identifier_order() {
        let data = Dataset::new(
            vec!["B".into(), "A".into()],
            vec!["Y".into(), "X".into()],
            SignalMap::from_pairs([("A", 1.0), ("B", 2.0)]).unwrap(),
            SignalMap::from_pairs([("A", 3.0), ("B", 1.0)]).unwrap(),
            SignalMap::from_pairs([("X", 10.0), ("Y", 20.0)]).unwrap(),
            SignalMap::from_pairs([("X", 5.0), ("Y", 6.0)]).unwrap(),
        ).unwrap();

        let json = data.to_json_string().unwrap();
        assert!(json.contains("\"social\": {\n    \"B\": 2.0,\n    \"A\": 1.0\n  }"), "{json}");
        assert!(json.contains("\"reports\": {\n    \"Y\": 6.0,\n    \"X\": 5.0\n  }"), "{json}");
        assert_eq!(json, data.to_json_string().unwrap());
    }

    #[test]
    fn json_missing_entry_is_an_error() {
        let json = r#"{
            "categories": ["A"], "zones": ["X", "Y"],
            "social": {"A": 1}, "legal": {"A": 1},
            "consumption": {"X": 1, "Z": 2}, "reports": {"X": 1, "Y": 1}
        }"#;
        let err = Dataset::from_json_str(json).unwrap_err();
        assert!(format!("{err:#}").contains("consumption"));
    }
}
