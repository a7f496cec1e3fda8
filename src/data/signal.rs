use std::sync::Arc;

use ahash::AHashMap;
use anyhow::{bail, Result};
use serde::{Serialize, Serializer};

/// An ordered map from identifier to a single numeric signal value.
///
/// Insertion order is preserved and defines the enumeration order used by every
/// cross-product computation downstream, so two maps built from the same pairs
/// always sum and sort identically.
#[derive(Clone, Debug, Default)]
pub struct SignalMap {
    keys: Vec<Arc<str>>,
    values: Vec<f64>,
    index: AHashMap<Arc<str>, usize>,
}

impl SignalMap {
    /// Create an empty map.
    pub fn new() -> Self { Self::default() }

    /// Build a map from `(key, value)` pairs, rejecting duplicate keys.
    pub fn from_pairs<K: AsRef<str>>(pairs: impl IntoIterator<Item = (K, f64)>) -> Result<Self> {
        let mut map = Self::new();
        for (key, value) in pairs {
            map.insert(key.as_ref(), value)?;
        }
        Ok(map)
    }

    /// Append a new key. Fails if the key is already present.
    pub fn insert(&mut self, key: &str, value: f64) -> Result<()> {
        if self.index.contains_key(key) {
            bail!("[SignalMap.insert] duplicate key '{key}'");
        }

        let key: Arc<str> = Arc::from(key);
        self.index.insert(key.clone(), self.keys.len());
        self.keys.push(key);
        self.values.push(value);

        Ok(())
    }

    #[inline] pub fn len(&self) -> usize { self.keys.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.keys.is_empty() }

    /// Keys in insertion order.
    #[inline] pub fn keys(&self) -> &[Arc<str>] { &self.keys }

    /// Values in insertion order (parallel to `keys`).
    #[inline] pub fn values(&self) -> &[f64] { &self.values }

    /// Value at a given position. Panics if out of range.
    #[inline] pub fn value(&self, i: usize) -> f64 { self.values[i] }

    /// Position of a key, if present.
    #[inline] pub fn position(&self, key: &str) -> Option<usize> { self.index.get(key).copied() }

    /// Value for a key, if present.
    #[inline] pub fn get(&self, key: &str) -> Option<f64> { self.position(key).map(|i| self.values[i]) }

    #[inline] pub fn contains_key(&self, key: &str) -> bool { self.index.contains_key(key) }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.keys.iter().map(|k| k.as_ref()).zip(self.values.iter().copied())
    }

    /// Smallest and largest value, or `None` for an empty map.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        if self.is_empty() { return None }
        Some(self.values.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v))))
    }

    /// New map with the same keys (and order) and every value transformed by `f`.
    pub(crate) fn map_values(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            keys: self.keys.clone(),
            values: self.values.iter().map(|&v| f(v)).collect(),
            index: self.index.clone(),
        }
    }
}

/// Serializes as a JSON object whose keys follow insertion order.
impl Serialize for SignalMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl PartialEq for SignalMap {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys && self.values == other.values
    }
}
