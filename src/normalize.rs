//! Scaling of raw priority and intensity signals into comparable ranges.

use anyhow::{bail, ensure, Result};

use crate::data::SignalMap;

/// Lower bound of normalized intensities. Keeps the least-consuming or
/// least-reported zone visible to the objective instead of pinning it at zero.
pub const DEFAULT_FLOOR: f64 = 0.3;

/// Divide every priority by the set maximum, so the top key maps to exactly 1.0
/// and all others land in (0, 1].
///
/// Fails on an empty map (no maximum exists) and on non-positive or non-finite values.
pub fn normalize_priorities(raw: &SignalMap) -> Result<SignalMap> {
    ensure!(!raw.is_empty(), "[normalize_priorities] cannot normalize an empty priority map");
    for (key, value) in raw.iter() {
        ensure!(value.is_finite() && value > 0.0,
            "[normalize_priorities] priority for '{key}' must be positive and finite, got {value}");
    }

    let max = raw.values().iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Ok(raw.map_values(|v| v / max))
}

/// Min-max scale intensities into [0, 1], then map affinely into [floor, 1].
///
/// When every raw value is equal there is nothing to discriminate on and every
/// key maps to exactly 1.0.
pub fn normalize_intensities(raw: &SignalMap, floor: f64) -> Result<SignalMap> {
    ensure!((0.0..=1.0).contains(&floor), "[normalize_intensities] floor must be in [0, 1], got {floor}");
    for (key, value) in raw.iter() {
        ensure!(value.is_finite(), "[normalize_intensities] intensity for '{key}' must be finite, got {value}");
    }
    let Some((min, max)) = raw.min_max() else {
        bail!("[normalize_intensities] cannot normalize an empty intensity map");
    };

    if max == min { return Ok(raw.map_values(|_| 1.0)) }

    let range = max - min;
    Ok(raw.map_values(|v| floor + (1.0 - floor) * ((v - min) / range)))
}
