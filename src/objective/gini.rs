/// Gini coefficient of a sample: 0 for a perfectly even sample, approaching 1
/// as the mass concentrates in a single value.
///
/// Uses the rank formula over the ascending-sorted sample `v` (1-based rank `i`):
///
/// ```text
/// G = 2·Σ i·v_i / (n·Σ v_i) − (n + 1) / n
/// ```
///
/// An empty or zero-sum sample has no dispersion to measure and yields 0.
pub fn gini(values: &[f64]) -> f64 {
    if values.is_empty() { return 0.0 }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let total = sorted.iter().sum::<f64>();
    if total == 0.0 { return 0.0 }

    let n = sorted.len() as f64;
    let ranked = sorted.iter().enumerate()
        .map(|(i, &v)| (i + 1) as f64 * v)
        .sum::<f64>();

    (2.0 * ranked) / (n * total) - (n + 1.0) / n
}
