// extractguard-math/src/statistics/mod.rs

/// Arithmetic mean of a slice of values.
///
/// An empty slice has a mean of `0.0` rather than `NaN`.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    // Sum first, divide once.
    values.iter().sum::<f64>() / values.len() as f64
}
