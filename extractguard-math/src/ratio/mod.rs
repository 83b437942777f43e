// extractguard-math/src/ratio/mod.rs

/// Returns `part / whole` as a float, or `0.0` when `whole` is zero.
pub fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64
}

/// Returns `part` as a percentage of `whole`.
pub fn percent_of(part: usize, whole: usize) -> f64 {
    ratio(part, whole) * 100.0
}
