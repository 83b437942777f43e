// extractguard-math/src/rounding/mod.rs
use alloc::format;
use libm::{pow, rint};

/// Rounds `value` to `places` decimal digits.
///
/// Rounding is decided on the exact decimal expansion of `value` rather than on
/// `value * 10^places`, whose product is itself inexact: `0.6749999999999999`
/// rounds to `0.67` and `0.525` (stored as `0.52500000000000002...`) to `0.53`.
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", places as usize, value)
        .parse()
        .unwrap_or_else(|_| scaled_round(value, places))
}

fn scaled_round(value: f64, places: u32) -> f64 {
    let factor = pow(10.0, places as f64);
    rint(value * factor) / factor
}

/// Two-decimal rounding, the precision used for every reported score.
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}
