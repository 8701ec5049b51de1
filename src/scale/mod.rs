pub use self::bins::Bins;
pub use self::ticks::{count_thresholds, Scale, DEFAULT_STEPS, MAX_STEPS};

mod bins;
mod ticks;

/// Rounds to 10 decimal places, absorbing the drift of repeated float steps.
///
/// Numbers too big to have 10 meaningful decimals are returned untouched.
pub(crate) fn round10(number: f64) -> f64 {
    const FACTOR: f64 = 1e10;
    let scaled = number * FACTOR;
    if !scaled.is_finite() || scaled.abs() >= 2_f64.powi(52) {
        return number;
    }
    scaled.round() / FACTOR
}
