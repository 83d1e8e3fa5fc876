/// Square miles per square kilometre factor used for the area display.
const MILES_TO_KMS: f64 = 1.60934;

/// Convert an area to kilometres, rounded to the nearest whole number.
///
/// Halves round upwards (`2.5 -> 3`, `-2.5 -> -2`). NaN passes through.
pub fn miles_to_kms(area: f64) -> f64 {
    round_half_up(area * MILES_TO_KMS)
}

/// Nearest integer, ties towards positive infinity.
///
/// `x - x.floor()` is exact for every finite `f64`, so values just below a
/// half and integers beyond 2^52 are not disturbed the way `(x + 0.5).floor()`
/// disturbs them.
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
