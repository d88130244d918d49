//! Angle conversions and normalization shared by the triangle and
//! unit-circle math.

use std::f64::consts::{PI, TAU};

/// Convert degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Convert radians to degrees.
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Reduce an arbitrary finite angle to its canonical representative in
/// `[0, 2π)`.
///
/// Multiples of 2π are always reported as exactly 0, never 2π, so
/// downstream quadrant bucketing sees a single boundary representative.
pub fn normalize_radians(radians: f64) -> f64 {
    let normalized = (radians % TAU + TAU) % TAU;
    if normalized == TAU {
        0.0
    } else {
        normalized
    }
}

/// Clamp a slider angle to `[min, max]` degrees.
#[inline]
pub fn clamp_angle(value: f64, min: f64, max: f64) -> f64 {
    value.clamp(min, max)
}
