//! Triangle solving from two interior angles and a base length.
//!
//! The solver derives the full triangle (third angle, remaining side
//! lengths, apex position) with the law of sines, placing the base from
//! `(0, 0)` to `(base, 0)` in a right-handed plane. Verification of the
//! sine and cosine laws lives in [`laws`].

pub mod laws;

#[cfg(test)]
mod tests_laws;
#[cfg(test)]
mod tests_solver;

use serde::{Deserialize, Serialize};

use crate::angle::{clamp_angle, degrees_to_radians};
use crate::geometry::Point2;

/// Base length used by the triangle playground.
pub const BASE_LENGTH: f64 = 10.0;

/// Slider bounds for each adjustable angle, in degrees.
pub const MIN_ANGLE_DEG: f64 = 20.0;
pub const MAX_ANGLE_DEG: f64 = 140.0;

/// Cap on `angle_a + angle_b`, leaving at least 10° for the third angle.
/// A safety margin against near-zero sin(C) blowups, not a mathematical
/// bound.
pub const MAX_ANGLE_SUM_DEG: f64 = 170.0;

/// A fully solved triangle. Constructed by [`solve`], consumed for
/// display and plotting, then discarded; no identity, no mutation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// Interior angles in degrees; they always sum to 180.
    pub angle_a: f64,
    pub angle_b: f64,
    pub angle_c: f64,
    /// The same angles in radians, kept so the law checks reuse the
    /// exact values the solver used.
    pub radians_a: f64,
    pub radians_b: f64,
    pub radians_c: f64,
    /// Side lengths opposite A, B, C. `c` is the caller-supplied base.
    pub a: f64,
    pub b: f64,
    pub c: f64,
    /// Vertex opposite the base, with the base running from `(0, 0)` to
    /// `(c, 0)`.
    pub apex: Point2,
}

/// Solve a triangle from two interior angles (degrees) and the base
/// length.
///
/// Callers are expected to pre-clamp the pair (see [`clamp_angle_pair`])
/// so that `angle_a + angle_b` stays at or below [`MAX_ANGLE_SUM_DEG`].
/// Pairs summing to 180° or more are undefined-by-contract: the solver
/// never panics, but sin(C) near zero makes the derived sides
/// arbitrarily large.
pub fn solve(angle_a: f64, angle_b: f64, base: f64) -> Triangle {
    let angle_c = 180.0 - angle_a - angle_b;
    let radians_a = degrees_to_radians(angle_a);
    let radians_b = degrees_to_radians(angle_b);
    let radians_c = degrees_to_radians(angle_c);
    let sin_c = radians_c.sin();

    let a = base * radians_a.sin() / sin_c;
    let b = base * radians_b.sin() / sin_c;

    // Apex seen from the base-left vertex: side b at elevation A.
    let apex = Point2::new(b * radians_a.cos(), b * radians_a.sin());

    Triangle {
        angle_a,
        angle_b,
        angle_c,
        radians_a,
        radians_b,
        radians_c,
        a,
        b,
        c: base,
        apex,
    }
}

/// Pre-clamp a slider pair so the solver stays away from degenerate
/// geometry: each angle is clamped to `[MIN_ANGLE_DEG, MAX_ANGLE_DEG]`,
/// and if the pair still sums past [`MAX_ANGLE_SUM_DEG`] the second
/// angle gives way.
pub fn clamp_angle_pair(angle_a: f64, angle_b: f64) -> (f64, f64) {
    let a = clamp_angle(angle_a, MIN_ANGLE_DEG, MAX_ANGLE_DEG);
    let b = clamp_angle(angle_b, MIN_ANGLE_DEG, MAX_ANGLE_DEG);
    if a + b > MAX_ANGLE_SUM_DEG {
        (a, clamp_angle(MAX_ANGLE_SUM_DEG - a, MIN_ANGLE_DEG, MAX_ANGLE_DEG))
    } else {
        (a, b)
    }
}
