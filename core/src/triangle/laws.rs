//! Sine-law and cosine-law verification for solved triangles.
//!
//! Both checks are read-only snapshots derived from a [`Triangle`]:
//! display values that double as correctness self-checks. Neither feeds
//! back into solving.

use serde::{Deserialize, Serialize};

use super::Triangle;

/// The three ratios `sin(X) / x`, one per vertex. For any triangle
/// produced by [`super::solve`] all three are equal within
/// floating-point tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SineLawRatios {
    pub ratio_a: f64,
    pub ratio_b: f64,
    pub ratio_c: f64,
}

pub fn sine_law_ratios(triangle: &Triangle) -> SineLawRatios {
    SineLawRatios {
        ratio_a: triangle.radians_a.sin() / triangle.a,
        ratio_b: triangle.radians_b.sin() / triangle.b,
        ratio_c: triangle.radians_c.sin() / triangle.c,
    }
}

/// Components of the law-of-cosines identity
/// `c² = a² + b² − 2ab·cos(C)`. `diff` is the residual and must be ≈ 0
/// for any solved triangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CosineLawCheck {
    pub c_squared: f64,
    pub a2_plus_b2: f64,
    pub correction: f64,
    pub diff: f64,
}

pub fn cosine_law_check(triangle: &Triangle) -> CosineLawCheck {
    let c_squared = triangle.c * triangle.c;
    let a2_plus_b2 = triangle.a * triangle.a + triangle.b * triangle.b;
    let correction = 2.0 * triangle.a * triangle.b * triangle.radians_c.cos();
    let diff = c_squared - (a2_plus_b2 - correction);

    CosineLawCheck {
        c_squared,
        a2_plus_b2,
        correction,
        diff,
    }
}
