//! Unit-circle trigonometry: sin/cos/tan evaluation with an explicit
//! undefined-tangent sentinel, and quadrant classification.

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::angle::normalize_radians;
use crate::geometry::Point2;

/// Tangent is reported as undefined when `|cos θ|` drops below this.
/// Keeps enormous-but-finite values near the asymptotes out of the
/// readouts. Tunable, not derived.
pub const TAN_EPSILON: f64 = 1e-6;

/// Tolerance for axis alignment in quadrant classification.
pub const AXIS_EPSILON: f64 = 1e-6;

/// Sine, cosine and tangent of one angle. `tan` is `None` near the
/// tangent asymptotes; callers must branch on it before formatting,
/// never substitute 0 or a huge number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrigValues {
    pub sin: f64,
    pub cos: f64,
    pub tan: Option<f64>,
}

/// Evaluate sin, cos and tan at an angle in radians.
pub fn sin_cos_tan(radians: f64) -> TrigValues {
    let sin = radians.sin();
    let cos = radians.cos();
    let tan = if cos.abs() < TAN_EPSILON {
        None
    } else {
        Some(radians.tan())
    };

    TrigValues { sin, cos, tan }
}

/// Where a normalized angle sits on the unit circle, counter-clockwise
/// from the positive x-axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    Axis,
    Q1,
    Q2,
    Q3,
    Q4,
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Axis => "Axis",
            Self::Q1 => "Q1",
            Self::Q2 => "Q2",
            Self::Q3 => "Q3",
            Self::Q4 => "Q4",
        };
        write!(f, "{label}")
    }
}

/// Classify the quadrant of an angle (any finite radians; normalized
/// first). `Axis` is reported within [`AXIS_EPSILON`] of `0`, `π/2`,
/// `π` or `3π/2`. The four axis points plus the four open intervals
/// cover all of `[0, 2π)`.
pub fn quadrant(radians: f64) -> Quadrant {
    let angle = normalize_radians(radians);

    if angle.abs() < AXIS_EPSILON
        || (angle - FRAC_PI_2).abs() < AXIS_EPSILON
        || (angle - PI).abs() < AXIS_EPSILON
        || (angle - 3.0 * FRAC_PI_2).abs() < AXIS_EPSILON
    {
        return Quadrant::Axis;
    }

    if angle < FRAC_PI_2 {
        Quadrant::Q1
    } else if angle < PI {
        Quadrant::Q2
    } else if angle < 3.0 * FRAC_PI_2 {
        Quadrant::Q3
    } else {
        Quadrant::Q4
    }
}

/// The point `(cos θ, sin θ)` — the literal coordinate the plotting
/// layer marks on the circle.
#[inline]
pub fn point_on_circle(radians: f64) -> Point2 {
    Point2::new(radians.cos(), radians.sin())
}
