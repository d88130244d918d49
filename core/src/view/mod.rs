//! Pure view-model derivation for the playground pages.
//!
//! Every slider change recomputes the whole view from the raw
//! parameters; nothing is carried between calls. Pushing the result to
//! the plotting widget is the caller's side effect, not ours — the
//! views only supply the numbers and readout strings.

use serde::Serialize;

use crate::angle::normalize_radians;
use crate::format::{format_angle, format_number, AngleMode};
use crate::geometry::Point2;
use crate::triangle::laws::{cosine_law_check, sine_law_ratios, CosineLawCheck, SineLawRatios};
use crate::triangle::{clamp_angle_pair, solve, Triangle, BASE_LENGTH};
use crate::unit_circle::{point_on_circle, quadrant, sin_cos_tan, Quadrant, TrigValues};

/// Everything the triangle-laws page shows for one slider state.
#[derive(Debug, Clone, Serialize)]
pub struct TriangleLawsView {
    pub triangle: Triangle,
    pub sine_ratios: SineLawRatios,
    pub cosine_law: CosineLawCheck,
    pub angle_summary: String,
    pub base_split: String,
    pub height: String,
    pub side_lengths: String,
}

impl TriangleLawsView {
    /// Derive the view from raw slider angles (degrees). The pair is
    /// pre-clamped here, so the solver always sees safe input.
    pub fn derive(angle_a: f64, angle_b: f64) -> Self {
        let (a, b) = clamp_angle_pair(angle_a, angle_b);
        let triangle = solve(a, b, BASE_LENGTH);
        let sine_ratios = sine_law_ratios(&triangle);
        let cosine_law = cosine_law_check(&triangle);

        let angle_summary = format!(
            "A = {}° · B = {}° · C = {}°",
            format_number(triangle.angle_a, 0),
            format_number(triangle.angle_b, 0),
            format_number(triangle.angle_c, 0),
        );
        let base_split = format!(
            "x = {} · c − x = {}",
            format_number(triangle.apex.x, 2),
            format_number(triangle.c - triangle.apex.x, 2),
        );
        let height = format!("h = {}", format_number(triangle.apex.y, 2));
        let side_lengths = format!(
            "a = {}, b = {}, c = {}",
            format_number(triangle.a, 2),
            format_number(triangle.b, 2),
            format_number(triangle.c, 0),
        );

        Self {
            triangle,
            sine_ratios,
            cosine_law,
            angle_summary,
            base_split,
            height,
            side_lengths,
        }
    }
}

/// Everything the unit-circle page shows for one angle.
#[derive(Debug, Clone, Serialize)]
pub struct UnitCircleView {
    /// The normalized angle, in `[0, 2π)`.
    pub theta: f64,
    pub values: TrigValues,
    pub quadrant: Quadrant,
    /// `(cos θ, sin θ)`, for the marker on the circle.
    pub point: Point2,
    pub theta_display: String,
    pub tan_display: String,
}

impl UnitCircleView {
    pub fn derive(theta: f64, mode: AngleMode) -> Self {
        let normalized = normalize_radians(theta);
        let values = sin_cos_tan(normalized);
        let quad = quadrant(normalized);
        let tan_display = match values.tan {
            Some(tan) => format_number(tan, 3),
            None => "undefined".to_string(),
        };

        Self {
            theta: normalized,
            values,
            quadrant: quad,
            point: point_on_circle(normalized),
            theta_display: format_angle(normalized, mode),
            tan_display,
        }
    }
}
