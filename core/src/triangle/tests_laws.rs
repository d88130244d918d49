use crate::triangle::laws::{cosine_law_check, sine_law_ratios};
use crate::triangle::{solve, BASE_LENGTH};

#[test]
fn test_sine_ratios_agree_across_grid() {
    for a in (20..=140).step_by(5) {
        for b in (20..=140).step_by(5) {
            if a + b > 170 {
                continue;
            }
            let t = solve(a as f64, b as f64, BASE_LENGTH);
            let r = sine_law_ratios(&t);
            assert!(
                (r.ratio_a - r.ratio_b).abs() < 1e-9,
                "sine law broken for A={a} B={b}: {} vs {}",
                r.ratio_a,
                r.ratio_b
            );
            assert!((r.ratio_a - r.ratio_c).abs() < 1e-9);
        }
    }
}

#[test]
fn test_sine_ratio_value() {
    // sin(C)/c with C = 70°, c = 10.
    let t = solve(50.0, 60.0, 10.0);
    let r = sine_law_ratios(&t);
    assert!((r.ratio_c - 0.0939692).abs() < 1e-6);
    assert!((r.ratio_a - r.ratio_c).abs() < 1e-12);
}

#[test]
fn test_cosine_law_residual_across_grid() {
    for a in (20..=140).step_by(5) {
        for b in (20..=140).step_by(5) {
            if a + b > 170 {
                continue;
            }
            let t = solve(a as f64, b as f64, BASE_LENGTH);
            let check = cosine_law_check(&t);
            assert!(
                check.diff.abs() < 1e-9,
                "cosine law residual {} for A={a} B={b}",
                check.diff
            );
        }
    }
}

#[test]
fn test_cosine_law_components() {
    let t = solve(50.0, 60.0, 10.0);
    let check = cosine_law_check(&t);
    assert_eq!(check.c_squared, 100.0);
    assert!((check.a2_plus_b2 - (t.a * t.a + t.b * t.b)).abs() < 1e-12);
    // The corrected sum must reproduce c².
    assert!((check.a2_plus_b2 - check.correction - 100.0).abs() < 1e-9);
}

#[test]
fn test_right_triangle_correction_vanishes() {
    // C = 90°: cos(C) ≈ 0 and the identity collapses to Pythagoras.
    let t = solve(50.0, 40.0, 10.0);
    let check = cosine_law_check(&t);
    assert!(check.correction.abs() < 1e-12);
    assert!((check.a2_plus_b2 - 100.0).abs() < 1e-9);
}
