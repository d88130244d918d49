use crate::geometry::Point2;
use crate::triangle::{
    clamp_angle_pair, solve, BASE_LENGTH, MAX_ANGLE_DEG, MAX_ANGLE_SUM_DEG, MIN_ANGLE_DEG,
};

#[test]
fn test_angle_sum_exact() {
    // Integer-degree inputs must give the third angle back exactly.
    for a in 20..=140 {
        for b in 20..=140 {
            if a + b > 170 {
                continue;
            }
            let t = solve(a as f64, b as f64, BASE_LENGTH);
            assert_eq!(t.angle_c, 180.0 - a as f64 - b as f64);
        }
    }
}

#[test]
fn test_known_triangle_50_60() {
    let t = solve(50.0, 60.0, 10.0);
    assert_eq!(t.angle_c, 70.0);
    assert!((t.a - 8.152).abs() < 1e-2);
    assert!((t.b - 9.216).abs() < 1e-2);
    assert!((t.apex.x - 5.924).abs() < 1e-2);
    assert!((t.apex.y - 7.060).abs() < 1e-2);
}

#[test]
fn test_equilateral() {
    let t = solve(60.0, 60.0, 10.0);
    assert_eq!(t.angle_c, 60.0);
    assert!((t.a - 10.0).abs() < 1e-9);
    assert!((t.b - 10.0).abs() < 1e-9);
    assert!((t.apex.x - 5.0).abs() < 1e-9);
    assert!((t.apex.y - 10.0 * 3.0_f64.sqrt() / 2.0).abs() < 1e-9);
}

#[test]
fn test_right_angle_at_base() {
    // A = 90° puts the apex directly above the left base vertex.
    let t = solve(90.0, 45.0, 10.0);
    assert_eq!(t.angle_c, 45.0);
    assert!(t.apex.x.abs() < 1e-9);
    assert!((t.apex.y - 10.0).abs() < 1e-9);
    assert!((t.a - 10.0 * 2.0_f64.sqrt()).abs() < 1e-9);
}

#[test]
fn test_apex_respects_side_lengths() {
    // Distance from the apex to each base vertex must equal the
    // opposite-side length it was derived from.
    for (a, b) in [(50.0, 60.0), (20.0, 140.0), (110.0, 35.0), (85.0, 85.0)] {
        let t = solve(a, b, BASE_LENGTH);
        let left = Point2::new(0.0, 0.0);
        let right = Point2::new(t.c, 0.0);
        assert!((nalgebra::distance(&t.apex, &left) - t.b).abs() < 1e-9);
        assert!((nalgebra::distance(&t.apex, &right) - t.a).abs() < 1e-9);
    }
}

#[test]
fn test_near_degenerate_stays_finite() {
    // 2° left for C: huge sides, but no panic and nothing non-finite.
    let t = solve(89.0, 89.0, BASE_LENGTH);
    assert!(t.a.is_finite() && t.b.is_finite());
    assert!(t.a > BASE_LENGTH);
    assert!(t.apex.y.is_finite());
}

#[test]
fn test_clamp_angle_pair_passthrough() {
    assert_eq!(clamp_angle_pair(50.0, 60.0), (50.0, 60.0));
    assert_eq!(clamp_angle_pair(MIN_ANGLE_DEG, MAX_ANGLE_DEG), (20.0, 140.0));
}

#[test]
fn test_clamp_angle_pair_bounds() {
    assert_eq!(clamp_angle_pair(10.0, 150.0), (20.0, 140.0));
    assert_eq!(clamp_angle_pair(-5.0, 75.0), (20.0, 75.0));
}

#[test]
fn test_clamp_angle_pair_sum_cap() {
    // Second angle gives way when the pair would crowd out C.
    assert_eq!(clamp_angle_pair(100.0, 100.0), (100.0, 70.0));
    assert_eq!(clamp_angle_pair(140.0, 140.0), (140.0, 30.0));
    let (a, b) = clamp_angle_pair(130.0, 60.0);
    assert!(a + b <= MAX_ANGLE_SUM_DEG);
    assert_eq!((a, b), (130.0, 40.0));
}
