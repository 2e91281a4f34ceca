//! Property checks of the packed angle encoding against std trigonometry

use approx::{assert_abs_diff_eq, assert_relative_eq};
use packed_angle::{AngleError, PackedAngle, Quadrant};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, PI};

/// Random angles strictly inside (-π, π), reproducible between runs
fn random_angles(seed: u64, count: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(-PI + 1e-9..PI)).collect()
}

/// Low-discrepancy sweep over one turn using the golden ratio
fn irrational_sweep(count: usize) -> Vec<f64> {
    let golden = (5.0_f64.sqrt() - 1.0) / 2.0;
    (1..=count)
        .map(|k| -PI + 2.0 * PI * ((k as f64 * golden) % 1.0))
        .collect()
}

#[test]
fn test_round_trip_random() {
    for r in random_angles(7, 5000) {
        let back = PackedAngle::from_radians(r).radians();
        assert!(
            (back - r).abs() <= 4.0 * f64::EPSILON * r.abs().max(1.0),
            "round trip of {} gave {} (error {:e})",
            r,
            back,
            back - r
        );
    }
}

#[test]
fn test_zero_identity() {
    assert_eq!(
        PackedAngle::from_radians(0.0).to_bits(),
        PackedAngle::zero().to_bits()
    );
    assert_eq!(PackedAngle::from_degrees(0.0), PackedAngle::ZERO);
}

#[test]
fn test_exact_right_angles() {
    assert_eq!(PackedAngle::from_degrees(90.0).radians(), FRAC_PI_2);
    assert_eq!(PackedAngle::from_degrees(360.0), PackedAngle::from_degrees(0.0));
    assert_eq!(PackedAngle::from_degrees(-90.0).radians(), -FRAC_PI_2);
    assert_eq!(PackedAngle::from_degrees(180.0).radians(), PI);
}

#[test]
fn test_negation() {
    for r in random_angles(11, 2000) {
        let a = PackedAngle::from_radians(r);
        assert_eq!(-(-a), a);
        assert_eq!(-a, PackedAngle::from_radians(-r), "negation of {}", r);
        assert_abs_diff_eq!(-a, PackedAngle::from_radians(-a.radians()), epsilon = 1e-15);
    }
}

#[test]
fn test_negation_example() {
    let a = PackedAngle::from_radians(PI / 3.0);
    // 5π/3 normalizes to -π/3
    assert_eq!(-a, PackedAngle::from_radians(-PI / 3.0));
    assert_eq!(-a, PackedAngle::from_radians(5.0 * PI / 3.0));
}

#[test]
fn test_wraparound_addition() {
    let firsts = random_angles(3, 1000);
    let seconds = random_angles(5, 1000);

    for (r1, r2) in firsts.into_iter().zip(seconds) {
        let sum = PackedAngle::from_radians(r1) + PackedAngle::from_radians(r2);
        assert_abs_diff_eq!(sum, PackedAngle::from_radians(r1 + r2), epsilon = 1e-14);

        let difference = PackedAngle::from_radians(r1) - PackedAngle::from_radians(r2);
        assert_abs_diff_eq!(
            difference,
            PackedAngle::from_radians(r1 - r2),
            epsilon = 1e-14
        );
    }
}

#[rstest]
#[case(-2.0)]
#[case(-1.0)]
#[case(0.0)]
#[case(1.0)]
#[case(2.0)]
#[case(3.0)]
#[case(-7.0)]
#[case(0.5)]
#[case(2.75)]
#[case(-1.0 / 3.0)]
fn test_scalar_multiplication(#[case] factor: f64) {
    for r in random_angles(13, 500) {
        let a = PackedAngle::from_radians(r);
        let expected = PackedAngle::from_radians(factor * r);

        assert_abs_diff_eq!(a * factor, expected, epsilon = 1e-13);
        assert_eq!(a * factor, factor * a);
    }
}

#[rstest]
#[case(0.0, 0.0, 1.0)]
#[case(45.0, FRAC_1_SQRT_2, FRAC_1_SQRT_2)]
#[case(90.0, 1.0, 0.0)]
#[case(135.0, FRAC_1_SQRT_2, -FRAC_1_SQRT_2)]
#[case(180.0, 0.0, -1.0)]
#[case(225.0, -FRAC_1_SQRT_2, -FRAC_1_SQRT_2)]
#[case(270.0, -1.0, 0.0)]
#[case(315.0, -FRAC_1_SQRT_2, FRAC_1_SQRT_2)]
#[case(360.0, 0.0, 1.0)]
fn test_eighth_turns(#[case] degrees: f64, #[case] sin: f64, #[case] cos: f64) {
    let angle = PackedAngle::from_degrees(degrees);
    let reference = degrees.to_radians();

    assert_abs_diff_eq!(angle.sin(), sin, epsilon = 2.0 * f64::EPSILON);
    assert_abs_diff_eq!(angle.cos(), cos, epsilon = 2.0 * f64::EPSILON);
    assert_abs_diff_eq!(angle.sin(), reference.sin(), epsilon = 4.0 * f64::EPSILON);
    assert_abs_diff_eq!(angle.cos(), reference.cos(), epsilon = 4.0 * f64::EPSILON);

    if sin != 0.0 && cos != 0.0 {
        assert_relative_eq!(angle.tan(), sin / cos, max_relative = 1e-15);
        assert_relative_eq!(angle.cot(), cos / sin, max_relative = 1e-15);
        assert_relative_eq!(angle.sec(), 1.0 / cos, max_relative = 1e-15);
        assert_relative_eq!(angle.csc(), 1.0 / sin, max_relative = 1e-15);
    } else if sin == 0.0 {
        assert_eq!(angle.tan(), 0.0);
        assert!(angle.cot().is_infinite());
        assert!(angle.csc().is_infinite());
        assert_eq!(angle.sec(), 1.0 / cos);
    } else {
        assert!(angle.tan().is_infinite());
        assert_eq!(angle.cot(), 0.0);
        assert!(angle.sec().is_infinite());
        assert_eq!(angle.csc(), 1.0 / sin);
    }
}

#[test]
fn test_irrational_sweep() {
    for r in irrational_sweep(2000) {
        let angle = PackedAngle::from_radians(r);
        let (sin, cos) = r.sin_cos();

        assert_abs_diff_eq!(angle.sin(), sin, epsilon = 4.0 * f64::EPSILON);
        assert_abs_diff_eq!(angle.cos(), cos, epsilon = 4.0 * f64::EPSILON);
        assert_eq!(angle.sin_cos(), (angle.sin(), angle.cos()));

        // Relative checks lose meaning next to the poles
        if sin.abs() > 1e-3 && cos.abs() > 1e-3 {
            assert_relative_eq!(angle.tan(), r.tan(), max_relative = 1e-12);
            assert_relative_eq!(angle.cot(), 1.0 / r.tan(), max_relative = 1e-12);
            assert_relative_eq!(angle.sec(), 1.0 / cos, max_relative = 1e-12);
            assert_relative_eq!(angle.csc(), 1.0 / sin, max_relative = 1e-12);
        }
    }
}

#[test]
fn test_quadrant_matches_dominant_component() {
    for r in irrational_sweep(500) {
        let (sin, cos) = r.sin_cos();
        let expected = if sin.abs() <= cos.abs() {
            if cos > 0.0 {
                Quadrant::East
            } else {
                Quadrant::West
            }
        } else if sin > 0.0 {
            Quadrant::North
        } else {
            Quadrant::South
        };
        assert_eq!(PackedAngle::from_radians(r).quadrant(), expected, "r = {}", r);
    }
}

#[test]
fn test_distinct_angles_do_not_collide() {
    let mut angles: Vec<PackedAngle> = (0..3600)
        .map(|i| PackedAngle::from_degrees(-180.0 + 0.1 * (i as f64 + 0.5)))
        .collect();
    let before = angles.len();
    angles.sort_by_key(|a| a.to_bits());
    angles.dedup();
    assert_eq!(angles.len(), before);
}

#[test]
fn test_malformed_construction() {
    assert!(matches!(
        PackedAngle::from_components(&[1.0, 2.0, 3.0]),
        Err(AngleError::InvalidArity { found: 3 })
    ));
    assert!(matches!(
        PackedAngle::from_cartesian(0.0, 0.0),
        Err(AngleError::DegenerateVector)
    ));
}

#[test]
fn test_division_example() {
    let a = PackedAngle::from_degrees(190.0) / 170.0;
    assert_abs_diff_eq!(a, PackedAngle::from_degrees(-1.0));
}

#[test]
fn test_cartesian_matches_radians() {
    for r in random_angles(17, 1000) {
        let (sin, cos) = r.sin_cos();
        let from_pair = PackedAngle::from_cartesian(3.0 * sin, 3.0 * cos).unwrap();
        assert_abs_diff_eq!(from_pair, PackedAngle::from_radians(r), epsilon = 1e-14);
    }
}

#[test]
fn test_serde_json_roundtrip() {
    for r in random_angles(19, 100) {
        let angle = PackedAngle::from_radians(r);
        let json = serde_json::to_string(&angle).unwrap();
        let back: PackedAngle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, angle);
    }
}
