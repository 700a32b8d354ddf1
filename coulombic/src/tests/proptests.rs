use proptest::prelude::*;

use crate::{COULOMB_CONSTANT, Error, ForceKind, Vec2, compute, tests::assert_nearly_eq};

proptest! {
    #[test]
    fn magnitude_follows_coulombs_law(
        q1 in -5.0..5.0f64,
        q2 in -5.0..5.0f64,
        x in -50.0..50.0f64,
        y in -50.0..50.0f64,
    ) {
        let r_squared = x * x + y * y;
        prop_assume!(r_squared > 1e-6);

        let f = compute(q1, q2, x, y).unwrap();
        assert!(f.magnitude >= 0.0);
        assert_nearly_eq(f.magnitude, COULOMB_CONSTANT * (q1 * q2).abs() / r_squared);
    }

    #[test]
    fn force_is_purely_radial(
        q1 in -5.0..5.0f64,
        q2 in -5.0..5.0f64,
        x in -50.0..50.0f64,
        y in -50.0..50.0f64,
    ) {
        prop_assume!(x * x + y * y > 1e-6);
        prop_assume!(q1 * q2 != 0.0);

        let f = compute(q1, q2, x, y).unwrap();
        let position = Vec2::new(x, y);
        // Zero cross product: the force lies along the line between the
        // charges. Scaled by the obvious magnitudes so the tolerance is
        // relative.
        let cross = f.fx * y - f.fy * x;
        assert!(cross.abs() <= 1e-9 * f.magnitude * position.magnitude());
    }

    #[test]
    fn classification_matches_signs(
        q1 in -5.0..5.0f64,
        q2 in -5.0..5.0f64,
        x in -50.0..50.0f64,
        y in -50.0..50.0f64,
    ) {
        prop_assume!(x * x + y * y > 1e-6);
        prop_assume!(q1 * q2 != 0.0);

        let f = compute(q1, q2, x, y).unwrap();
        let along = f.components().dot(Vec2::new(x, y));
        if q1 * q2 > 0.0 {
            assert_eq!(f.kind, ForceKind::Repulsion);
            assert!(along > 0.0, "repulsion must push away from the origin");
        } else {
            assert_eq!(f.kind, ForceKind::Attraction);
            assert!(along < 0.0, "attraction must pull toward the origin");
        }
    }

    #[test]
    fn flipping_one_sign_reverses_the_force(
        q1 in -5.0..5.0f64,
        q2 in -5.0..5.0f64,
        x in -50.0..50.0f64,
        y in -50.0..50.0f64,
    ) {
        prop_assume!(x * x + y * y > 1e-6);
        prop_assume!(q1 * q2 != 0.0);

        let f = compute(q1, q2, x, y).unwrap();
        let g = compute(q1, -q2, x, y).unwrap();
        assert_nearly_eq(g.magnitude, f.magnitude);
        assert_nearly_eq(g.fx, -f.fx);
        assert_nearly_eq(g.fy, -f.fy);
        // Direction rotates by exactly half a turn.
        let delta = (g.angle_degrees - f.angle_degrees).rem_euclid(360.0);
        assert!((delta - 180.0).abs() < 1e-6);
    }

    #[test]
    fn origin_always_rejected(
        q1 in -5.0..5.0f64,
        q2 in -5.0..5.0f64,
    ) {
        assert_eq!(compute(q1, q2, 0.0, 0.0), Err(Error::InvalidPosition));
    }

    #[test]
    fn angle_range_is_half_open(
        q1 in -5.0..5.0f64,
        q2 in -5.0..5.0f64,
        x in -50.0..50.0f64,
        y in -50.0..50.0f64,
    ) {
        prop_assume!(x * x + y * y > 1e-6);

        let f = compute(q1, q2, x, y).unwrap();
        assert!(f.angle_degrees > -180.0);
        assert!(f.angle_degrees <= 180.0);
    }
}
