use proptest::prelude::*;
use vecdraw_core::{Point, Transform2d};

fn coord() -> impl Strategy<Value = f64> {
    -1.0e3..1.0e3f64
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

#[test]
fn test_zero_vector_has_no_direction() {
    assert!(Point::ORIGIN.normalized().is_err());
    assert!(Point::ORIGIN.try_angle_between(Point::UNIT_X).is_err());
    assert_eq!(Point::new(0.0, -2.0).normalized().unwrap(), Point::new(0.0, -1.0));
}

#[test]
fn test_rotation_is_counter_clockwise() {
    let p = Transform2d::rotation(std::f64::consts::FRAC_PI_2).transform(Point::UNIT_X);
    assert!(p.approx_eq(&Point::new(0.0, 1.0), 1e-12));
}

proptest! {
    #[test]
    fn prop_add_then_sub_restores(a in point(), b in point()) {
        prop_assert!(((a + b) - b).approx_eq(&a, 1e-9));
    }

    #[test]
    fn prop_dot_commutes(a in point(), b in point()) {
        prop_assert_eq!(a.dot(b), b.dot(a));
    }

    #[test]
    fn prop_length_non_negative(a in point()) {
        prop_assert!(a.length() >= 0.0);
        prop_assert!((a.distance_to(&Point::ORIGIN) - a.length()).abs() < 1e-9);
    }

    #[test]
    fn prop_perp_is_orthogonal(a in point()) {
        prop_assert!(a.dot(a.perp()).abs() < 1e-6);
    }

    #[test]
    fn prop_object_world_round_trip(
        center in point(),
        rotation in -10.0..10.0f64,
        p in point(),
    ) {
        let to_world = Transform2d::object_to_world(center, rotation);
        let to_object = Transform2d::world_to_object(center, rotation);
        prop_assert!(to_object.transform(to_world.transform(p)).approx_eq(&p, 1e-6));
        prop_assert!(to_world.transform(to_object.transform(p)).approx_eq(&p, 1e-6));
    }

    #[test]
    fn prop_inverse_matches_world_to_object(center in point(), rotation in -10.0..10.0f64, p in point()) {
        let inverse = Transform2d::object_to_world(center, rotation).inverse().unwrap();
        let expected = Transform2d::world_to_object(center, rotation).transform(p);
        prop_assert!(inverse.transform(p).approx_eq(&expected, 1e-6));
    }

    #[test]
    fn prop_vectors_ignore_translation(offset in point(), v in point()) {
        let t = Transform2d::translation(offset);
        prop_assert_eq!(t.transform_vector(v), v);
    }
}
