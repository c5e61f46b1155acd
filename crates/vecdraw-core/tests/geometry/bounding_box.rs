use vecdraw_core::{BoundingBox, Point};

#[test]
fn test_corner_order_is_y_up() {
    let bb = BoundingBox::new(Point::new(10.0, 10.0), 4.0, 2.0);
    assert_eq!(
        bb.corners(),
        [
            Point::new(6.0, 12.0),
            Point::new(14.0, 12.0),
            Point::new(14.0, 8.0),
            Point::new(6.0, 8.0),
        ]
    );
}

#[test]
fn test_boundary_is_outside_strict_box() {
    let bb = BoundingBox::new(Point::ORIGIN, 5.0, 3.0);
    assert!(bb.is_inside(Point::new(4.9, -2.9)));
    assert!(!bb.is_inside(Point::new(5.0, 0.0)));
    assert!(bb.contains_inclusive(Point::new(5.0, 0.0)));
    assert!(!bb.contains_inclusive(Point::new(5.1, 0.0)));
}

#[test]
fn test_negative_extents_behave_like_positive() {
    let bb = BoundingBox::new(Point::ORIGIN, -5.0, -3.0);
    assert!(bb.is_inside(Point::new(-4.0, 2.0)));
}

#[test]
fn test_from_points() {
    assert!(BoundingBox::from_points(&[]).is_none());
    let bb = BoundingBox::from_points(&[
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(5.0, 8.0),
    ])
    .unwrap();
    assert_eq!(bb.center, Point::new(5.0, 4.0));
    assert_eq!((bb.w, bb.h), (5.0, 4.0));
}
