use std::f64::consts::{FRAC_PI_3, PI};

use proptest::prelude::*;
use vecdraw_core::{Color, Point};
use vecdraw_designer::{Circle, DesignerShape, Ellipse, Line, Rectangle, Shape, Triangle};

#[test]
fn test_circle_boundary_excluded() {
    let c = Circle::new(Color::BLACK, Point::new(3.0, -2.0), 5.0);
    let unit = Point::new(0.6, 0.8);
    assert!(c.is_inside(c.center + unit * 5.0 * 0.999, 0.0));
    assert!(!c.is_inside(Point::new(8.0, -2.0), 0.0));
}

#[test]
fn test_ellipse_boundary_included() {
    let e = Ellipse::new(Color::BLACK, Point::new(10.0, 10.0), 8.0, 4.0);
    assert!(e.is_inside(Point::new(18.0, 10.0), 0.0));
    assert!(e.is_inside(Point::new(10.0, 6.0), 0.0));
    assert!(!e.is_inside(Point::new(18.01, 10.0), 0.0));
}

#[test]
fn test_triangle_winding_laws() {
    let tri = Triangle::from_world(
        Color::BLACK,
        [
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 4.0),
        ],
    );
    assert!(tri.is_inside(Point::new(1.0, 1.0), 0.0));
    assert!(!tri.is_inside(Point::new(3.0, 3.0), 0.0));
    assert!(!tri.is_inside(Point::new(2.0, 0.0), 0.0));
}

#[test]
fn test_line_pick_band() {
    let line = Line::new(
        Color::BLACK,
        Point::new(0.0, 0.0),
        Some(Point::new(10.0, 0.0)),
    );
    assert!(line.is_inside(Point::new(5.0, 2.0), 4.0));
    assert!(!line.is_inside(Point::new(5.0, 5.0), 4.0));
    assert!(!line.is_inside(Point::new(-1.0, 0.0), 4.0));
}

#[test]
fn test_line_transforms_are_identity() {
    let line = Shape::Line(Line::new(
        Color::BLACK,
        Point::new(1.0, 2.0),
        Some(Point::new(7.0, 9.0)),
    ));
    let p = Point::new(3.0, 4.0);
    assert_eq!(line.to_world(p), p);
    assert_eq!(line.to_object(p), p);
    assert_eq!(
        line.world_handles().to_vec(),
        vec![Point::new(1.0, 2.0), Point::new(7.0, 9.0)]
    );
}

#[test]
fn test_handle_counts() {
    let shapes = [
        Shape::Rectangle(Rectangle::new(Color::BLACK, Point::ORIGIN, 1.0, 1.0)),
        Shape::Ellipse(Ellipse::new(Color::BLACK, Point::ORIGIN, 1.0, 1.0)),
        Shape::Circle(Circle::new(Color::BLACK, Point::ORIGIN, 1.0)),
        Shape::Triangle(Triangle::from_world(
            Color::BLACK,
            [Point::ORIGIN, Point::new(1.0, 0.0), Point::new(0.0, 1.0)],
        )),
        Shape::Line(Line::anchored(Color::BLACK, Point::ORIGIN)),
    ];
    let counts: Vec<usize> = shapes.iter().map(|s| s.handle_positions().len()).collect();
    assert_eq!(counts, vec![4, 4, 4, 3, 1]);
}

#[test]
fn test_rotated_rectangle_hit() {
    let mut rect = Rectangle::new(Color::BLACK, Point::new(100.0, 100.0), 50.0, 5.0);
    rect.rotation = PI / 4.0;
    assert!(rect.is_inside(Point::new(130.0, 130.0), 0.0));
    assert!(!rect.is_inside(Point::new(140.0, 100.0), 0.0));
}

fn rotated_shapes(center: Point, rotation: f64) -> Vec<Shape> {
    let mut rect = Rectangle::new(Color::BLACK, center, 7.0, 3.0);
    rect.rotation = rotation;
    let mut ellipse = Ellipse::new(Color::BLACK, center, 2.0, 9.0);
    ellipse.rotation = rotation;
    let mut tri = Triangle::new(
        Color::BLACK,
        center,
        [Point::new(-1.0, -1.0), Point::new(2.0, 0.0), Point::new(0.0, 3.0)],
    );
    tri.rotation = rotation;
    vec![
        Shape::Rectangle(rect),
        Shape::Ellipse(ellipse),
        Shape::Triangle(tri),
    ]
}

proptest! {
    #[test]
    fn prop_object_world_round_trip(
        cx in -500.0f64..500.0,
        cy in -500.0f64..500.0,
        rotation in -PI..PI,
        x in -100.0f64..100.0,
        y in -100.0f64..100.0,
    ) {
        let local = Point::new(x, y);
        for shape in rotated_shapes(Point::new(cx, cy), rotation) {
            let back = shape.to_object(shape.to_world(local));
            prop_assert!(back.approx_eq(&local, 1e-9));
        }
    }

    #[test]
    fn prop_center_is_inside_solid_shapes(
        cx in -500.0f64..500.0,
        cy in -500.0f64..500.0,
        rotation in -FRAC_PI_3..FRAC_PI_3,
    ) {
        for shape in rotated_shapes(Point::new(cx, cy), rotation).into_iter().take(2) {
            prop_assert!(shape.contains(Point::new(cx, cy)));
        }
    }
}
