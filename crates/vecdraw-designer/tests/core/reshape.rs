use std::f64::consts::PI;

use proptest::prelude::*;
use vecdraw_core::{Color, DrawingMode, EditError, Point};
use vecdraw_designer::{
    Canvas, DesignerShape, Ellipse, HandleDrag, Line, Rectangle, Shape, Square, Triangle,
};

fn corner_drag(shape: &Shape, index: usize, target: Point) -> HandleDrag {
    HandleDrag {
        index,
        handle: shape.world_handles()[index],
        pointer: target,
        grab_offset: Point::ORIGIN,
    }
}

fn box_shapes(center: Point, rotation: f64) -> Vec<Shape> {
    let mut rect = Rectangle::new(Color::BLACK, center, 30.0, 12.0);
    rect.rotation = rotation;
    let mut ellipse = Ellipse::new(Color::BLACK, center, 18.0, 25.0);
    ellipse.rotation = rotation;
    let mut square = Square::new(Color::BLACK, center, 20.0);
    square.rotation = rotation;
    vec![
        Shape::Rectangle(rect),
        Shape::Ellipse(ellipse),
        Shape::Square(square),
    ]
}

#[test]
fn test_triangle_mismatch_leaves_shape_untouched() {
    let mut tri = Triangle::from_world(
        Color::BLACK,
        [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 10.0),
        ],
    );
    let before = tri.clone();
    let drag = HandleDrag {
        index: 0,
        handle: Point::new(1.0, 1.0),
        pointer: Point::new(3.0, 3.0),
        grab_offset: Point::ORIGIN,
    };
    assert_eq!(
        tri.reshape(&drag),
        Err(EditError::HandleMismatch {
            shape: "triangle",
            handle: 0
        })
    );
    assert_eq!(tri, before);
}

#[test]
fn test_line_mismatch_reported() {
    let mut line = Line::new(Color::BLACK, Point::ORIGIN, Some(Point::new(4.0, 4.0)));
    let drag = HandleDrag {
        index: 1,
        handle: Point::new(2.0, 2.0),
        pointer: Point::new(3.0, 3.0),
        grab_offset: Point::ORIGIN,
    };
    assert!(line.reshape(&drag).is_err());
    assert_eq!(line.p2, Some(Point::new(4.0, 4.0)));
}

#[test]
fn test_handle_drag_through_pointer_events() {
    let mut canvas = Canvas::new();
    canvas.set_draw_mode(DrawingMode::Rectangle);
    canvas.on_pointer_down(Point::new(10.0, 10.0));
    canvas.on_pointer_move(Point::new(50.0, 40.0));
    canvas.on_pointer_up(Point::new(50.0, 40.0));
    canvas.set_draw_mode(DrawingMode::Select);
    canvas.on_pointer_down(Point::new(30.0, 25.0));
    canvas.on_pointer_up(Point::new(30.0, 25.0));

    // Grab the top-right handle a little off its center.
    let tr = canvas.handles()[1].center;
    assert_eq!(tr, Point::new(50.0, 40.0));
    canvas.on_pointer_down(Point::new(52.0, 41.0));
    for step in 1..=4 {
        let d = step as f64 * 5.0;
        canvas.on_pointer_move(Point::new(52.0 + d, 41.0 + d));
    }
    canvas.on_pointer_up(Point::new(72.0, 61.0));

    match canvas.selected_shape() {
        Some(Shape::Rectangle(rect)) => {
            assert!((rect.w - 30.0).abs() < 1e-9);
            assert!((rect.h - 25.0).abs() < 1e-9);
            assert!(rect.center.approx_eq(&Point::new(40.0, 35.0), 1e-9));
        }
        other => panic!("expected the rectangle, got {:?}", other),
    }
}

#[test]
fn test_drag_through_zero_width_keeps_anchor() {
    let mut canvas = Canvas::new();
    canvas.set_draw_mode(DrawingMode::Rectangle);
    canvas.on_pointer_down(Point::new(10.0, 10.0));
    canvas.on_pointer_move(Point::new(50.0, 40.0));
    canvas.on_pointer_up(Point::new(50.0, 40.0));
    canvas.set_draw_mode(DrawingMode::Select);
    canvas.on_pointer_down(Point::new(30.0, 25.0));
    canvas.on_pointer_up(Point::new(30.0, 25.0));
    assert_eq!(canvas.handles()[1].center, Point::new(50.0, 40.0));

    // The first step lands exactly on the left edge, collapsing the width.
    canvas.on_pointer_down(Point::new(50.0, 40.0));
    for x in [10.0, 5.0, 0.0] {
        canvas.on_pointer_move(Point::new(x, 50.0));
    }
    canvas.on_pointer_up(Point::new(0.0, 50.0));

    match canvas.selected_shape() {
        Some(Shape::Rectangle(rect)) => {
            assert!(rect.center.approx_eq(&Point::new(5.0, 30.0), 1e-9));
            assert!((rect.w - 5.0).abs() < 1e-9);
            assert!((rect.h - 20.0).abs() < 1e-9);
        }
        other => panic!("expected the rectangle, got {:?}", other),
    }
}

#[test]
fn test_square_regrows_from_zero_size() {
    let mut shape = Shape::Square(Square::new(Color::BLACK, Point::ORIGIN, 10.0));
    let drag = corner_drag(&shape, 1, Point::new(-10.0, 10.0));
    shape.reshape(&drag).unwrap();
    match &shape {
        Shape::Square(sq) => {
            assert_eq!(sq.size, 0.0);
            assert!(sq.center.approx_eq(&Point::new(-10.0, -10.0), 1e-9));
        }
        other => panic!("expected a square, got {:?}", other),
    }

    // Every corner now coincides; the grabbed one must still grow up and right.
    let drag = corner_drag(&shape, 1, Point::new(0.0, 0.0));
    shape.reshape(&drag).unwrap();
    match &shape {
        Shape::Square(sq) => {
            assert_eq!(sq.size, 5.0);
            assert!(sq.center.approx_eq(&Point::new(-5.0, -5.0), 1e-9));
        }
        other => panic!("expected a square, got {:?}", other),
    }
}

#[test]
fn test_dragging_past_opposite_corner_normalizes_on_release() {
    let mut canvas = Canvas::new();
    canvas.set_draw_mode(DrawingMode::Ellipse);
    canvas.on_pointer_down(Point::new(0.0, 0.0));
    canvas.on_pointer_up(Point::new(20.0, 20.0));
    canvas.set_draw_mode(DrawingMode::Select);
    canvas.on_pointer_down(Point::new(10.0, 10.0));
    canvas.on_pointer_up(Point::new(10.0, 10.0));

    // Top-right handle dragged below and left of the bottom-left corner.
    canvas.on_pointer_down(Point::new(20.0, 20.0));
    canvas.on_pointer_move(Point::new(-10.0, -10.0));
    match canvas.selected_shape() {
        Some(Shape::Ellipse(e)) => assert!(e.w < 0.0 && e.h < 0.0),
        other => panic!("expected the ellipse, got {:?}", other),
    }
    canvas.on_pointer_up(Point::new(-10.0, -10.0));
    match canvas.selected_shape() {
        Some(Shape::Ellipse(e)) => {
            assert_eq!((e.w, e.h), (5.0, 5.0));
            assert_eq!(e.center, Point::new(-5.0, -5.0));
        }
        other => panic!("expected the ellipse, got {:?}", other),
    }
}

proptest! {
    #[test]
    fn prop_opposite_corner_stays_put(
        cx in -200.0f64..200.0,
        cy in -200.0f64..200.0,
        rotation in -PI..PI,
        corner in 0usize..4,
        dx in -40.0f64..40.0,
        dy in -40.0f64..40.0,
    ) {
        for mut shape in box_shapes(Point::new(cx, cy), rotation) {
            let opposite = (corner + 2) % 4;
            let anchor = shape.world_handles()[opposite];
            let target = shape.world_handles()[corner] + Point::new(dx, dy);
            let drag = corner_drag(&shape, corner, target);
            prop_assert!(shape.reshape(&drag).is_ok());
            let after = shape.world_handles()[opposite];
            prop_assert!(
                after.approx_eq(&anchor, 1e-7),
                "{} moved its anchor from {} to {}",
                shape.kind(),
                anchor,
                after
            );
        }
    }

    #[test]
    fn prop_grabbed_corner_follows_pointer(
        rotation in -PI..PI,
        corner in 0usize..4,
        dx in -40.0f64..40.0,
        dy in -40.0f64..40.0,
    ) {
        let mut shape = box_shapes(Point::new(5.0, -5.0), rotation).remove(0);
        let target = shape.world_handles()[corner] + Point::new(dx, dy);
        let drag = corner_drag(&shape, corner, target);
        prop_assert!(shape.reshape(&drag).is_ok());
        prop_assert!(shape.world_handles()[corner].approx_eq(&target, 1e-7));
    }
}
