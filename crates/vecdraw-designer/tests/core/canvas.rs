use vecdraw_core::{Color, DrawingMode, EllipseSizing, Point};
use vecdraw_designer::{Canvas, DesignerShape, Gesture, InteractionConfig, Shape, Viewport};

fn press_drag_release(canvas: &mut Canvas, from: Point, to: Point) {
    canvas.on_pointer_down(from);
    canvas.on_pointer_move(to);
    canvas.on_pointer_up(to);
}

fn click(canvas: &mut Canvas, at: Point) {
    canvas.on_pointer_down(at);
    canvas.on_pointer_up(at);
}

#[test]
fn test_rectangle_scenario() {
    let mut canvas = Canvas::new();
    let color = Color::rgba(0.2, 0.3, 0.4, 1.0);
    canvas.set_draw_color(color);
    canvas.set_draw_mode(DrawingMode::Rectangle);
    press_drag_release(&mut canvas, Point::new(10.0, 10.0), Point::new(50.0, 40.0));

    assert_eq!(canvas.model().len(), 1);
    match canvas.model().shapes().next() {
        Some(Shape::Rectangle(rect)) => {
            assert_eq!(rect.center, Point::new(30.0, 25.0));
            assert_eq!(rect.w, 20.0);
            assert_eq!(rect.h, 15.0);
            assert_eq!(rect.color, color);
        }
        other => panic!("expected a rectangle, got {:?}", other),
    }
    assert!(canvas.draft().is_none());
}

#[test]
fn test_triangle_needs_three_clicks() {
    let mut canvas = Canvas::new();
    canvas.set_draw_mode(DrawingMode::Triangle);

    click(&mut canvas, Point::new(0.0, 0.0));
    assert!(canvas.model().is_empty());
    click(&mut canvas, Point::new(10.0, 0.0));
    assert!(canvas.model().is_empty());
    click(&mut canvas, Point::new(5.0, 10.0));
    assert_eq!(canvas.model().len(), 1);
    assert!(canvas.triangle_draft().is_none());

    match canvas.model().shapes().next() {
        Some(Shape::Triangle(tri)) => {
            assert_eq!(tri.center, Point::new(5.0, 5.0));
            assert_eq!(
                tri.points,
                [
                    Point::new(-5.0, -5.0),
                    Point::new(5.0, -5.0),
                    Point::new(0.0, 5.0),
                ]
            );
        }
        other => panic!("expected a triangle, got {:?}", other),
    }

    // A fourth click starts the next triangle.
    click(&mut canvas, Point::new(50.0, 50.0));
    assert_eq!(canvas.model().len(), 1);
    assert!(canvas.triangle_draft().is_some());
}

#[test]
fn test_mode_change_drops_pending_triangle() {
    let mut canvas = Canvas::new();
    canvas.set_draw_mode(DrawingMode::Triangle);
    click(&mut canvas, Point::new(0.0, 0.0));
    click(&mut canvas, Point::new(10.0, 0.0));
    canvas.set_draw_mode(DrawingMode::Circle);
    assert!(canvas.triangle_draft().is_none());
    assert!(canvas.model().is_empty());
}

#[test]
fn test_select_topmost_and_move() {
    let mut canvas = Canvas::new();
    canvas.set_draw_mode(DrawingMode::Rectangle);
    press_drag_release(&mut canvas, Point::new(0.0, 0.0), Point::new(100.0, 100.0));
    canvas.set_draw_mode(DrawingMode::Circle);
    press_drag_release(&mut canvas, Point::new(40.0, 40.0), Point::new(60.0, 60.0));

    canvas.set_draw_mode(DrawingMode::Select);
    canvas.on_pointer_down(Point::new(52.0, 50.0));
    let circle_id = canvas.selected().expect("circle picked");
    assert!(matches!(canvas.selected_shape(), Some(Shape::Circle(_))));
    assert_eq!(
        canvas.gesture(),
        Gesture::Moving {
            grab_offset: Point::new(2.0, 0.0)
        }
    );

    canvas.on_pointer_move(Point::new(82.0, 70.0));
    canvas.on_pointer_up(Point::new(82.0, 70.0));
    let moved = canvas.model().get(circle_id).expect("stored");
    assert_eq!(moved.shape.center(), Point::new(80.0, 70.0));
    assert_eq!(canvas.gesture(), Gesture::Idle);
}

#[test]
fn test_rotate_through_handle() {
    let mut canvas = Canvas::new();
    canvas.set_draw_mode(DrawingMode::Rectangle);
    press_drag_release(&mut canvas, Point::new(10.0, 10.0), Point::new(50.0, 40.0));
    canvas.set_draw_mode(DrawingMode::Select);
    click(&mut canvas, Point::new(30.0, 25.0));

    let rh = canvas.rotation_handle().expect("rotation handle");
    canvas.on_pointer_down(rh.center);
    assert_eq!(canvas.gesture(), Gesture::Rotating);
    canvas.on_pointer_move(Point::new(30.0, 60.0));
    canvas.on_pointer_up(Point::new(30.0, 60.0));

    let shape = canvas.selected_shape().expect("still selected");
    assert!((shape.rotation() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    let rh = canvas.rotation_handle().expect("rotation handle");
    assert!(rh.center.approx_eq(&Point::new(30.0, 25.0 + 15.0 + 20.0), 1e-9));
}

#[test]
fn test_line_pick_band_follows_zoom() {
    let mut canvas = Canvas::new();
    canvas.set_draw_mode(DrawingMode::Line);
    press_drag_release(&mut canvas, Point::new(0.0, 0.0), Point::new(100.0, 0.0));
    canvas.set_draw_mode(DrawingMode::Select);

    // 3 view units away at 400%: 0.75 world units, inside the band.
    canvas.set_zoom_level(4).unwrap();
    click(&mut canvas, Point::new(200.0, 3.0));
    assert!(canvas.selected().is_some());

    // 6 view units away is outside regardless of zoom.
    click(&mut canvas, Point::new(200.0, 6.0));
    assert!(canvas.selected().is_none());
}

#[test]
fn test_pointer_maps_through_viewport() {
    let mut canvas = Canvas::new();
    canvas.set_zoom_level(3).unwrap();
    canvas.set_pan_offset(20.0, 20.0);
    canvas.set_draw_mode(DrawingMode::Circle);
    press_drag_release(&mut canvas, Point::new(0.0, 0.0), Point::new(40.0, 40.0));

    match canvas.model().shapes().next() {
        Some(Shape::Circle(c)) => {
            assert_eq!(c.center, Point::new(20.0, 20.0));
            assert_eq!(c.radius, 10.0);
        }
        other => panic!("expected a circle, got {:?}", other),
    };
}

#[test]
fn test_legacy_ellipse_sizing() {
    let config = InteractionConfig {
        ellipse_sizing: EllipseSizing::LegacyAliased,
        ..InteractionConfig::default()
    };
    let mut canvas = Canvas::with_options(Viewport::default(), config);
    canvas.set_draw_mode(DrawingMode::Ellipse);
    press_drag_release(&mut canvas, Point::new(0.0, 0.0), Point::new(60.0, 20.0));
    match canvas.model().shapes().next() {
        Some(Shape::Ellipse(e)) => assert_eq!((e.w, e.h), (10.0, 10.0)),
        other => panic!("expected an ellipse, got {:?}", other),
    };
}

#[test]
fn test_click_without_drag_commits_degenerate_shape() {
    let mut canvas = Canvas::new();
    canvas.set_draw_mode(DrawingMode::Square);
    click(&mut canvas, Point::new(5.0, 5.0));
    match canvas.model().shapes().next() {
        Some(Shape::Square(sq)) => assert_eq!(sq.size, 0.0),
        other => panic!("expected a square, got {:?}", other),
    };
}
