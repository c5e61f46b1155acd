use proptest::prelude::*;
use vecdraw_core::constants::ZOOM_LEVELS;
use vecdraw_core::{Point, ViewportError};
use vecdraw_designer::Viewport;

#[test]
fn test_viewport_zoom_table() {
    let mut viewport = Viewport::default();
    for (index, scale) in ZOOM_LEVELS.iter().enumerate() {
        viewport.set_zoom_level(index).unwrap();
        assert_eq!(viewport.scale(), *scale);
    }
    assert!(matches!(
        viewport.set_zoom_level(ZOOM_LEVELS.len()),
        Err(ViewportError::ZoomLevelOutOfRange { .. })
    ));
    assert_eq!(viewport.scale(), 4.0);
}

#[test]
fn test_viewport_offset_applies_after_scale() {
    let mut viewport = Viewport::new(1024.0, 1024.0, 400.0, 300.0).unwrap();
    viewport.set_zoom_level(1).unwrap();
    viewport.set_offset(-20.0, 10.0);
    assert_eq!(viewport.to_view(Point::new(100.0, 100.0)), Point::new(70.0, 40.0));
    assert_eq!(viewport.to_world_distance(4.0), 8.0);
    assert_eq!(viewport.scroll_range(), (112.0, 212.0));
}

#[test]
fn test_viewport_display() {
    let mut viewport = Viewport::default();
    viewport.set_offset(1.5, 2.0);
    assert_eq!(
        viewport.to_string(),
        "Viewport(scale: 1.00, offset: (1.50, 2.00))"
    );
}

proptest! {
    #[test]
    fn prop_view_world_round_trip(
        x in -1.0e4f64..1.0e4,
        y in -1.0e4f64..1.0e4,
        ox in -1.0e3f64..1.0e3,
        oy in -1.0e3f64..1.0e3,
        level in 0usize..ZOOM_LEVELS.len(),
    ) {
        let mut viewport = Viewport::default();
        viewport.set_zoom_level(level).unwrap();
        viewport.set_offset(ox, oy);
        let p = Point::new(x, y);
        prop_assert!(viewport.to_world(viewport.to_view(p)).approx_eq(&p, 1e-9));
    }
}
