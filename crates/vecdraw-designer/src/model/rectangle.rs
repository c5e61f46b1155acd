use std::fmt;

use lyon::math::{point, Box2D};
use lyon::path::{Path, Winding};
use serde::{Deserialize, Serialize};

use vecdraw_core::{BoundingBox, Color, EditError, Point};

use super::{bounding_box_reshape, place_path, DesignerShape, HandleDrag, HandlePositions, ShapeKind};

/// Axis-aligned (in local space) rectangle. `w` and `h` are half-extents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub color: Color,
    pub center: Point,
    pub w: f64,
    pub h: f64,
    /// Rotation in radians
    pub rotation: f64,
}

impl Rectangle {
    pub fn new(color: Color, center: Point, w: f64, h: f64) -> Self {
        Self {
            color,
            center,
            w,
            h,
            rotation: 0.0,
        }
    }

    /// Zero-sized rectangle sitting on the drag anchor.
    pub fn anchored(color: Color, anchor: Point) -> Self {
        Self::new(color, anchor, 0.0, 0.0)
    }

    /// Spans the drag rectangle between `anchor` and `pos`.
    pub fn stretch(&mut self, anchor: Point, pos: Point) {
        self.w = (pos.x - anchor.x).abs() / 2.0;
        self.h = (pos.y - anchor.y).abs() / 2.0;
        let left = anchor.x.min(pos.x);
        let top = anchor.y.max(pos.y);
        self.center = Point::new(left + self.w, top - self.h);
    }
}

impl DesignerShape for Rectangle {
    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn center(&self) -> Point {
        self.center
    }

    fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    fn rotation(&self) -> f64 {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: f64) {
        self.rotation = rotation;
    }

    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(Point::ORIGIN, self.w, self.h)
    }

    fn is_inside(&self, q: Point, _tolerance: f64) -> bool {
        self.bounding_box().is_inside(self.to_object(q))
    }

    fn handle_positions(&self) -> HandlePositions {
        self.bounding_box().corners().into_iter().collect()
    }

    fn reshape(&mut self, drag: &HandleDrag) -> Result<(), EditError> {
        let (w, h, shift) = bounding_box_reshape(self, self.w, self.h, drag, ShapeKind::Rectangle)?;
        self.w = w;
        self.h = h;
        self.center += shift;
        Ok(())
    }

    fn outline(&self) -> Path {
        let (w, h) = (self.w.abs() as f32, self.h.abs() as f32);
        let mut builder = Path::builder();
        builder.add_rectangle(
            &Box2D::new(point(-w, -h), point(w, h)),
            Winding::Positive,
        );
        place_path(builder.build(), self.center, self.rotation)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rectangle center={} w={:.2} h={:.2} rot={:.3}",
            self.center, self.w, self.h, self.rotation
        )
    }
}
