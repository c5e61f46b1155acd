use std::fmt;

use lyon::math::{point, vector, Angle};
use lyon::path::{Path, Winding};
use serde::{Deserialize, Serialize};

use vecdraw_core::{BoundingBox, Color, EditError, EllipseSizing, Point};

use super::{bounding_box_reshape, DesignerShape, HandleDrag, HandlePositions, ShapeKind};

/// Ellipse with half-axes `w` (local x) and `h` (local y).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub color: Color,
    pub center: Point,
    pub w: f64,
    pub h: f64,
    pub rotation: f64,
}

impl Ellipse {
    pub fn new(color: Color, center: Point, w: f64, h: f64) -> Self {
        Self {
            color,
            center,
            w,
            h,
            rotation: 0.0,
        }
    }

    pub fn anchored(color: Color, anchor: Point) -> Self {
        Self::new(color, anchor, 0.0, 0.0)
    }

    /// Inscribes the ellipse in the drag rectangle.
    pub fn stretch(&mut self, anchor: Point, pos: Point, sizing: EllipseSizing) {
        self.center = Point::new((anchor.x + pos.x) / 2.0, (anchor.y + pos.y) / 2.0);
        self.h = (pos.y - anchor.y).abs() / 2.0;
        self.w = match sizing {
            EllipseSizing::Independent => (pos.x - anchor.x).abs() / 2.0,
            EllipseSizing::LegacyAliased => self.h,
        };
    }
}

impl DesignerShape for Ellipse {
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

    /// Points on the curve count as inside.
    fn is_inside(&self, q: Point, _tolerance: f64) -> bool {
        let local = self.to_object(q);
        if !self.bounding_box().contains_inclusive(local) {
            return false;
        }
        let (w, h) = (self.w.abs(), self.h.abs());
        if w == 0.0 || h == 0.0 {
            return false;
        }
        (local.x / w).powi(2) + (local.y / h).powi(2) <= 1.0
    }

    fn handle_positions(&self) -> HandlePositions {
        self.bounding_box().corners().into_iter().collect()
    }

    fn reshape(&mut self, drag: &HandleDrag) -> Result<(), EditError> {
        let (w, h, shift) = bounding_box_reshape(self, self.w, self.h, drag, ShapeKind::Ellipse)?;
        self.w = w;
        self.h = h;
        self.center += shift;
        Ok(())
    }

    fn outline(&self) -> Path {
        let mut builder = Path::builder();
        builder.add_ellipse(
            point(self.center.x as f32, self.center.y as f32),
            vector(self.w.abs() as f32, self.h.abs() as f32),
            Angle::radians(self.rotation as f32),
            Winding::Positive,
        );
        builder.build()
    }
}

impl fmt::Display for Ellipse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ellipse center={} w={:.2} h={:.2} rot={:.3}",
            self.center, self.w, self.h, self.rotation
        )
    }
}
