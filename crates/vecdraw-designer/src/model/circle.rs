use std::fmt;

use lyon::math::point;
use lyon::path::{Path, Winding};
use serde::{Deserialize, Serialize};

use vecdraw_core::{BoundingBox, Color, EditError, Point};

use super::{DesignerShape, HandleDrag, HandlePositions};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub color: Color,
    pub center: Point,
    pub radius: f64,
    /// Only affects where the handles sit.
    pub rotation: f64,
}

impl Circle {
    pub fn new(color: Color, center: Point, radius: f64) -> Self {
        Self {
            color,
            center,
            radius,
            rotation: 0.0,
        }
    }

    pub fn anchored(color: Color, anchor: Point) -> Self {
        Self::new(color, anchor, 0.0)
    }

    /// Largest circle that fits the drag rectangle, grown away from the
    /// anchor.
    pub fn stretch(&mut self, anchor: Point, pos: Point) {
        let r = ((pos.x - anchor.x).abs() / 2.0).min((pos.y - anchor.y).abs() / 2.0);
        let cx = if pos.x < anchor.x {
            anchor.x - r
        } else {
            anchor.x + r
        };
        let cy = if pos.y < anchor.y {
            anchor.y - r
        } else {
            anchor.y + r
        };
        self.radius = r;
        self.center = Point::new(cx, cy);
    }
}

impl DesignerShape for Circle {
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
        BoundingBox::new(Point::ORIGIN, self.radius, self.radius)
    }

    fn is_inside(&self, q: Point, _tolerance: f64) -> bool {
        q.distance_to(&self.center) < self.radius.abs()
    }

    fn handle_positions(&self) -> HandlePositions {
        self.bounding_box().corners().into_iter().collect()
    }

    /// Any corner handle sets the radius; the center does not move.
    fn reshape(&mut self, drag: &HandleDrag) -> Result<(), EditError> {
        let local = self.to_object(drag.pointer);
        self.radius = local.x.abs().min(local.y.abs());
        Ok(())
    }

    fn outline(&self) -> Path {
        let mut builder = Path::builder();
        builder.add_circle(
            point(self.center.x as f32, self.center.y as f32),
            self.radius.abs() as f32,
            Winding::Positive,
        );
        builder.build()
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "circle center={} radius={:.2}",
            self.center, self.radius
        )
    }
}
