use std::fmt;

use lyon::math::{point, Box2D};
use lyon::path::{Path, Winding};
use serde::{Deserialize, Serialize};

use vecdraw_core::{BoundingBox, Color, EditError, Point};

use super::{place_path, Corner, DesignerShape, HandleDrag, HandlePositions, ShapeKind};

/// Square with half-side `size`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Square {
    pub color: Color,
    pub center: Point,
    pub size: f64,
    pub rotation: f64,
}

impl Square {
    pub fn new(color: Color, center: Point, size: f64) -> Self {
        Self {
            color,
            center,
            size,
            rotation: 0.0,
        }
    }

    pub fn anchored(color: Color, anchor: Point) -> Self {
        Self::new(color, anchor, 0.0)
    }

    /// Largest square that fits the drag rectangle, pinned to the anchor
    /// corner.
    pub fn stretch(&mut self, anchor: Point, pos: Point) {
        let size = (pos.x - anchor.x).abs().min((pos.y - anchor.y).abs()) / 2.0;
        let left = if pos.x < anchor.x {
            anchor.x - 2.0 * size
        } else {
            anchor.x
        };
        let top = if pos.y > anchor.y {
            anchor.y + 2.0 * size
        } else {
            anchor.y
        };
        self.size = size;
        self.center = Point::new(left + size, top - size);
    }
}

impl DesignerShape for Square {
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
        BoundingBox::new(Point::ORIGIN, self.size, self.size)
    }

    fn is_inside(&self, q: Point, _tolerance: f64) -> bool {
        self.bounding_box().is_inside(self.to_object(q))
    }

    fn handle_positions(&self) -> HandlePositions {
        self.bounding_box().corners().into_iter().collect()
    }

    /// Corner drag folded into a single side length. The grabbed corner
    /// decides the direction of growth on both axes; the opposite corner
    /// stays put.
    fn reshape(&mut self, drag: &HandleDrag) -> Result<(), EditError> {
        let grabbed = self.to_object(drag.handle);
        let corner = Corner::locate(&self.bounding_box(), grabbed, drag.index).ok_or(
            EditError::HandleMismatch {
                shape: ShapeKind::Square.as_str(),
                handle: drag.index,
            },
        )?;
        let dp = (self.to_object(drag.target()) - grabbed) / 2.0;
        let signs = corner.signs();
        let w = self.size + signs.x * dp.x;
        let h = self.size + signs.y * dp.y;
        let size = w.abs().min(h.abs());
        let grown = size - self.size;
        let shift = Point::new(signs.x * grown, signs.y * grown);
        self.size = size;
        self.center += self.to_world_vector(shift);
        Ok(())
    }

    fn outline(&self) -> Path {
        let s = self.size.abs() as f32;
        let mut builder = Path::builder();
        builder.add_rectangle(&Box2D::new(point(-s, -s), point(s, s)), Winding::Positive);
        place_path(builder.build(), self.center, self.rotation)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "square center={} size={:.2} rot={:.3}",
            self.center, self.size, self.rotation
        )
    }
}
