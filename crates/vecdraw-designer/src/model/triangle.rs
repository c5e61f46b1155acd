use std::fmt;

use lyon::path::Path;
use serde::{Deserialize, Serialize};

use vecdraw_core::constants::HANDLE_MATCH_EPSILON;
use vecdraw_core::{BoundingBox, Color, EditError, Point};

use super::{place_path, polygon_path, DesignerShape, HandleDrag, HandlePositions, ShapeKind};

/// Triangle with vertices stored in local space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub color: Color,
    pub center: Point,
    pub points: [Point; 3],
    pub rotation: f64,
}

impl Triangle {
    pub fn new(color: Color, center: Point, points: [Point; 3]) -> Self {
        Self {
            color,
            center,
            points,
            rotation: 0.0,
        }
    }

    /// Builds an unrotated triangle from world-space vertices, centered on
    /// their bounding box.
    pub fn from_world(color: Color, vertices: [Point; 3]) -> Self {
        let center = BoundingBox::from_points(&vertices)
            .map(|bb| bb.center)
            .unwrap_or(vertices[0]);
        let points = vertices.map(|v| v - center);
        Self::new(color, center, points)
    }

    pub fn world_vertices(&self) -> [Point; 3] {
        let to_world = self.world_transform();
        self.points.map(|p| to_world.transform(p))
    }
}

impl DesignerShape for Triangle {
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
        BoundingBox::from_points(&self.points)
            .unwrap_or_else(|| BoundingBox::new(Point::ORIGIN, 0.0, 0.0))
    }

    /// Strictly inside all three edges, for either winding.
    fn is_inside(&self, q: Point, _tolerance: f64) -> bool {
        let local = self.to_object(q);
        if !self.bounding_box().is_inside(local) {
            return false;
        }
        let [a, b, c] = self.points;
        let sides = [(a, b), (b, c), (c, a)].map(|(from, to)| (to - from).perp().dot(local - from));
        sides.iter().all(|s| *s > 0.0) || sides.iter().all(|s| *s < 0.0)
    }

    fn handle_positions(&self) -> HandlePositions {
        self.points.into_iter().collect()
    }

    fn reshape(&mut self, drag: &HandleDrag) -> Result<(), EditError> {
        let vertex = self
            .world_vertices()
            .iter()
            .position(|v| v.approx_eq(&drag.handle, HANDLE_MATCH_EPSILON))
            .ok_or(EditError::HandleMismatch {
                shape: ShapeKind::Triangle.as_str(),
                handle: drag.index,
            })?;
        self.points[vertex] = self.to_object(drag.target());
        Ok(())
    }

    fn outline(&self) -> Path {
        place_path(polygon_path(&self.points), self.center, self.rotation)
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.world_vertices();
        write!(f, "triangle p1={} p2={} p3={}", a, b, c)
    }
}
