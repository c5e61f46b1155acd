use std::fmt;

use lyon::math::point;
use lyon::path::Path;
use serde::{Deserialize, Serialize};

use vecdraw_core::constants::HANDLE_MATCH_EPSILON;
use vecdraw_core::{BoundingBox, Color, EditError, Point, Transform2d};

use super::{DesignerShape, HandleDrag, HandlePositions, ShapeKind};

/// Line segment stored directly in world coordinates.
///
/// `p2` is `None` until the first drag sample arrives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub color: Color,
    pub p1: Point,
    pub p2: Option<Point>,
}

impl Line {
    pub fn new(color: Color, p1: Point, p2: Option<Point>) -> Self {
        Self { color, p1, p2 }
    }

    pub fn anchored(color: Color, anchor: Point) -> Self {
        Self::new(color, anchor, None)
    }

    pub fn stretch(&mut self, pos: Point) {
        self.p2 = Some(pos);
    }

    pub fn endpoints(&self) -> Option<(Point, Point)> {
        self.p2.map(|p2| (self.p1, p2))
    }
}

impl DesignerShape for Line {
    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Midpoint of the segment.
    fn center(&self) -> Point {
        match self.p2 {
            Some(p2) => (self.p1 + p2) / 2.0,
            None => self.p1,
        }
    }

    /// Translates both endpoints.
    fn set_center(&mut self, center: Point) {
        let delta = center - self.center();
        self.p1 += delta;
        if let Some(p2) = self.p2.as_mut() {
            *p2 += delta;
        }
    }

    fn rotation(&self) -> f64 {
        0.0
    }

    fn set_rotation(&mut self, _rotation: f64) {}

    fn bounding_box(&self) -> BoundingBox {
        match self.p2 {
            Some(p2) => BoundingBox::from_points(&[self.p1, p2])
                .unwrap_or_else(|| BoundingBox::new(self.p1, 0.0, 0.0)),
            None => BoundingBox::new(self.p1, 0.0, 0.0),
        }
    }

    /// Within `tolerance` of the segment, strictly between the endpoints.
    fn is_inside(&self, q: Point, tolerance: f64) -> bool {
        let Some((p1, p2)) = self.endpoints() else {
            return false;
        };
        let Ok(dir) = (p2 - p1).normalized() else {
            return false;
        };
        let len = p1.distance_to(&p2);
        let v = q - p1;
        let along = v.dot(dir);
        if along <= 0.0 || along >= len {
            return false;
        }
        v.dot(dir.perp()).abs() < tolerance
    }

    fn handle_positions(&self) -> HandlePositions {
        let mut handles = HandlePositions::new();
        handles.push(self.p1);
        if let Some(p2) = self.p2 {
            handles.push(p2);
        }
        handles
    }

    fn reshape(&mut self, drag: &HandleDrag) -> Result<(), EditError> {
        let target = drag.target();
        if drag.handle.approx_eq(&self.p1, HANDLE_MATCH_EPSILON) {
            self.p1 = target;
            return Ok(());
        }
        match self.p2.as_mut() {
            Some(p2) if drag.handle.approx_eq(p2, HANDLE_MATCH_EPSILON) => {
                *p2 = target;
                Ok(())
            }
            _ => Err(EditError::HandleMismatch {
                shape: ShapeKind::Line.as_str(),
                handle: drag.index,
            }),
        }
    }

    fn outline(&self) -> Path {
        let mut builder = Path::builder();
        if let Some((p1, p2)) = self.endpoints() {
            builder.begin(point(p1.x as f32, p1.y as f32));
            builder.line_to(point(p2.x as f32, p2.y as f32));
            builder.end(false);
        }
        builder.build()
    }

    fn world_transform(&self) -> Transform2d {
        Transform2d::identity()
    }

    fn object_transform(&self) -> Transform2d {
        Transform2d::identity()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.p2 {
            Some(p2) => write!(f, "line p1={} p2={}", self.p1, p2),
            None => write!(f, "line p1={} p2=-", self.p1),
        }
    }
}
