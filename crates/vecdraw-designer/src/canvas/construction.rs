//! Shape construction: the drag-out preview and the three-click triangle.

use lyon::math::point;
use lyon::path::Path;

use vecdraw_core::{Color, DrawingMode, Point};

use crate::model::{Circle, Ellipse, Line, Rectangle, Shape, Square, Triangle};

/// Fresh zero-sized shape for a drag-created mode, sitting on `anchor`.
///
/// `None` for select mode and for triangles, which are built from clicks.
pub(crate) fn shape_for_mode(mode: DrawingMode, color: Color, anchor: Point) -> Option<Shape> {
    let shape = match mode {
        DrawingMode::Line => Shape::Line(Line::anchored(color, anchor)),
        DrawingMode::Rectangle => Shape::Rectangle(Rectangle::anchored(color, anchor)),
        DrawingMode::Square => Shape::Square(Square::anchored(color, anchor)),
        DrawingMode::Ellipse => Shape::Ellipse(Ellipse::anchored(color, anchor)),
        DrawingMode::Circle => Shape::Circle(Circle::anchored(color, anchor)),
        DrawingMode::Select | DrawingMode::Triangle => return None,
    };
    Some(shape)
}

/// A triangle collecting its vertices, in world space.
///
/// The first press fixes `p1`. The second release fixes `p2` and the third
/// release supplies `p3` and finishes the triangle.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleDraft {
    pub color: Color,
    pub p1: Point,
    pub p2: Option<Point>,
    p1_released: bool,
}

impl TriangleDraft {
    pub fn new(color: Color, p1: Point) -> Self {
        Self {
            color,
            p1,
            p2: None,
            p1_released: false,
        }
    }

    /// Feeds one pointer release. Returns the finished triangle on the
    /// third click.
    pub fn release(&mut self, pos: Point) -> Option<Triangle> {
        if !self.p1_released {
            self.p1_released = true;
            return None;
        }
        match self.p2 {
            None => {
                self.p2 = Some(pos);
                None
            }
            Some(p2) => Some(Triangle::from_world(self.color, [self.p1, p2, pos])),
        }
    }

    /// Open polyline through the vertices placed so far, ending at `pointer`.
    pub fn preview(&self, pointer: Option<Point>) -> Path {
        let mut builder = Path::builder();
        builder.begin(point(self.p1.x as f32, self.p1.y as f32));
        for p in self.p2.into_iter().chain(pointer) {
            builder.line_to(point(p.x as f32, p.y as f32));
        }
        builder.end(false);
        builder.build()
    }
}
