use std::fmt;

use lyon::math::{point, vector, Angle, Transform};
use lyon::path::Path;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use vecdraw_core::constants::{DEFAULT_PICK_TOLERANCE, HANDLE_MATCH_EPSILON};
use vecdraw_core::{BoundingBox, Color, EditError, EllipseSizing, Point, Transform2d};

mod circle;
mod ellipse;
mod line;
mod rectangle;
mod square;
mod triangle;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use line::Line;
pub use rectangle::Rectangle;
pub use square::Square;
pub use triangle::Triangle;

/// Handle anchor points in local space. Never more than four.
pub type HandlePositions = SmallVec<[Point; 4]>;

/// A handle drag in progress, all positions in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleDrag {
    /// Index into the active handle list.
    pub index: usize,
    /// Current center of the grabbed handle.
    pub handle: Point,
    /// Current pointer position.
    pub pointer: Point,
    /// Pointer minus handle center at the moment the handle was grabbed.
    pub grab_offset: Point,
}

impl HandleDrag {
    /// Where the grabbed control point should end up.
    pub fn target(&self) -> Point {
        self.pointer - self.grab_offset
    }
}

pub trait DesignerShape {
    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);
    fn center(&self) -> Point;
    /// Moves the shape so that its center lands on `center`.
    fn set_center(&mut self, center: Point);
    /// Rotation in radians, counter-clockwise.
    fn rotation(&self) -> f64;
    fn set_rotation(&mut self, rotation: f64);

    /// Bounding box in local space.
    fn bounding_box(&self) -> BoundingBox;
    /// Hit test against a world-space point. `tolerance` only applies to
    /// thin features.
    fn is_inside(&self, q: Point, tolerance: f64) -> bool;
    /// Handle anchors in local space.
    fn handle_positions(&self) -> HandlePositions;
    /// Applies a handle drag, leaving the shape untouched on error.
    fn reshape(&mut self, drag: &HandleDrag) -> Result<(), EditError>;
    /// World-space outline for rendering.
    fn outline(&self) -> Path;

    fn world_transform(&self) -> Transform2d {
        Transform2d::object_to_world(self.center(), self.rotation())
    }

    fn object_transform(&self) -> Transform2d {
        Transform2d::world_to_object(self.center(), self.rotation())
    }

    fn to_world(&self, p: Point) -> Point {
        self.world_transform().transform(p)
    }

    fn to_object(&self, p: Point) -> Point {
        self.object_transform().transform(p)
    }

    /// Maps a local-space displacement to world space (rotation only).
    fn to_world_vector(&self, v: Point) -> Point {
        self.world_transform().transform_vector(v)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Line,
    Rectangle,
    Square,
    Ellipse,
    Circle,
    Triangle,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Square => "square",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
        }
    }

    /// Lines are edited through their endpoints only.
    pub fn has_rotation_handle(&self) -> bool {
        !matches!(self, ShapeKind::Line)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(Line),
    Rectangle(Rectangle),
    Square(Square),
    Ellipse(Ellipse),
    Circle(Circle),
    Triangle(Triangle),
}

impl DesignerShape for Shape {
    fn color(&self) -> Color {
        match self {
            Shape::Line(s) => s.color(),
            Shape::Rectangle(s) => s.color(),
            Shape::Square(s) => s.color(),
            Shape::Ellipse(s) => s.color(),
            Shape::Circle(s) => s.color(),
            Shape::Triangle(s) => s.color(),
        }
    }

    fn set_color(&mut self, color: Color) {
        match self {
            Shape::Line(s) => s.set_color(color),
            Shape::Rectangle(s) => s.set_color(color),
            Shape::Square(s) => s.set_color(color),
            Shape::Ellipse(s) => s.set_color(color),
            Shape::Circle(s) => s.set_color(color),
            Shape::Triangle(s) => s.set_color(color),
        }
    }

    fn center(&self) -> Point {
        match self {
            Shape::Line(s) => s.center(),
            Shape::Rectangle(s) => s.center(),
            Shape::Square(s) => s.center(),
            Shape::Ellipse(s) => s.center(),
            Shape::Circle(s) => s.center(),
            Shape::Triangle(s) => s.center(),
        }
    }

    fn set_center(&mut self, center: Point) {
        match self {
            Shape::Line(s) => s.set_center(center),
            Shape::Rectangle(s) => s.set_center(center),
            Shape::Square(s) => s.set_center(center),
            Shape::Ellipse(s) => s.set_center(center),
            Shape::Circle(s) => s.set_center(center),
            Shape::Triangle(s) => s.set_center(center),
        }
    }

    fn rotation(&self) -> f64 {
        match self {
            Shape::Line(s) => s.rotation(),
            Shape::Rectangle(s) => s.rotation(),
            Shape::Square(s) => s.rotation(),
            Shape::Ellipse(s) => s.rotation(),
            Shape::Circle(s) => s.rotation(),
            Shape::Triangle(s) => s.rotation(),
        }
    }

    fn set_rotation(&mut self, rotation: f64) {
        match self {
            Shape::Line(s) => s.set_rotation(rotation),
            Shape::Rectangle(s) => s.set_rotation(rotation),
            Shape::Square(s) => s.set_rotation(rotation),
            Shape::Ellipse(s) => s.set_rotation(rotation),
            Shape::Circle(s) => s.set_rotation(rotation),
            Shape::Triangle(s) => s.set_rotation(rotation),
        }
    }

    fn bounding_box(&self) -> BoundingBox {
        match self {
            Shape::Line(s) => s.bounding_box(),
            Shape::Rectangle(s) => s.bounding_box(),
            Shape::Square(s) => s.bounding_box(),
            Shape::Ellipse(s) => s.bounding_box(),
            Shape::Circle(s) => s.bounding_box(),
            Shape::Triangle(s) => s.bounding_box(),
        }
    }

    fn is_inside(&self, q: Point, tolerance: f64) -> bool {
        match self {
            Shape::Line(s) => s.is_inside(q, tolerance),
            Shape::Rectangle(s) => s.is_inside(q, tolerance),
            Shape::Square(s) => s.is_inside(q, tolerance),
            Shape::Ellipse(s) => s.is_inside(q, tolerance),
            Shape::Circle(s) => s.is_inside(q, tolerance),
            Shape::Triangle(s) => s.is_inside(q, tolerance),
        }
    }

    fn handle_positions(&self) -> HandlePositions {
        match self {
            Shape::Line(s) => s.handle_positions(),
            Shape::Rectangle(s) => s.handle_positions(),
            Shape::Square(s) => s.handle_positions(),
            Shape::Ellipse(s) => s.handle_positions(),
            Shape::Circle(s) => s.handle_positions(),
            Shape::Triangle(s) => s.handle_positions(),
        }
    }

    fn reshape(&mut self, drag: &HandleDrag) -> Result<(), EditError> {
        match self {
            Shape::Line(s) => s.reshape(drag),
            Shape::Rectangle(s) => s.reshape(drag),
            Shape::Square(s) => s.reshape(drag),
            Shape::Ellipse(s) => s.reshape(drag),
            Shape::Circle(s) => s.reshape(drag),
            Shape::Triangle(s) => s.reshape(drag),
        }
    }

    fn outline(&self) -> Path {
        match self {
            Shape::Line(s) => s.outline(),
            Shape::Rectangle(s) => s.outline(),
            Shape::Square(s) => s.outline(),
            Shape::Ellipse(s) => s.outline(),
            Shape::Circle(s) => s.outline(),
            Shape::Triangle(s) => s.outline(),
        }
    }

    fn world_transform(&self) -> Transform2d {
        match self {
            Shape::Line(s) => s.world_transform(),
            _ => Transform2d::object_to_world(self.center(), self.rotation()),
        }
    }

    fn object_transform(&self) -> Transform2d {
        match self {
            Shape::Line(s) => s.object_transform(),
            _ => Transform2d::world_to_object(self.center(), self.rotation()),
        }
    }
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Line(_) => ShapeKind::Line,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Square(_) => ShapeKind::Square,
            Shape::Ellipse(_) => ShapeKind::Ellipse,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Triangle(_) => ShapeKind::Triangle,
        }
    }

    /// Hit test with the default pick band.
    pub fn contains(&self, q: Point) -> bool {
        self.is_inside(q, DEFAULT_PICK_TOLERANCE)
    }

    /// Handle anchors converted to world space.
    pub fn world_handles(&self) -> HandlePositions {
        let to_world = self.world_transform();
        self.handle_positions()
            .into_iter()
            .map(|p| to_world.transform(p))
            .collect()
    }

    /// Recomputes provisional parameters while the shape is being dragged
    /// out from `anchor` to `pos`. Triangles are built click by click and
    /// are left alone.
    pub fn stretch(&mut self, anchor: Point, pos: Point, sizing: EllipseSizing) {
        match self {
            Shape::Line(s) => s.stretch(pos),
            Shape::Rectangle(s) => s.stretch(anchor, pos),
            Shape::Square(s) => s.stretch(anchor, pos),
            Shape::Ellipse(s) => s.stretch(anchor, pos, sizing),
            Shape::Circle(s) => s.stretch(anchor, pos),
            Shape::Triangle(_) => {}
        }
    }

    /// Replaces negative extents left behind by a reshape with their magnitude.
    pub fn normalize_extents(&mut self) {
        match self {
            Shape::Rectangle(s) => {
                s.w = s.w.abs();
                s.h = s.h.abs();
            }
            Shape::Ellipse(s) => {
                s.w = s.w.abs();
                s.h = s.h.abs();
            }
            Shape::Square(s) => s.size = s.size.abs(),
            Shape::Circle(s) => s.radius = s.radius.abs(),
            Shape::Line(_) | Shape::Triangle(_) => {}
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Line(s) => s.fmt(f),
            Shape::Rectangle(s) => s.fmt(f),
            Shape::Square(s) => s.fmt(f),
            Shape::Ellipse(s) => s.fmt(f),
            Shape::Circle(s) => s.fmt(f),
            Shape::Triangle(s) => s.fmt(f),
        }
    }
}

/// Corner of a local-space bounding box, in handle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    /// Direction of growth for each axis when this corner moves outward.
    pub(crate) fn signs(self) -> Point {
        match self {
            Corner::TopLeft => Point::new(-1.0, 1.0),
            Corner::TopRight => Point::new(1.0, 1.0),
            Corner::BottomRight => Point::new(1.0, -1.0),
            Corner::BottomLeft => Point::new(-1.0, -1.0),
        }
    }

    /// The corner of `bb` at `local`, if any. Corners coincide on a box
    /// with zero width or height, so the corner at handle `index` wins
    /// whenever it matches.
    pub(crate) fn locate(bb: &BoundingBox, local: Point, index: usize) -> Option<Corner> {
        let corners = bb.corners();
        let matches = |i: usize| corners[i].approx_eq(&local, HANDLE_MATCH_EPSILON);
        if index < corners.len() && matches(index) {
            return Some(Self::ALL[index]);
        }
        (0..corners.len()).find(|&i| matches(i)).map(|i| Self::ALL[i])
    }
}

/// Corner-drag reshape shared by every box-shaped variant.
///
/// Returns the new half-extents and the world-space shift of the center that
/// keeps the opposite corner in place.
pub(crate) fn bounding_box_reshape<S: DesignerShape>(
    shape: &S,
    w: f64,
    h: f64,
    drag: &HandleDrag,
    kind: ShapeKind,
) -> Result<(f64, f64, Point), EditError> {
    let grabbed = shape.to_object(drag.handle);
    let corner = Corner::locate(&shape.bounding_box(), grabbed, drag.index).ok_or(
        EditError::HandleMismatch {
            shape: kind.as_str(),
            handle: drag.index,
        },
    )?;
    let target = shape.to_object(drag.target());
    let dp = (target - grabbed) / 2.0;
    let signs = corner.signs();
    Ok((
        w + signs.x * dp.x,
        h + signs.y * dp.y,
        shape.to_world_vector(dp),
    ))
}

/// Closed polygon through the given vertices.
pub(crate) fn polygon_path(vertices: &[Point]) -> Path {
    let mut builder = Path::builder();
    if let Some((first, rest)) = vertices.split_first() {
        builder.begin(point(first.x as f32, first.y as f32));
        for v in rest {
            builder.line_to(point(v.x as f32, v.y as f32));
        }
        builder.close();
    }
    builder.build()
}

/// Moves a local-space path into world space: rotate about the local
/// origin, then translate to the shape center.
pub(crate) fn place_path(path: Path, center: Point, rotation: f64) -> Path {
    let mut transform = Transform::identity();
    if rotation.abs() > 1e-9 {
        transform = transform.then_rotate(Angle::radians(rotation as f32));
    }
    let transform = transform.then_translate(vector(center.x as f32, center.y as f32));
    path.transformed(&transform)
}
