//! 2D geometry primitives.
//!
//! Everything here is a small `Copy` value type. Points double as free
//! vectors; transforms are 3x3 homogeneous matrices; bounding boxes live in
//! the owning shape's local space.

mod bounding_box;
mod color;
mod point;
mod transform;

pub use bounding_box::BoundingBox;
pub use color::Color;
pub use point::Point;
pub use transform::Transform2d;
