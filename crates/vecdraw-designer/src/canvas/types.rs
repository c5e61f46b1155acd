//! Canvas type definitions: DrawingObject, Handle, Gesture, InteractionConfig.

use vecdraw_core::constants::{
    DEFAULT_PICK_TOLERANCE, HANDLE_RADIUS, ROTATION_HANDLE_OFFSET, ROTATION_HANDLE_RADIUS,
};
use vecdraw_core::{EllipseSizing, Point};

use crate::model::Shape;
use crate::shape_store::ShapeId;

/// A committed shape together with its store id.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingObject {
    pub id: ShapeId,
    pub shape: Shape,
}

impl DrawingObject {
    pub fn new(id: ShapeId, shape: Shape) -> Self {
        Self { id, shape }
    }
}

/// Circular grab target in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    pub center: Point,
    pub radius: f64,
}

impl Handle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn contains(&self, q: Point) -> bool {
        q.distance_to(&self.center) < self.radius
    }
}

/// What the current press-drag-release sequence is doing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// Dragging the rotation handle of the selection.
    Rotating,
    /// Dragging handle `handle`; `grab_offset` is pointer minus handle center.
    Reshaping { handle: usize, grab_offset: Point },
    /// Dragging the selection body; `grab_offset` is pointer minus shape center.
    Moving { grab_offset: Point },
    /// Stretching a new shape out from `anchor`.
    Drawing { anchor: Point },
}

/// Screen-space sizes and policies used by the interaction engine.
///
/// Distances are in view units and are converted with the current zoom
/// scale so they stay constant on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionConfig {
    pub pick_tolerance: f64,
    pub handle_radius: f64,
    pub rotation_handle_radius: f64,
    pub rotation_handle_offset: f64,
    pub ellipse_sizing: EllipseSizing,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            pick_tolerance: DEFAULT_PICK_TOLERANCE,
            handle_radius: HANDLE_RADIUS,
            rotation_handle_radius: ROTATION_HANDLE_RADIUS,
            rotation_handle_offset: ROTATION_HANDLE_OFFSET,
            ellipse_sizing: EllipseSizing::default(),
        }
    }
}
