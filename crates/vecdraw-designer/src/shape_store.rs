//! Ordered storage for committed shapes.
//!
//! Insertion order is z-order: later shapes are drawn on top and are hit
//! tested first. Shapes are only ever appended; edits happen in place.

use std::fmt;

use vecdraw_core::Point;

use crate::canvas::DrawingObject;
use crate::model::{DesignerShape, Shape};

/// Stable handle to a stored shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(u64);

impl ShapeId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct ShapeStore {
    objects: Vec<DrawingObject>,
    next_id: u64,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            next_id: 1,
        }
    }

    fn generate_id(&mut self) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Appends `shape` on top of everything stored so far.
    pub fn save_shape(&mut self, shape: Shape) -> ShapeId {
        let id = self.generate_id();
        tracing::debug!("Saved {} {}", shape.kind(), id);
        self.objects.push(DrawingObject::new(id, shape));
        id
    }

    pub fn get(&self, id: ShapeId) -> Option<&DrawingObject> {
        self.position(id).map(|i| &self.objects[i])
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut DrawingObject> {
        self.position(id).map(move |i| &mut self.objects[i])
    }

    fn position(&self, id: ShapeId) -> Option<usize> {
        // Ids are handed out in increasing order and never removed.
        self.objects.binary_search_by_key(&id, |o| o.id).ok()
    }

    /// Shapes back-to-front.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &DrawingObject> {
        self.objects.iter()
    }

    pub fn shapes(&self) -> impl DoubleEndedIterator<Item = &Shape> {
        self.objects.iter().map(|o| &o.shape)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Topmost shape containing the world-space point `q`.
    pub fn hit_test(&self, q: Point, tolerance: f64) -> Option<ShapeId> {
        self.objects
            .iter()
            .rev()
            .find(|o| o.shape.is_inside(q, tolerance))
            .map(|o| o.id)
    }
}

impl Default for ShapeStore {
    fn default() -> Self {
        Self::new()
    }
}
