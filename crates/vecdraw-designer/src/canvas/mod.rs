//! Interaction engine: turns pointer events into shape construction,
//! selection and editing.
//!
//! Pointer positions arrive in view coordinates and are mapped into world
//! space through the [`Viewport`] before anything else happens. Every event
//! is handled to completion and ends by rebuilding the selection handles, so
//! the next press always tests against current geometry.

mod construction;
mod operations;
mod render;
mod types;

pub use construction::TriangleDraft;
pub use render::{RenderFrame, RenderItem, RenderRole, RenderStyle};
pub use types::{DrawingObject, Gesture, Handle, InteractionConfig};

use smallvec::SmallVec;

use vecdraw_core::{Color, DrawingMode, Point, ViewportError};

use crate::model::{DesignerShape, Shape};
use crate::shape_store::{ShapeId, ShapeStore};
use crate::viewport::Viewport;

use construction::shape_for_mode;

/// Canvas state managing shapes and drawing operations.
#[derive(Debug, Clone)]
pub struct Canvas {
    shape_store: ShapeStore,
    viewport: Viewport,
    config: InteractionConfig,
    mode: DrawingMode,
    /// Color given to the next new shape.
    draw_color: Color,
    /// Last color chosen by the user; alpha edits are recombined with it.
    last_color: Color,
    gesture: Gesture,
    draft: Option<Shape>,
    triangle: Option<TriangleDraft>,
    selected: Option<ShapeId>,
    handles: SmallVec<[Handle; 4]>,
    rotation_handle: Option<Handle>,
    last_pointer: Option<Point>,
}

impl Canvas {
    /// Creates a canvas with the default viewport and interaction settings.
    pub fn new() -> Self {
        Self::with_options(Viewport::default(), InteractionConfig::default())
    }

    pub fn with_options(viewport: Viewport, config: InteractionConfig) -> Self {
        Self {
            shape_store: ShapeStore::new(),
            viewport,
            config,
            mode: DrawingMode::default(),
            draw_color: Color::BLACK,
            last_color: Color::BLACK,
            gesture: Gesture::Idle,
            draft: None,
            triangle: None,
            selected: None,
            handles: SmallVec::new(),
            rotation_handle: None,
            last_pointer: None,
        }
    }

    /// Committed shapes in draw order.
    pub fn model(&self) -> &ShapeStore {
        &self.shape_store
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// The shape being dragged out, if any.
    pub fn draft(&self) -> Option<&Shape> {
        self.draft.as_ref()
    }

    /// The triangle waiting for more clicks, if any.
    pub fn triangle_draft(&self) -> Option<&TriangleDraft> {
        self.triangle.as_ref()
    }

    pub fn selected(&self) -> Option<ShapeId> {
        self.selected
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected
            .and_then(|id| self.shape_store.get(id))
            .map(|o| &o.shape)
    }

    pub(crate) fn selected_shape_mut(&mut self) -> Option<&mut Shape> {
        let id = self.selected?;
        self.shape_store.get_mut(id).map(|o| &mut o.shape)
    }

    /// Reshape handles of the selection, in handle order.
    pub fn handles(&self) -> &[Handle] {
        &self.handles
    }

    pub fn rotation_handle(&self) -> Option<Handle> {
        self.rotation_handle
    }

    /// Color the next new shape will get.
    pub fn draw_color(&self) -> Color {
        self.draw_color
    }

    /// Color shown by the toolbar swatch: the selection's color when a shape
    /// is selected, otherwise the next-shape color.
    pub fn indicator_color(&self) -> Color {
        self.selected_shape()
            .map(|s| s.color())
            .unwrap_or(self.draw_color)
    }

    /// Switches tools. Any construction in progress is abandoned; drawing
    /// modes also drop the selection.
    pub fn set_draw_mode(&mut self, mode: DrawingMode) {
        if mode.is_drawing() {
            self.clear_state();
        } else {
            self.draft = None;
            self.triangle = None;
            self.gesture = Gesture::Idle;
        }
        tracing::debug!("Draw mode {} -> {}", self.mode, mode);
        self.mode = mode;
    }

    /// Resets every piece of transient interaction state.
    pub fn clear_state(&mut self) {
        self.gesture = Gesture::Idle;
        self.draft = None;
        self.triangle = None;
        self.selected = None;
        self.handles.clear();
        self.rotation_handle = None;
    }

    /// Applies the RGB of `color` to the selection, or to the next new shape
    /// when nothing is selected. The alpha set through [`Canvas::set_alpha`]
    /// is kept; `color.a` is ignored.
    pub fn set_draw_color(&mut self, color: Color) {
        self.last_color = color.with_alpha(self.last_color.a);
        self.apply_color(self.last_color);
    }

    /// Changes only the alpha, keeping the last chosen RGB.
    pub fn set_alpha(&mut self, alpha: f64) {
        self.last_color = self.last_color.with_alpha(alpha);
        self.apply_color(self.last_color);
    }

    fn apply_color(&mut self, color: Color) {
        match self.selected_shape_mut() {
            Some(shape) => shape.set_color(color),
            None => self.draw_color = color,
        }
    }

    pub fn set_zoom_level(&mut self, index: usize) -> Result<(), ViewportError> {
        self.viewport.set_zoom_level(index)?;
        self.sync_handles();
        Ok(())
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
        self.sync_handles();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
        self.sync_handles();
    }

    pub fn set_pan_offset(&mut self, x: f64, y: f64) {
        self.viewport.set_offset(x, y);
    }

    pub fn on_pointer_down(&mut self, screen: Point) {
        let pos = self.viewport.to_world(screen);
        tracing::trace!("pointer down at {} (world {})", screen, pos);
        self.last_pointer = Some(pos);

        match self.mode {
            DrawingMode::Select => self.begin_select(pos),
            DrawingMode::Triangle => {
                let color = self.draw_color;
                self.triangle
                    .get_or_insert_with(|| TriangleDraft::new(color, pos));
                self.gesture = Gesture::Drawing { anchor: pos };
            }
            mode => {
                self.draft = shape_for_mode(mode, self.draw_color, pos);
                self.gesture = Gesture::Drawing { anchor: pos };
            }
        }
        self.sync_handles();
    }

    pub fn on_pointer_move(&mut self, screen: Point) {
        let pos = self.viewport.to_world(screen);
        tracing::trace!("pointer move to {} (world {})", screen, pos);
        self.last_pointer = Some(pos);

        match self.gesture {
            Gesture::Rotating => self.rotate_selected(pos),
            Gesture::Reshaping {
                handle,
                grab_offset,
            } => {
                if let Err(e) = self.reshape_selected(handle, grab_offset, pos) {
                    tracing::warn!("Reshape skipped: {}", e);
                }
            }
            Gesture::Moving { grab_offset } => self.move_selected(pos - grab_offset),
            Gesture::Drawing { anchor } => {
                let sizing = self.config.ellipse_sizing;
                if let Some(draft) = self.draft.as_mut() {
                    draft.stretch(anchor, pos, sizing);
                }
            }
            Gesture::Idle => {}
        }
        self.sync_handles();
    }

    pub fn on_pointer_up(&mut self, screen: Point) {
        let pos = self.viewport.to_world(screen);
        tracing::trace!("pointer up at {} (world {})", screen, pos);
        self.last_pointer = Some(pos);

        match self.gesture {
            Gesture::Drawing { anchor } => self.finish_drawing(anchor, pos),
            Gesture::Rotating | Gesture::Reshaping { .. } | Gesture::Moving { .. } => {
                if let Some(shape) = self.selected_shape_mut() {
                    shape.normalize_extents();
                }
            }
            Gesture::Idle => {}
        }
        self.gesture = Gesture::Idle;
        self.sync_handles();
    }

    /// Rotation handle, then reshape handles, then the shapes themselves
    /// from the top down.
    fn begin_select(&mut self, pos: Point) {
        if self.rotation_handle.is_some_and(|h| h.contains(pos)) {
            self.gesture = Gesture::Rotating;
            return;
        }
        if let Some((handle, h)) = self
            .handles
            .iter()
            .enumerate()
            .find(|(_, h)| h.contains(pos))
        {
            self.gesture = Gesture::Reshaping {
                handle,
                grab_offset: pos - h.center,
            };
            return;
        }

        let tolerance = self.viewport.to_world_distance(self.config.pick_tolerance);
        self.selected = self.shape_store.hit_test(pos, tolerance);
        self.gesture = match self.selected_shape() {
            Some(shape) => Gesture::Moving {
                grab_offset: pos - shape.center(),
            },
            None => Gesture::Idle,
        };
        match self.selected {
            Some(id) => tracing::debug!("Selected {}", id),
            None => tracing::debug!("Selection cleared"),
        }
    }

    fn finish_drawing(&mut self, anchor: Point, pos: Point) {
        if self.mode == DrawingMode::Triangle {
            let finished = self.triangle.as_mut().and_then(|draft| draft.release(pos));
            if let Some(triangle) = finished {
                self.triangle = None;
                self.shape_store.save_shape(Shape::Triangle(triangle));
            }
            return;
        }
        if let Some(mut shape) = self.draft.take() {
            shape.stretch(anchor, pos, self.config.ellipse_sizing);
            shape.normalize_extents();
            self.shape_store.save_shape(shape);
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}
