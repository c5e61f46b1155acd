//! Editing operations on the selected shape.

use smallvec::SmallVec;

use vecdraw_core::{EditError, Point};

use super::types::Handle;
use super::Canvas;
use crate::model::{DesignerShape, HandleDrag};

impl Canvas {
    /// Points the selection's local x axis at `pos`.
    pub(crate) fn rotate_selected(&mut self, pos: Point) {
        let Some(shape) = self.selected_shape_mut() else {
            return;
        };
        let center = shape.center();
        // A pointer exactly on the center has no direction; keep the rotation.
        if let Ok(angle) = (pos - center).try_angle_between(Point::UNIT_X) {
            let angle = if pos.y < center.y { -angle } else { angle };
            shape.set_rotation(angle);
        }
    }

    /// Drags handle `handle` so that it follows `pos - grab_offset`.
    ///
    /// The shape is left untouched when the handle does not line up with its
    /// geometry.
    pub(crate) fn reshape_selected(
        &mut self,
        handle: usize,
        grab_offset: Point,
        pos: Point,
    ) -> Result<(), EditError> {
        let count = self.handles.len();
        let current = self
            .handles
            .get(handle)
            .copied()
            .ok_or(EditError::HandleOutOfRange { handle, count })?;
        let drag = HandleDrag {
            index: handle,
            handle: current.center,
            pointer: pos,
            grab_offset,
        };
        let shape = self.selected_shape_mut().ok_or(EditError::NoSelection)?;
        shape.reshape(&drag)
    }

    /// Moves the selection so its center lands on `center`.
    pub(crate) fn move_selected(&mut self, center: Point) {
        if let Some(shape) = self.selected_shape_mut() {
            shape.set_center(center);
        }
    }

    /// Rebuilds the reshape and rotation handles from the selection's
    /// current geometry, sized for the current zoom.
    pub(crate) fn sync_handles(&mut self) {
        self.handles.clear();
        self.rotation_handle = None;

        let scale = self.viewport.scale();
        let config = self.config;
        let Some(shape) = self.selected_shape() else {
            return;
        };

        let radius = config.handle_radius / scale;
        let handles: SmallVec<[Handle; 4]> = shape
            .world_handles()
            .into_iter()
            .map(|center| Handle::new(center, radius))
            .collect();

        let rotation_handle = shape.kind().has_rotation_handle().then(|| {
            let bb = shape.bounding_box();
            let local = Point::new(
                bb.center.x + bb.w.abs() + config.rotation_handle_offset / scale,
                bb.center.y,
            );
            Handle::new(shape.to_world(local), config.rotation_handle_radius / scale)
        });

        self.handles = handles;
        self.rotation_handle = rotation_handle;
    }
}
