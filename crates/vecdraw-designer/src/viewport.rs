//! Viewport and coordinate transformation for canvas rendering.
//!
//! Maps world coordinates onto a scrollable, zoomable view window. The scale
//! always comes from the discrete zoom table in
//! [`vecdraw_core::constants::ZOOM_LEVELS`]; the offset is in view units and
//! is applied after scaling.

use std::fmt;

use lyon::math::{vector, Transform};

use vecdraw_core::constants::{
    DEFAULT_VIEW_SIZE, DEFAULT_WORLD_SIZE, DEFAULT_ZOOM_LEVEL, ZOOM_LEVELS,
};
use vecdraw_core::{Point, Transform2d, ViewportError};

/// Pan and zoom state of the drawing widget.
#[derive(Debug, Clone)]
pub struct Viewport {
    world_width: f64,
    world_height: f64,
    view_width: f64,
    view_height: f64,
    offset: Point,
    zoom_level: usize,
}

impl Viewport {
    /// Creates a viewport at 100% with no offset.
    pub fn new(
        world_width: f64,
        world_height: f64,
        view_width: f64,
        view_height: f64,
    ) -> Result<Self, ViewportError> {
        for (width, height) in [(world_width, world_height), (view_width, view_height)] {
            if !(width > 0.0 && height > 0.0) {
                return Err(ViewportError::InvalidExtent { width, height });
            }
        }
        Ok(Self {
            world_width,
            world_height,
            view_width,
            view_height,
            offset: Point::ORIGIN,
            zoom_level: DEFAULT_ZOOM_LEVEL,
        })
    }

    /// World extent as (width, height).
    pub fn world_size(&self) -> (f64, f64) {
        (self.world_width, self.world_height)
    }

    /// View window extent as (width, height).
    pub fn view_size(&self) -> (f64, f64) {
        (self.view_width, self.view_height)
    }

    /// Resizes the view window, e.g. when the widget is resized.
    pub fn set_view_size(&mut self, width: f64, height: f64) -> Result<(), ViewportError> {
        if !(width > 0.0 && height > 0.0) {
            return Err(ViewportError::InvalidExtent { width, height });
        }
        self.view_width = width;
        self.view_height = height;
        Ok(())
    }

    /// Current scale factor (1.0 = 100%).
    pub fn scale(&self) -> f64 {
        ZOOM_LEVELS[self.zoom_level]
    }

    /// Index into the zoom table.
    pub fn zoom_level(&self) -> usize {
        self.zoom_level
    }

    /// Selects a zoom level by index. Out-of-range indices are rejected and
    /// the current scale is kept.
    pub fn set_zoom_level(&mut self, index: usize) -> Result<(), ViewportError> {
        if index >= ZOOM_LEVELS.len() {
            return Err(ViewportError::ZoomLevelOutOfRange {
                index,
                levels: ZOOM_LEVELS.len(),
            });
        }
        self.zoom_level = index;
        Ok(())
    }

    /// Steps one level up the zoom table, stopping at the largest scale.
    pub fn zoom_in(&mut self) {
        self.zoom_level = (self.zoom_level + 1).min(ZOOM_LEVELS.len() - 1);
    }

    /// Steps one level down the zoom table, stopping at the smallest scale.
    pub fn zoom_out(&mut self) {
        self.zoom_level = self.zoom_level.saturating_sub(1);
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Sets the scroll offset. Values are not clamped to [`Self::scroll_range`].
    pub fn set_offset(&mut self, x: f64, y: f64) {
        self.offset = Point::new(x, y);
    }

    /// Largest useful offset on each axis, for scrollbars.
    pub fn scroll_range(&self) -> (f64, f64) {
        let s = self.scale();
        (
            (self.world_width * s - self.view_width).max(0.0),
            (self.world_height * s - self.view_height).max(0.0),
        )
    }

    /// World to view: scale, then shift by the offset.
    pub fn view_transform(&self) -> Transform2d {
        let s = self.scale();
        Transform2d::compose(Transform2d::translation(-self.offset), Transform2d::scaling(s, s))
    }

    /// View to world, the exact inverse of [`Self::view_transform`].
    pub fn world_transform(&self) -> Transform2d {
        let s = self.scale();
        Transform2d::compose(
            Transform2d::scaling(1.0 / s, 1.0 / s),
            Transform2d::translation(self.offset),
        )
    }

    /// Converts a world-space point to view coordinates.
    ///
    /// ```text
    /// view = world * scale - offset
    /// ```
    pub fn to_view(&self, p: Point) -> Point {
        self.view_transform().transform(p)
    }

    /// Converts a view-space point to world coordinates.
    ///
    /// ```text
    /// world = (view + offset) / scale
    /// ```
    pub fn to_world(&self, p: Point) -> Point {
        self.world_transform().transform(p)
    }

    /// Converts a view-space length (pick band, handle radius) to world units.
    pub fn to_world_distance(&self, d: f64) -> f64 {
        d / self.scale()
    }

    /// [`Self::view_transform`] as a lyon transform, for mapping render paths.
    pub fn lyon_transform(&self) -> Transform {
        let s = self.scale() as f32;
        Transform::scale(s, s).then_translate(vector(-self.offset.x as f32, -self.offset.y as f32))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            world_width: DEFAULT_WORLD_SIZE,
            world_height: DEFAULT_WORLD_SIZE,
            view_width: DEFAULT_VIEW_SIZE,
            view_height: DEFAULT_VIEW_SIZE,
            offset: Point::ORIGIN,
            zoom_level: DEFAULT_ZOOM_LEVEL,
        }
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Viewport(scale: {:.2}, offset: ({:.2}, {:.2}))",
            self.scale(),
            self.offset.x,
            self.offset.y
        )
    }
}
