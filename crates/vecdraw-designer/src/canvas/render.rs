//! Render pass: everything the widget draws, in view coordinates.

use lyon::math::point;
use lyon::path::{Path, Winding};

use vecdraw_core::Color;

use super::types::Handle;
use super::Canvas;
use crate::model::{DesignerShape, Shape, ShapeKind};
use crate::shape_store::ShapeId;

/// How a path should be painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    Fill,
    Stroke,
}

/// What a render item stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderRole {
    /// Shape still being constructed.
    Preview,
    Shape(ShapeId),
    SelectionOutline,
    Handle(usize),
    RotationHandle,
}

#[derive(Debug, Clone)]
pub struct RenderItem {
    pub role: RenderRole,
    pub path: Path,
    pub color: Color,
    pub style: RenderStyle,
}

/// One frame, back to front.
#[derive(Debug, Clone, Default)]
pub struct RenderFrame {
    pub items: Vec<RenderItem>,
}

impl RenderFrame {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn with_role(&self, role: RenderRole) -> impl Iterator<Item = &RenderItem> {
        self.items.iter().filter(move |item| item.role == role)
    }
}

fn paint_style(shape: &Shape) -> RenderStyle {
    match shape.kind() {
        ShapeKind::Line => RenderStyle::Stroke,
        _ => RenderStyle::Fill,
    }
}

fn handle_path(handle: &Handle) -> Path {
    let mut builder = Path::builder();
    builder.add_circle(
        point(handle.center.x as f32, handle.center.y as f32),
        handle.radius as f32,
        Winding::Positive,
    );
    builder.build()
}

impl Canvas {
    /// Builds the current frame.
    ///
    /// Order: construction preview, stored shapes, then the selection
    /// outline, its reshape handles and its rotation handle.
    pub fn render(&self) -> RenderFrame {
        let to_view = self.viewport.lyon_transform();
        let mut frame = RenderFrame::default();
        let mut push = |role, path: Path, color, style| {
            frame.items.push(RenderItem {
                role,
                path: path.transformed(&to_view),
                color,
                style,
            });
        };

        if let Some(draft) = &self.draft {
            push(
                RenderRole::Preview,
                draft.outline(),
                draft.color(),
                paint_style(draft),
            );
        }
        if let Some(triangle) = &self.triangle {
            push(
                RenderRole::Preview,
                triangle.preview(self.last_pointer),
                triangle.color,
                RenderStyle::Stroke,
            );
        }

        for object in self.shape_store.iter() {
            push(
                RenderRole::Shape(object.id),
                object.shape.outline(),
                object.shape.color(),
                paint_style(&object.shape),
            );
        }

        if let Some(selected) = self.selected_shape() {
            // Styled throwaway copy; the stored shape keeps its own color.
            let mut highlight = selected.clone();
            highlight.set_color(Color::HIGHLIGHT);
            push(
                RenderRole::SelectionOutline,
                highlight.outline(),
                highlight.color(),
                RenderStyle::Stroke,
            );
            for (i, handle) in self.handles.iter().enumerate() {
                push(
                    RenderRole::Handle(i),
                    handle_path(handle),
                    Color::HIGHLIGHT,
                    RenderStyle::Stroke,
                );
            }
            if let Some(handle) = &self.rotation_handle {
                push(
                    RenderRole::RotationHandle,
                    handle_path(handle),
                    Color::HIGHLIGHT,
                    RenderStyle::Fill,
                );
            }
        }

        frame
    }
}
