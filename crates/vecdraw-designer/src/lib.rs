//! # VecDraw Designer
//!
//! Shape model and interactive manipulation engine for the vector drawing
//! surface.
//!
//! ## Core Components
//!
//! - **Shapes**: lines, rectangles, squares, ellipses, circles and triangles,
//!   each with containment, handles and object/world transforms
//! - **Shape store**: ordered collection of committed shapes (z-order)
//! - **Viewport**: discrete zoom plus scroll offset
//! - **Canvas**: pointer-driven state machine for drawing, selecting,
//!   moving, rotating and reshaping, plus the render pass
//!
//! ## Architecture
//!
//! ```text
//! Canvas (interaction engine)
//!   ├── Viewport (view <-> world)
//!   ├── ShapeStore (committed shapes)
//!   │     └── Shape (Line | Rectangle | Square | Ellipse | Circle | Triangle)
//!   └── RenderFrame (view-space lyon paths)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use vecdraw_core::{DrawingMode, Point};
//! use vecdraw_designer::Canvas;
//!
//! let mut canvas = Canvas::new();
//! canvas.set_draw_mode(DrawingMode::Rectangle);
//! canvas.on_pointer_down(Point::new(10.0, 10.0));
//! canvas.on_pointer_move(Point::new(50.0, 40.0));
//! canvas.on_pointer_up(Point::new(50.0, 40.0));
//! assert_eq!(canvas.model().len(), 1);
//! ```

pub mod canvas;
pub mod model;
pub mod shape_store;
pub mod viewport;

pub use canvas::{
    Canvas, DrawingObject, Gesture, Handle, InteractionConfig, RenderFrame, RenderItem,
    RenderRole, RenderStyle, TriangleDraft,
};
pub use model::{
    Circle, DesignerShape, Ellipse, HandleDrag, HandlePositions, Line, Rectangle, Shape,
    ShapeKind, Square, Triangle,
};
pub use shape_store::{ShapeId, ShapeStore};
pub use viewport::Viewport;
