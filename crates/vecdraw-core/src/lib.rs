//! # VecDraw Core
//!
//! Core types and utilities shared by the VecDraw crates.
//! Provides the 2D geometry primitives (points, affine transforms, colors,
//! bounding boxes), the drawing-mode vocabulary, the error taxonomy and the
//! background job queue used by the bitmap side of the application.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod jobs;
pub mod mode;

pub use error::{EditError, Error, GeometryError, ModeError, Result, ViewportError};

pub use geometry::{BoundingBox, Color, Point, Transform2d};

pub use jobs::{JobError, JobHandle, JobId, JobQueue};

pub use mode::{DrawingMode, EllipseSizing};
