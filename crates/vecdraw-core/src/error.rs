//! Error handling for VecDraw
//!
//! Provides the error types used across the drawing engine:
//! - Geometry errors (degenerate vectors and segments)
//! - Edit errors (handle bookkeeping inconsistencies during reshape)
//! - Mode errors (unknown draw-mode names, raised at configuration time)
//! - Viewport errors (zoom table lookups, invalid extents)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Raised when an operation needs a direction but one of its vectors has no
/// length. Callers treat these as "no hit" or "no change".
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A vector with zero length was used where a direction is required
    #[error("Zero-length vector has no direction")]
    ZeroLengthVector,

    /// A line segment whose endpoints coincide or are not yet defined
    #[error("Degenerate line segment")]
    DegenerateLine,
}

/// Edit error type
///
/// Represents a mismatch between the handles produced for the selected shape
/// and the geometry found when the drag is applied.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    /// The grabbed handle does not correspond to any corner, vertex or endpoint
    #[error("Handle {handle} does not match any {shape} control point")]
    HandleMismatch {
        /// The shape kind being reshaped.
        shape: &'static str,
        /// Index of the grabbed handle.
        handle: usize,
    },

    /// The handle index is outside the active handle list
    #[error("Handle index {handle} out of range ({count} active)")]
    HandleOutOfRange {
        /// Index of the grabbed handle.
        handle: usize,
        /// Number of active handles.
        count: usize,
    },

    /// An edit was dispatched while nothing is selected
    #[error("No shape selected")]
    NoSelection,
}

/// Draw mode error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModeError {
    /// The mode name is not one of the known draw modes
    #[error("Unknown draw mode: {mode}")]
    UnknownMode {
        /// The rejected mode name.
        mode: String,
    },

    /// The ellipse sizing name is not recognised
    #[error("Unknown ellipse sizing: {sizing}")]
    UnknownEllipseSizing {
        /// The rejected sizing name.
        sizing: String,
    },
}

/// Viewport error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewportError {
    /// Zoom level index outside the discrete zoom table
    #[error("Zoom level {index} out of range (0..{levels})")]
    ZoomLevelOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of zoom levels available.
        levels: usize,
    },

    /// World or view extent is not strictly positive
    #[error("Invalid extent {width}x{height}")]
    InvalidExtent {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Edit(#[from] EditError),

    #[error(transparent)]
    Mode(#[from] ModeError),

    #[error(transparent)]
    Viewport(#[from] ViewportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    pub fn is_edit_error(&self) -> bool {
        matches!(self, Error::Edit(_))
    }

    pub fn is_mode_error(&self) -> bool {
        matches!(self, Error::Mode(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
