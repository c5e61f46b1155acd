//! # VecDraw
//!
//! An interactive 2D vector drawing engine: lines, rectangles, squares,
//! ellipses, circles and triangles that can be drawn, picked, moved, rotated
//! and reshaped through their handles, on a canvas with discrete zoom and a
//! scroll offset.
//!
//! ## Architecture
//!
//! VecDraw is organized as a workspace with multiple crates:
//!
//! 1. **vecdraw-core** - Geometry primitives, draw modes, errors, job queue
//! 2. **vecdraw-designer** - Shapes, shape store, viewport, interaction engine
//! 3. **vecdraw-settings** - Configuration load/save and validation
//! 4. **vecdraw** - This crate: logging setup, config wiring, script replay
//!
//! The `vecdraw` binary replays a gesture script against a [`Canvas`] built
//! from the user's configuration and prints the resulting shapes.

pub mod replay;

pub use vecdraw_designer as designer;
pub use vecdraw_settings as settings;

pub use vecdraw_core::{
    BoundingBox, Color, DrawingMode, EditError, EllipseSizing, Error, ModeError, Point, Result,
    Transform2d, ViewportError,
};

pub use vecdraw_designer::{
    Canvas, Circle, DesignerShape, Ellipse, Gesture, InteractionConfig, Line, Rectangle,
    RenderFrame, Shape, ShapeId, ShapeStore, Square, Triangle, Viewport,
};

pub use vecdraw_settings::{Config, ConfigError, SettingsError};

pub use replay::{Command, Script};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, leaving stdout for replay results
/// - RUST_LOG environment variable support, `info` otherwise
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Builds a canvas sized, zoomed and styled according to `config`.
///
/// The configuration is expected to have passed [`Config::validate`]; an
/// extent or zoom index that slipped through is still reported here.
pub fn canvas_from_config(config: &Config) -> Result<Canvas> {
    let canvas_settings = &config.canvas;
    let mut viewport = Viewport::new(
        canvas_settings.world_width,
        canvas_settings.world_height,
        canvas_settings.view_width,
        canvas_settings.view_height,
    )?;
    viewport.set_zoom_level(canvas_settings.zoom_level)?;

    let interaction = &config.interaction;
    let interaction_config = InteractionConfig {
        pick_tolerance: interaction.pick_tolerance,
        handle_radius: interaction.handle_radius,
        rotation_handle_radius: interaction.rotation_handle_radius,
        rotation_handle_offset: interaction.rotation_handle_offset,
        ellipse_sizing: interaction.ellipse_sizing,
    };
    let mode: DrawingMode = interaction.default_mode.parse()?;

    let mut canvas = Canvas::with_options(viewport, interaction_config);
    canvas.set_alpha(config.style.draw_color.a);
    canvas.set_draw_color(config.style.draw_color);
    canvas.set_draw_mode(mode);
    tracing::debug!("Canvas ready: {} in {} mode", canvas.viewport(), mode);
    Ok(canvas)
}
