//! Configuration and settings management for VecDraw
//!
//! Configuration is organized into sections:
//! - Canvas settings (world and view extents, initial zoom)
//! - Interaction settings (pick band, handle sizes, default tool)
//! - Style settings (initial draw color)
//!
//! Files are JSON or TOML, chosen by extension, and are validated both when
//! loaded and before they are written.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use vecdraw_core::constants::{
    DEFAULT_PICK_TOLERANCE, DEFAULT_VIEW_SIZE, DEFAULT_WORLD_SIZE, DEFAULT_ZOOM_LEVEL,
    HANDLE_RADIUS, ROTATION_HANDLE_OFFSET, ROTATION_HANDLE_RADIUS, ZOOM_LEVELS,
};
use vecdraw_core::{Color, DrawingMode, EllipseSizing};

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

const APP_DIR: &str = "vecdraw";
const CONFIG_FILE: &str = "config.toml";

/// Supported on-disk formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Drawing surface geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// World width in world units
    pub world_width: f64,
    /// World height in world units
    pub world_height: f64,
    /// View window width
    pub view_width: f64,
    /// View window height
    pub view_height: f64,
    /// Index into the discrete zoom table
    pub zoom_level: usize,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            world_width: DEFAULT_WORLD_SIZE,
            world_height: DEFAULT_WORLD_SIZE,
            view_width: DEFAULT_VIEW_SIZE,
            view_height: DEFAULT_VIEW_SIZE,
            zoom_level: DEFAULT_ZOOM_LEVEL,
        }
    }
}

/// Pointer interaction preferences. Distances are in view units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    pub pick_tolerance: f64,
    pub handle_radius: f64,
    pub rotation_handle_radius: f64,
    pub rotation_handle_offset: f64,
    /// Tool active at startup, by name (e.g. "ellipse")
    pub default_mode: String,
    pub ellipse_sizing: EllipseSizing,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            pick_tolerance: DEFAULT_PICK_TOLERANCE,
            handle_radius: HANDLE_RADIUS,
            rotation_handle_radius: ROTATION_HANDLE_RADIUS,
            rotation_handle_offset: ROTATION_HANDLE_OFFSET,
            default_mode: DrawingMode::default().to_string(),
            ellipse_sizing: EllipseSizing::default(),
        }
    }
}

impl InteractionSettings {
    /// The startup tool. Fails on an unknown name.
    pub fn draw_mode(&self) -> ConfigResult<DrawingMode> {
        Ok(self.default_mode.parse::<DrawingMode>()?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StyleSettings {
    /// Color given to new shapes until the user picks another one
    pub draw_color: Color,
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub canvas: CanvasSettings,
    pub interaction: InteractionSettings,
    pub style: StyleSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(SettingsError::io(path))?;
        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };
        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(SettingsError::io(parent))?;
        }
        std::fs::write(path, content).map_err(SettingsError::io(path))?;
        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let canvas = &self.canvas;
        for (key, value) in [
            ("canvas.world_width", canvas.world_width),
            ("canvas.world_height", canvas.world_height),
            ("canvas.view_width", canvas.view_width),
            ("canvas.view_height", canvas.view_height),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::out_of_range(key, value));
            }
        }
        if canvas.zoom_level >= ZOOM_LEVELS.len() {
            return Err(ConfigError::out_of_range(
                "canvas.zoom_level",
                canvas.zoom_level,
            ));
        }

        let interaction = &self.interaction;
        for (key, value) in [
            ("interaction.pick_tolerance", interaction.pick_tolerance),
            ("interaction.handle_radius", interaction.handle_radius),
            (
                "interaction.rotation_handle_radius",
                interaction.rotation_handle_radius,
            ),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::out_of_range(key, value));
            }
        }
        let offset = interaction.rotation_handle_offset;
        if offset.is_nan() || offset < 0.0 {
            return Err(ConfigError::out_of_range(
                "interaction.rotation_handle_offset",
                offset,
            ));
        }
        interaction.draw_mode()?;

        if !self.style.draw_color.is_normalized() {
            tracing::warn!(
                "Draw color {} has channels outside [0, 1]",
                self.style.draw_color
            );
        }
        Ok(())
    }

    /// Platform config file location, e.g. `~/.config/vecdraw/config.toml`.
    pub fn default_path() -> SettingsResult<PathBuf> {
        let mut path = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
        path.push(APP_DIR);
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}
