//! VecDraw Settings Crate
//!
//! Handles application configuration: defaults, validation and JSON/TOML
//! persistence in the platform config directory.

pub mod config;
pub mod error;

pub use config::{CanvasSettings, Config, InteractionSettings, StyleSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
