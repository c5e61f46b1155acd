//! Failures while reading, writing or checking a configuration.
//!
//! [`SettingsError`] covers the file side (where the file lives, whether it
//! parses). [`ConfigError`] is a parsed configuration whose values cannot
//! drive a canvas.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use vecdraw_core::ModeError;

#[derive(Error, Debug)]
pub enum SettingsError {
    /// The platform reports no per-user config directory.
    #[error("No per-user config directory on this platform")]
    NoConfigDir,

    #[error("Cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Cannot encode config as TOML: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    #[error("Invalid config: {0}")]
    Invalid(#[from] ConfigError),
}

impl SettingsError {
    pub(crate) fn io(path: &Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |source| Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// Only `.json` and `.toml` files are understood.
    #[error("Config files must end in .json or .toml, got `{0}`")]
    UnsupportedFormat(String),

    #[error("`{key}` cannot be {value}")]
    ValueOutOfRange { key: String, value: String },

    /// `interaction.default_mode` names no draw mode.
    #[error(transparent)]
    Mode(#[from] ModeError),
}

impl ConfigError {
    pub(crate) fn out_of_range(key: &str, value: impl ToString) -> Self {
        Self::ValueOutOfRange {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

pub type SettingsResult<T> = Result<T, SettingsError>;

pub type ConfigResult<T> = Result<T, ConfigError>;
