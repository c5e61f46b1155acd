//! Draw-mode vocabulary shared by the interaction engine and the settings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModeError;

/// The active tool. Modes are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawingMode {
    Select,
    Line,
    Rectangle,
    Square,
    Ellipse,
    Circle,
    Triangle,
}

impl DrawingMode {
    pub const ALL: [DrawingMode; 7] = [
        DrawingMode::Select,
        DrawingMode::Line,
        DrawingMode::Rectangle,
        DrawingMode::Square,
        DrawingMode::Ellipse,
        DrawingMode::Circle,
        DrawingMode::Triangle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DrawingMode::Select => "select",
            DrawingMode::Line => "line",
            DrawingMode::Rectangle => "rectangle",
            DrawingMode::Square => "square",
            DrawingMode::Ellipse => "ellipse",
            DrawingMode::Circle => "circle",
            DrawingMode::Triangle => "triangle",
        }
    }

    /// True for every mode that creates shapes.
    pub fn is_drawing(&self) -> bool {
        !matches!(self, DrawingMode::Select)
    }
}

impl Default for DrawingMode {
    fn default() -> Self {
        Self::Ellipse
    }
}

impl fmt::Display for DrawingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DrawingMode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == name)
            .ok_or(ModeError::UnknownMode {
                mode: s.to_string(),
            })
    }
}

/// How a stretched ellipse derives its half-extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EllipseSizing {
    /// Half-width and half-height follow the drag rectangle independently.
    #[default]
    Independent,
    /// Half-width is overwritten with the half-height, so every stretched
    /// ellipse is a circle. Kept for compatibility with older drawings.
    LegacyAliased,
}

impl FromStr for EllipseSizing {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "independent" => Ok(Self::Independent),
            "legacy_aliased" => Ok(Self::LegacyAliased),
            _ => Err(ModeError::UnknownEllipseSizing {
                sizing: s.to_string(),
            }),
        }
    }
}
