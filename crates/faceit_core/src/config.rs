//! Face configuration file handling
//!
//! A `face.toml` sets the expression a face starts with and its view style.
//! Every section and field is optional.
//!
//! ```toml
//! [expression]
//! eyes = "closed"
//! eye_brows = "relaxed"
//! mouth = "smirk"
//!
//! [style]
//! scale = 0.9
//! line_width = 5.0
//! color = "#0000ff"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::color::Color;
use crate::error::{FaceError, Result};
use crate::expression::FacialExpression;
use crate::params::{require_positive, DrawParameters, DEFAULT_LINE_WIDTH, DEFAULT_SCALE};

/// Top-level face configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FaceConfig {
    #[serde(default)]
    pub expression: FacialExpression,
    #[serde(default)]
    pub style: StyleConfig,
}

/// View style: everything about the face that no expression controls
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct StyleConfig {
    #[serde(default = "default_scale")]
    pub scale: f32,
    #[serde(default = "default_line_width")]
    pub line_width: f32,
    #[serde(default)]
    pub color: Color,
}

fn default_scale() -> f32 {
    DEFAULT_SCALE
}

fn default_line_width() -> f32 {
    DEFAULT_LINE_WIDTH
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            line_width: default_line_width(),
            color: Color::default(),
        }
    }
}

impl StyleConfig {
    /// Draw parameters with this style and neutral expression fields
    pub fn to_params(&self) -> DrawParameters {
        DrawParameters::default()
            .with_scale(self.scale)
            .with_line_width(self.line_width)
            .with_color(self.color)
    }
}

impl FaceConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), expression = %config.expression, "loaded face config");
        Ok(config)
    }

    /// Parse and validate config text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: FaceConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        require_positive("style.scale", self.style.scale)?;
        require_positive("style.line_width", self.style.line_width)?;
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| FaceError::Parse(e.to_string()))
    }
}
