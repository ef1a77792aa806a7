//! Draw parameters
//!
//! The continuous inputs of the face geometry. The expression-driven fields
//! (curvature, tilt, eyes open) come from two fixed tables; scale, line width
//! and color belong to the view and survive expression changes.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::color::Color;
use crate::error::{FaceError, Result};
use crate::expression::{EyeBrows, FacialExpression, Mouth};

pub const DEFAULT_SCALE: f32 = 0.90;
pub const DEFAULT_MOUTH_CURVATURE: f32 = 1.0;
pub const DEFAULT_EYE_BROW_TILT: f32 = 0.0;
pub const DEFAULT_LINE_WIDTH: f32 = 5.0;

/// Mouth curvature for each mouth state, -1 (frown) to 1 (smile)
pub fn mouth_curvature(mouth: Mouth) -> f32 {
    match mouth {
        Mouth::Frown => -1.0,
        Mouth::Smirk => -0.5,
        Mouth::Neutral => 0.0,
        Mouth::Grin => 0.5,
        Mouth::Smile => 1.0,
    }
}

/// Brow tilt for each eyebrow state
pub fn eye_brow_tilt(eye_brows: EyeBrows) -> f32 {
    match eye_brows {
        EyeBrows::Relaxed => 0.5,
        EyeBrows::Normal => 0.0,
        EyeBrows::Furrowed => -0.5,
    }
}

/// Reject anything that is not a finite number above zero
pub(crate) fn require_positive(field: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FaceError::InvalidValue {
            field: field.to_string(),
            message: format!("must be a positive number, got {value}"),
        })
    }
}

/// Everything the geometry needs to lay out a face
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawParameters {
    /// Skull size as a fraction of half the shorter bounds side
    pub scale: f32,
    /// -1 full frown, 1 full smile; clamped when drawn
    pub mouth_curvature: f32,
    pub eyes_open: bool,
    /// Clamped to [-1, 1] when drawn
    pub eye_brow_tilt: f32,
    pub line_width: f32,
    pub color: Color,
}

impl Default for DrawParameters {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            mouth_curvature: DEFAULT_MOUTH_CURVATURE,
            eyes_open: true,
            eye_brow_tilt: DEFAULT_EYE_BROW_TILT,
            line_width: DEFAULT_LINE_WIDTH,
            color: Color::default(),
        }
    }
}

impl DrawParameters {
    /// Parameters for an expression with the default view style
    pub fn from_expression(expression: &FacialExpression) -> Self {
        Self::default().with_expression(expression)
    }

    /// Replace the expression-driven fields, keeping scale, width and color
    pub fn with_expression(mut self, expression: &FacialExpression) -> Self {
        self.mouth_curvature = mouth_curvature(expression.mouth);
        self.eye_brow_tilt = eye_brow_tilt(expression.eye_brows);
        self.eyes_open = expression.eyes.is_open();
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_line_width(mut self, line_width: f32) -> Self {
        self.line_width = line_width;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Check the view style: scale and line width must be finite and positive
    pub fn validate_style(&self) -> Result<()> {
        require_positive("scale", self.scale)?;
        require_positive("line_width", self.line_width)
    }

    /// Multiply the scale by an incremental pinch factor.
    ///
    /// The parameters are unchanged unless the resulting scale is finite and
    /// positive.
    pub fn zoomed(mut self, factor: f32) -> Self {
        let scaled = self.scale * factor;
        if factor.is_finite() && scaled.is_finite() && scaled > 0.0 {
            self.scale = scaled;
        } else {
            warn!(factor, scale = self.scale, "ignoring zoom factor");
        }
        self
    }
}
