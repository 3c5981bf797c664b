//! Canvas configuration: initial pen, width limits, background, palette.

use crate::error::CanvasError;
use crate::model::Color;
use crate::palette::THERAPEUTIC;
use serde::{Deserialize, Serialize};

// ─── Config ───────────────────────────────────────────────────────────────

/// Settings applied when a canvas opens. Every field is optional in JSON;
/// missing fields take their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Canvas background. Used by the eraser and as the export fill. Default: **white**.
    pub background: Color,

    /// Initial brush color. Default: **black**.
    pub brush_color: Color,

    /// Initial brush width. Default: **25**.
    pub brush_width: f32,

    /// Floor applied to every width change. Default: **5**.
    pub min_brush_width: f32,

    /// Width change per grow/shrink shortcut. Default: **5**.
    pub brush_step: f32,

    /// Colors offered by the color picker.
    pub palette: Vec<Color>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            brush_color: Color::BLACK,
            brush_width: 25.0,
            min_brush_width: DEFAULT_MIN_WIDTH,
            brush_step: 5.0,
            palette: THERAPEUTIC.to_vec(),
        }
    }
}

impl CanvasConfig {
    /// Parse a JSON config document.
    ///
    /// # Errors
    /// Returns `CanvasError::Config` if the JSON is malformed or a color is
    /// invalid, and `CanvasError::InvalidWidth` if a width limit fails `validate`.
    pub fn from_json(text: &str) -> Result<Self, CanvasError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the width floor and the grow/shrink step are positive and finite.
    ///
    /// # Errors
    /// Returns `CanvasError::InvalidWidth` naming the first offending field.
    pub fn validate(&self) -> Result<(), CanvasError> {
        for (field, value) in [
            ("min_brush_width", self.min_brush_width),
            ("brush_step", self.brush_step),
        ] {
            if !is_positive(value) {
                return Err(CanvasError::InvalidWidth { field, value });
            }
        }
        Ok(())
    }

    /// Clamp a requested width to the configured floor.
    /// Non-finite requests collapse to the floor.
    pub fn clamp_width(&self, width: f32) -> f32 {
        clamp_width(width, self.min_brush_width)
    }
}

/// Floor used when a config carries an unusable `min_brush_width`.
pub const DEFAULT_MIN_WIDTH: f32 = 5.0;

/// Clamp `width` to `floor`; NaN and infinities collapse to the floor.
/// A floor that is not positive is replaced by `DEFAULT_MIN_WIDTH`, so the
/// result is always a positive width.
pub fn clamp_width(width: f32, floor: f32) -> f32 {
    let floor = if is_positive(floor) { floor } else { DEFAULT_MIN_WIDTH };
    if width.is_finite() { width.max(floor) } else { floor }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

// ─── Tests ────────────────────────────────────────────────────────────────
