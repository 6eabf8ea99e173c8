//! Conversion configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{TriSvgError, TriSvgResult};

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "svg_data.json";

/// Full conversion configuration.
///
/// Every field is optional in a config file; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Output-space transform
    pub normalize: NormalizeConfig,

    /// Layout of the `colors` array
    pub color_layout: ColorLayout,
}

/// Affine transform into output space.
///
/// `x' = (x - max_x / 2) * scale + offset_x`, likewise for y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Output x of the bounds midpoint
    pub offset_x: f64,

    /// Output y of the bounds midpoint
    pub offset_y: f64,

    /// Uniform scale factor
    pub scale: f64,
}

/// How per-vertex colors are laid out in the JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorLayout {
    /// One `[r, g, b]` array per vertex
    #[default]
    Nested,
    /// A single flat `r, g, b, r, g, b, ...` array
    Flat,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        // 800x600 canvas, centered
        Self {
            offset_x: 400.0,
            offset_y: 300.0,
            scale: 0.25,
        }
    }
}

impl NormalizeConfig {
    fn validate(&self) -> TriSvgResult<()> {
        let fields = [
            ("offset_x", self.offset_x),
            ("offset_y", self.offset_y),
            ("scale", self.scale),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(TriSvgError::config(format!("{} must be finite", name)));
            }
        }
        Ok(())
    }
}

impl ConvertConfig {
    /// Load a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> TriSvgResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            TriSvgError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            TriSvgError::config(format!("invalid config {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every numeric setting is usable.
    pub fn validate(&self) -> TriSvgResult<()> {
        self.normalize.validate()
    }
}
