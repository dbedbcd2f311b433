use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::effects::edge::Jitter;
use crate::foundation::error::{BrushworkError, BrushworkResult};
use crate::style::color::ColorRgb;

/// How the final pixel is assembled from the stylized signals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// Unmodified input color. Also the fallback for unrecognized values.
    #[default]
    Original,
    /// Ink outlines over a paper wash.
    Sketch,
    /// Kuwahara paint.
    Paint,
    /// Paint and sketch mixed by the watercolor trail.
    Blended,
}

impl BlendMode {
    /// Map a numeric mode code (`0..=3`), failing closed to [`BlendMode::Original`].
    pub fn from_code(code: f64) -> Self {
        match code {
            c if c == 0.0 => Self::Original,
            c if c == 1.0 => Self::Sketch,
            c if c == 2.0 => Self::Paint,
            c if c == 3.0 => Self::Blended,
            other => {
                tracing::warn!(code = other, "unrecognized blend mode code, using original");
                Self::Original
            }
        }
    }

    /// Map a mode name, failing closed to [`BlendMode::Original`].
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "original" | "none" => Self::Original,
            "sketch" => Self::Sketch,
            "paint" | "kuwahara" => Self::Paint,
            "blended" | "blend" => Self::Blended,
            other => {
                tracing::warn!(name = other, "unrecognized blend mode, using original");
                Self::Original
            }
        }
    }
}

/// Which discrete shading convention reshapes tonal values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadowMode {
    /// Pass-through. Also the fallback for unrecognized values.
    #[default]
    None,
    /// Banded darkening by luma thresholds.
    Tonal,
    /// Halftone dot raster.
    Raster,
    /// Three-direction hatching in the outline color.
    Crosshatch,
}

impl ShadowMode {
    /// Map a numeric mode code (`0..=3`), failing closed to [`ShadowMode::None`].
    pub fn from_code(code: f64) -> Self {
        match code {
            c if c == 0.0 => Self::None,
            c if c == 1.0 => Self::Tonal,
            c if c == 2.0 => Self::Raster,
            c if c == 3.0 => Self::Crosshatch,
            other => {
                tracing::warn!(code = other, "unrecognized shadow mode code, shading disabled");
                Self::None
            }
        }
    }

    /// Map a mode name, failing closed to [`ShadowMode::None`].
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "none" | "off" => Self::None,
            "tonal" => Self::Tonal,
            "raster" | "halftone" => Self::Raster,
            "crosshatch" | "hatch" => Self::Crosshatch,
            other => {
                tracing::warn!(name = other, "unrecognized shadow mode, shading disabled");
                Self::None
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ModeRepr {
    Name(String),
    Code(f64),
}

impl<'de> Deserialize<'de> for BlendMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match ModeRepr::deserialize(deserializer)? {
            ModeRepr::Name(s) => Self::parse(&s),
            ModeRepr::Code(c) => Self::from_code(c),
        })
    }
}

impl<'de> Deserialize<'de> for ShadowMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match ModeRepr::deserialize(deserializer)? {
            ModeRepr::Name(s) => Self::parse(&s),
            ModeRepr::Code(c) => Self::from_code(c),
        })
    }
}

/// Per-frame stylization settings.
///
/// Numeric fields only need to be finite and non-negative; the ranges a UI would offer are not
/// enforced here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleParameters {
    /// Kuwahara sampling radius in texels. `0` disables the filter.
    pub kuwahara_radius: u32,
    /// Outline sampling distance in texels, also the hatch line width.
    pub outline_thickness: f32,
    /// Sobel magnitude at which a pixel becomes ink.
    pub outline_threshold: f32,
    /// Stylized shading convention.
    pub shadow_mode: ShadowMode,
    /// Spatial frequency of the outline wobble.
    pub displacement_frequency: f32,
    /// Outline wobble amplitude in texels.
    pub displacement_amplitude: f32,
    /// Ink color for outlines and hatching.
    pub outline_color: ColorRgb,
    /// Final composition mode.
    pub blend_mode: BlendMode,
    /// When set, pixels whose depth+normal edge signal reaches this value are inked too, so
    /// silhouettes show up in the sketch layer. Off by default.
    pub silhouette_threshold: Option<f32>,
}

impl Default for StyleParameters {
    fn default() -> Self {
        Self {
            kuwahara_radius: 5,
            outline_thickness: 0.5,
            outline_threshold: 0.1,
            shadow_mode: ShadowMode::Raster,
            displacement_frequency: 0.05,
            displacement_amplitude: 2.0,
            outline_color: ColorRgb::rgb(0.32, 0.12, 0.2),
            blend_mode: BlendMode::Sketch,
            silhouette_threshold: None,
        }
    }
}

impl StyleParameters {
    /// Parse and validate parameters from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> BrushworkResult<Self> {
        let params: Self = serde_json::from_str(json)
            .map_err(|e| BrushworkError::serde(format!("parse style parameters: {e}")))?;
        params.validate()?;
        Ok(params)
    }

    /// Read, parse and validate a JSON parameter file.
    pub fn from_path(path: impl AsRef<Path>) -> BrushworkResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read style parameters '{}'", path.display()))?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> BrushworkResult<()> {
        let scalars = [
            ("outline_thickness", self.outline_thickness),
            ("outline_threshold", self.outline_threshold),
            ("displacement_frequency", self.displacement_frequency),
            ("displacement_amplitude", self.displacement_amplitude),
        ];
        for (name, v) in scalars {
            if !v.is_finite() || v < 0.0 {
                return Err(BrushworkError::validation(format!(
                    "{name} must be finite and >= 0, got {v}"
                )));
            }
        }
        if let Some(t) = self.silhouette_threshold
            && (!t.is_finite() || t < 0.0)
        {
            return Err(BrushworkError::validation(format!(
                "silhouette_threshold must be finite and >= 0, got {t}"
            )));
        }
        if !self.outline_color.is_finite() {
            return Err(BrushworkError::validation("outline_color must be finite"));
        }
        Ok(())
    }

    pub fn jitter(&self) -> Jitter {
        Jitter {
            frequency: f64::from(self.displacement_frequency),
            amplitude: f64::from(self.displacement_amplitude),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/params.rs"]
mod tests;
