//! Discrete shading conventions applied to foreground pixels.

use crate::foundation::core::{BLACK, Point, Resolution, Rgba, Vec2};
use crate::foundation::math::{glsl_mod, luma709};
use crate::style::params::{ShadowMode, StyleParameters};

/// Pixels with depth above this are background and are never shaded.
pub const BACKGROUND_DEPTH: f32 = 0.99;

const RASTER_CELL: f64 = 6.0;
const RASTER_GAIN: f64 = 1.25;
const HATCH_PERIOD: f64 = 11.0;

/// Where a pixel sits, as far as the screen-space patterns care.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadeSite {
    pub uv: Point,
    pub resolution: Resolution,
    /// Outline wobble in uv units; hatch lines follow it.
    pub displacement: Vec2,
}

/// Quantizes tonal values according to a [`ShadowMode`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowQuantizer {
    pub mode: ShadowMode,
    /// Hatch line width in pixels.
    pub hatch_width: f32,
    pub hatch_color: Rgba,
}

impl ShadowQuantizer {
    pub fn from_params(params: &StyleParameters) -> Self {
        Self {
            mode: params.shadow_mode,
            hatch_width: params.outline_thickness,
            hatch_color: params.outline_color.to_rgba(),
        }
    }

    /// Shade `color`; background pixels and [`ShadowMode::None`] pass through.
    pub fn shade(&self, color: Rgba, depth: f32, site: ShadeSite) -> Rgba {
        if depth > BACKGROUND_DEPTH {
            return color;
        }
        let luma = luma709(color);
        match self.mode {
            ShadowMode::None => color,
            ShadowMode::Tonal => tonal(color, luma),
            ShadowMode::Raster => raster(color, luma, site),
            ShadowMode::Crosshatch => self.crosshatch(color, luma, site),
        }
    }

    fn crosshatch(&self, color: Rgba, luma: f32, site: ShadeSite) -> Rgba {
        let res = site.resolution.as_vec2();
        let p = Point::new(
            site.uv.x + site.displacement.x,
            site.uv.y + site.displacement.y,
        );
        let width = f64::from(self.hatch_width);

        let mut out = color;
        if luma <= 0.35 && glsl_mod(p.y * res.y, HATCH_PERIOD) < width {
            out = self.hatch_color;
        }
        if luma <= 0.55 && glsl_mod(p.x * res.x, HATCH_PERIOD) < width {
            out = self.hatch_color;
        }
        if luma <= 0.80 && glsl_mod(p.x * res.y + p.y * res.x, HATCH_PERIOD) <= width {
            out = self.hatch_color;
        }
        out
    }
}

/// Cumulative banding: each band a pixel falls under darkens it further.
fn tonal(color: Rgba, luma: f32) -> Rgba {
    let mut out = color;
    if luma <= 0.35 {
        out = BLACK;
    }
    for (limit, factor) in [(0.45, 0.25), (0.6, 0.5), (0.75, 0.7)] {
        if luma <= limit {
            for c in &mut out[..3] {
                *c *= factor;
            }
        }
    }
    out
}

/// Halftone: black where luminance falls under the distance to the raster cell center.
fn raster(color: Rgba, luma: f32, site: ShadeSite) -> Rgba {
    let res = site.resolution.as_vec2();
    let cell = Vec2::new(
        glsl_mod(site.uv.x * res.x, RASTER_CELL) / RASTER_CELL - 0.5,
        glsl_mod(site.uv.y * res.y, RASTER_CELL) / RASTER_CELL - 0.5,
    );
    if f64::from(luma) <= cell.length() * RASTER_GAIN {
        BLACK
    } else {
        color
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/shadow.rs"]
mod tests;
