//! Luminance posterization with filmic tone mapping.

use crate::foundation::core::{Rgb, Rgba, opaque};
use crate::foundation::math::{LUMA_709, dot3, luma601, mix};

/// Luminance levels before clamping.
pub const LEVELS: u32 = 16;

const MIN_LEVEL: f32 = 0.2;
const MAX_LEVEL: f32 = 0.7;
const SHADOW_FLOOR: f32 = 0.1;
const SATURATION: f32 = 1.5;

/// Round `luma` to the nearest of [`LEVELS`] levels, then clamp to `[0.2, 0.7]`.
pub fn quantize_luma(luma: f32) -> f32 {
    let n = (LEVELS - 1) as f32;
    ((luma * n + 0.5).floor() / n).clamp(MIN_LEVEL, MAX_LEVEL)
}

/// Push `c` away from its Rec.709 gray by `amount` (`1` is identity).
pub fn saturate(c: Rgb, amount: f32) -> Rgb {
    let gray = dot3(c, LUMA_709);
    c.map(|v| mix(gray, v, amount))
}

/// Narkowicz's ACES filmic curve, clamped to `[0, 1]`.
pub fn aces_film(x: f32) -> f32 {
    const A: f32 = 2.51;
    const B: f32 = 0.03;
    const C: f32 = 2.43;
    const D: f32 = 0.59;
    const E: f32 = 0.14;
    ((x * (A * x + B)) / (x * (C * x + D) + E)).clamp(0.0, 1.0)
}

/// Posterize one pixel. The result is opaque.
///
/// Quantized luminance below one half darkens toward a near-black floor; above it the color
/// is lifted toward white.
pub fn posterize(color: Rgba) -> Rgba {
    let q = quantize_luma(luma601(color));
    let rgb: Rgb = std::array::from_fn(|i| {
        let c = color[i];
        if q < 0.5 {
            mix(SHADOW_FLOOR, c, q * 2.0)
        } else {
            mix(c, 1.0, (q - 0.5) * 2.0)
        }
    });
    opaque(saturate(rgb, SATURATION).map(aces_film))
}

#[cfg(test)]
#[path = "../../tests/unit/effects/posterize.rs"]
mod tests;
