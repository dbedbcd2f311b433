use crate::foundation::core::{Rgb, Rgba};

/// Rec.601 luma weights.
pub const LUMA_601: Rgb = [0.299, 0.587, 0.114];
/// Rec.709 luma weights.
pub const LUMA_709: Rgb = [0.2125, 0.7154, 0.0721];

#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub(crate) fn write_u64(&mut self, v: u64) {
        let mut h = self.0;
        for b in v.to_le_bytes() {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// GLSL `fract`: `x - floor(x)`, always in `[0, 1)`.
pub fn fract(x: f64) -> f64 {
    x - x.floor()
}

/// GLSL `mod`: result carries the sign of `y`.
pub fn glsl_mod(x: f64, y: f64) -> f64 {
    x - y * (x / y).floor()
}

/// GLSL `step`: 0.0 below `edge`, 1.0 at or above it.
pub fn step(edge: f32, x: f32) -> f32 {
    if x < edge { 0.0 } else { 1.0 }
}

pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

pub fn mix_rgba(a: Rgba, b: Rgba, t: f32) -> Rgba {
    std::array::from_fn(|i| mix(a[i], b[i], t))
}

pub fn mul_rgba(a: Rgba, b: Rgba) -> Rgba {
    std::array::from_fn(|i| a[i] * b[i])
}

pub fn dot3(a: Rgb, b: Rgb) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn luma601(c: Rgba) -> f32 {
    dot3([c[0], c[1], c[2]], LUMA_601)
}

pub fn luma709(c: Rgba) -> f32 {
    dot3([c[0], c[1], c[2]], LUMA_709)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
