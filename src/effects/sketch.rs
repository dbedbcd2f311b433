use crate::effects::sobel::{gather, sobel};
use crate::foundation::core::{Resolution, Rgba, Vec2};
use crate::foundation::math::{luma601, step};
use crate::frame::plane::Plane;
use crate::noise::hash::value_noise;

const DIFFUSE_CUTOFF: f64 = 40.0;
const NORMAL_CUTOFF: f64 = 50.0;
const DIFFUSE_WEIGHT: f32 = 0.6;
const NORMAL_WEIGHT: f32 = 0.3;

/// Shift, in uv units, derived from a cloud texture value.
///
/// Larger cutoffs produce a smaller, finer shift.
pub fn cloud_jitter(cloud: f32, cutoff: f64) -> f64 {
    f64::from(cloud).clamp(0.0, cutoff) / cutoff - 0.5 / cutoff
}

/// Binary ink mask (`0` or `1`) for pixel `(x, y)`.
///
/// Diffuse and normal luminance are sampled at slightly different cloud-driven offsets and
/// combined, with the normal term modulated by value noise. The Sobel energy of that composite,
/// clamped to `[0, 1]`, is thresholded.
pub fn sketch_outline(
    diffuse: &Plane<Rgba>,
    normal: &Plane<Rgba>,
    cloud: &Plane<Rgba>,
    x: u32,
    y: u32,
    threshold: f32,
) -> f32 {
    let res = diffuse.resolution();
    let uv = res.uv(x, y);
    let texel = res.texel();

    let noise = cloud.sample_uv(uv)[0];
    let jd = cloud_jitter(noise, DIFFUSE_CUTOFF);
    let jn = cloud_jitter(noise, NORMAL_CUTOFF);
    let modulator = value_noise(Resolution::frag_coord(x, y)) as f32;

    let n = gather(|dx, dy| {
        let offset = Vec2::new(texel.x * dx, texel.y * dy);
        let d = luma601(diffuse.sample_uv(uv + Vec2::new(jd, jd) + offset));
        let nn = luma601(normal.sample_uv(uv + Vec2::new(jn, jn) + offset));
        DIFFUSE_WEIGHT * d + NORMAL_WEIGHT * nn * modulator
    });
    let (gx, gy) = sobel(&n);
    step(threshold, (gx * gx + gy * gy).clamp(0.0, 1.0))
}

#[cfg(test)]
#[path = "../../tests/unit/effects/sketch.rs"]
mod tests;
