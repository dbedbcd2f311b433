use crate::effects::sobel::{gather, magnitude};
use crate::foundation::core::{Point, Resolution, Rgba, Vec2};
use crate::foundation::math::luma709;
use crate::frame::plane::Plane;
use crate::noise::hash::hash12;

/// Depth discontinuities dominate normal creases by this factor.
pub const DEPTH_WEIGHT: f32 = 25.0;

/// Hand-drawn wobble applied to outline sampling positions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Jitter {
    /// Spatial frequency, per pixel.
    pub frequency: f64,
    /// Amplitude in texels.
    pub amplitude: f64,
}

/// Wobble offset, in uv units, for the fragment at `frag`.
///
/// A pure function of the fragment coordinate, so outlines do not shimmer between frames.
pub fn displacement(frag: Point, resolution: Resolution, jitter: Jitter) -> Vec2 {
    let h = hash12(frag);
    let texel = resolution.texel();
    Vec2::new(
        h * (frag.y * jitter.frequency).sin() * jitter.amplitude * texel.x,
        h * (frag.x * jitter.frequency).cos() * jitter.amplitude * texel.y,
    )
}

/// Silhouette and crease strength at pixel `(x, y)`.
///
/// Combines the Sobel magnitude of depth with that of normal luminance, sampled around the
/// displaced position with a spacing of `thickness` texels. Flat input yields exactly `0`.
pub fn edge_signal(
    depth: &Plane<f32>,
    normal: &Plane<Rgba>,
    x: u32,
    y: u32,
    thickness: f32,
    jitter: Jitter,
) -> f32 {
    let res = depth.resolution();
    let origin = res.uv(x, y) + displacement(Resolution::frag_coord(x, y), res, jitter);
    let step = res.texel() * f64::from(thickness);
    let at = |dx: f64, dy: f64| origin + Vec2::new(step.x * dx, step.y * dy);

    let depth_n = gather(|dx, dy| depth.sample_uv(at(dx, dy)));
    let normal_n = gather(|dx, dy| luma709(normal.sample_uv(at(dx, dy))));
    DEPTH_WEIGHT * magnitude(&depth_n) + magnitude(&normal_n)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/edge.rs"]
mod tests;
