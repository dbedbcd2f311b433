//! Anisotropic Kuwahara filter.
//!
//! The neighborhood around a pixel is split into [`SECTOR_COUNT`] wedges. Each wedge gets a
//! weighted mean and a luminance variance, and the pixel takes the mean of the calmest wedge.
//! This flattens texture into painterly strokes while keeping edges, because a wedge that
//! straddles an edge always has a higher variance than one lying on a single side of it.

use std::f64::consts::{PI, TAU};

use crate::foundation::core::{Point, Resolution, Rgb, Rgba, Vec2, opaque};
use crate::foundation::math::{LUMA_601, dot3};
use crate::frame::plane::Plane;

/// Number of angular sectors around each pixel.
pub const SECTOR_COUNT: usize = 8;

/// Rays per sector, spanning `±π/8` around the sector axis in `π/16` steps.
const RAYS_PER_SECTOR: usize = 5;
const RAY_HALF_SPAN: f64 = PI / 8.0;
const RAY_STEP: f64 = PI / 16.0;

const ETA: f64 = 0.1;
const LAMBDA: f64 = 0.5;

/// Weighted statistics of one sector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectorSample {
    /// Weighted mean color.
    pub average_color: Rgb,
    /// Rec.601-weighted variance of the color.
    pub variance: f32,
}

/// Polynomial sample weight in the sector's local frame (`x` along the axis, `y` across it).
pub fn sector_weight(x: f64, y: f64) -> f64 {
    let poly = (x + ETA) - LAMBDA * y * y;
    (poly * poly).max(0.0)
}

/// Statistics of the sector whose axis points along `angle`, sampled at radii `1..=radius`.
///
/// Returns `None` when the sector collected no weight (radius `0`).
pub fn sector_statistics(
    color: &Plane<Rgba>,
    center: Point,
    angle: f64,
    radius: u32,
) -> Option<SectorSample> {
    let mut sum = [0.0f64; 3];
    let mut sum_sq = [0.0f64; 3];
    let mut total = 0.0f64;

    for r in 1..=radius {
        let r = f64::from(r);
        for k in 0..RAYS_PER_SECTOR {
            let a = -RAY_HALF_SPAN + (k as f64) * RAY_STEP;
            let local = Vec2::from_angle(a) * r;
            let w = sector_weight(local.x, local.y);
            let c = color.sample(center + Vec2::from_angle(angle + a) * r);
            for i in 0..3 {
                let v = f64::from(c[i]);
                sum[i] += v * w;
                sum_sq[i] += v * v * w;
            }
            total += w;
        }
    }

    if total <= 0.0 {
        return None;
    }

    let mean = sum.map(|s| s / total);
    let var: [f64; 3] = std::array::from_fn(|i| sum_sq[i] / total - mean[i] * mean[i]);
    Some(SectorSample {
        average_color: mean.map(|m| m as f32),
        variance: dot3(var.map(|v| v as f32), LUMA_601),
    })
}

/// Filter pixel `(x, y)` of `color`.
///
/// Returns the mean of the minimum-variance sector, with ties going to the lowest sector index.
/// A radius that collects no samples returns the center pixel unmodified.
pub fn kuwahara(color: &Plane<Rgba>, x: u32, y: u32, radius: u32) -> Rgba {
    let center = Resolution::frag_coord(x, y);
    let mut best: Option<SectorSample> = None;

    for i in 0..SECTOR_COUNT {
        let angle = (i as f64) * TAU / (SECTOR_COUNT as f64);
        let Some(sample) = sector_statistics(color, center, angle, radius) else {
            continue;
        };
        if best.is_none_or(|b| sample.variance < b.variance) {
            best = Some(sample);
        }
    }

    match best {
        Some(s) => opaque(s.average_color),
        None => color.texel(i64::from(x), i64::from(y)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/kuwahara.rs"]
mod tests;
