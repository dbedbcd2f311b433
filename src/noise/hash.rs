//! Stateless pseudo-random generators keyed by screen coordinates.
//!
//! Everything here is a pure function of its inputs, so the same pixel always receives the same
//! jitter, frame after frame.

use crate::foundation::core::{Point, Vec2};
use crate::foundation::math::{Fnv1a64, fract};

/// Scalar hash of a 2D coordinate in `[0, 1)`.
pub fn hash12(p: Point) -> f64 {
    let mut p3 = [fract(p.x * 0.1031), fract(p.y * 0.1031), fract(p.x * 0.1031)];
    let d = p3[0] * (p3[1] + 33.33) + p3[1] * (p3[2] + 33.33) + p3[2] * (p3[0] + 33.33);
    for c in &mut p3 {
        *c += d;
    }
    fract((p3[0] + p3[1]) * p3[2])
}

/// One of eight axis/diagonal gradients for an integer lattice point.
fn lattice_gradient(ix: i32, iy: i32) -> Vec2 {
    let mut n = ix.wrapping_add(iy.wrapping_mul(11111));
    n = n.wrapping_shl(13) ^ n;
    n = n
        .wrapping_mul(
            n.wrapping_mul(n)
                .wrapping_mul(15731)
                .wrapping_add(789_221),
        )
        .wrapping_add(1_376_312_589)
        >> 16;
    n &= 7;

    let gx = f64::from(n & 1) * 2.0 - 1.0;
    let gy = f64::from(n >> 1) * 2.0 - 1.0;
    if n >= 6 {
        Vec2::new(0.0, gx)
    } else if n >= 4 {
        Vec2::new(gx, 0.0)
    } else {
        Vec2::new(gx, gy)
    }
}

/// 2D gradient noise in `[-1, 1]`.
///
/// Diagonal lattice gradients are not normalized, so the extremes are reachable; typical values
/// stay well inside `[-0.7, 0.7]`.
pub fn gradient_noise(p: Point) -> f64 {
    let ix = p.x.floor() as i32;
    let iy = p.y.floor() as i32;
    let f = Vec2::new(fract(p.x), fract(p.y));
    let u = Vec2::new(
        f.x * f.x * (3.0 - 2.0 * f.x),
        f.y * f.y * (3.0 - 2.0 * f.y),
    );

    let corner = |dx: i32, dy: i32| {
        let g = lattice_gradient(ix.wrapping_add(dx), iy.wrapping_add(dy));
        g.dot(f - Vec2::new(f64::from(dx), f64::from(dy)))
    };

    let bottom = corner(0, 0) + (corner(1, 0) - corner(0, 0)) * u.x;
    let top = corner(0, 1) + (corner(1, 1) - corner(0, 1)) * u.x;
    bottom + (top - bottom) * u.y
}

/// Gradient noise remapped by `(n * 2 - 1) * 10`.
///
/// The result lies in `[-30, 10]` and centers on `-10`.
pub fn value_noise(p: Point) -> f64 {
    (gradient_noise(p) * 2.0 - 1.0) * 10.0
}

/// 32-bit hash of an integer lattice point under `seed`.
pub fn lattice_hash(seed: u64, x: i64, y: i64) -> u32 {
    let mut h = Fnv1a64::new(seed ^ Fnv1a64::OFFSET_BASIS);
    h.write_u64(x as u64);
    h.write_u64(y as u64);
    (h.finish() & 0xFFFF_FFFF) as u32
}

/// Smoothly interpolated lattice value noise in `[0, 1]`.
pub fn lattice_value(seed: u64, p: Point) -> f32 {
    let x0 = p.x.floor();
    let y0 = p.y.floor();
    let tx = smooth(p.x - x0);
    let ty = smooth(p.y - y0);
    let (ix, iy) = (x0 as i64, y0 as i64);

    let v = |dx: i64, dy: i64| f64::from(lattice_hash(seed, ix + dx, iy + dy)) / f64::from(u32::MAX);
    let bottom = v(0, 0) + (v(1, 0) - v(0, 0)) * tx;
    let top = v(0, 1) + (v(1, 1) - v(0, 1)) * tx;
    (bottom + (top - bottom) * ty) as f32
}

/// Fractal sum of [`lattice_value`] octaves, normalized back into `[0, 1]`.
pub fn fbm(seed: u64, p: Point, octaves: u32) -> f32 {
    let mut sum = 0.0f32;
    let mut norm = 0.0f32;
    let mut amp = 1.0f32;
    let mut freq = 1.0f64;
    for o in 0..octaves.max(1) {
        let q = Point::new(p.x * freq, p.y * freq);
        sum += lattice_value(seed.wrapping_add(u64::from(o)), q) * amp;
        norm += amp;
        amp *= 0.5;
        freq *= 2.0;
    }
    sum / norm
}

fn smooth(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
#[path = "../../tests/unit/noise/hash.rs"]
mod tests;
