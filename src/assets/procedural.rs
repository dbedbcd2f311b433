use crate::foundation::core::{Point, Resolution, Rgba};
use crate::frame::plane::Plane;
use crate::noise::hash::fbm;

/// Warm paper tone the procedural paper grain is centered on.
const PAPER_TINT: [f32; 3] = [0.96, 0.94, 0.9];

/// Procedural stand-in for a scanned watercolor-paper texture.
///
/// Low-frequency blotches plus fine grain, kept close to the paper tint so multiplying by it
/// only darkens slightly.
pub fn paper_texture(resolution: Resolution, seed: u64) -> Plane<Rgba> {
    Plane::from_fn(resolution, |x, y| {
        let p = Point::new(f64::from(x), f64::from(y));
        let blotch = fbm(seed, Point::new(p.x / 48.0, p.y / 48.0), 4);
        let grain = fbm(seed ^ 0x9e37_79b9, Point::new(p.x / 2.5, p.y / 2.5), 2);
        let shade = 0.86 + 0.1 * blotch + 0.04 * grain;
        [
            PAPER_TINT[0] * shade,
            PAPER_TINT[1] * shade,
            PAPER_TINT[2] * shade,
            1.0,
        ]
    })
}

/// Procedural stand-in for a grayscale cloud-noise texture.
pub fn cloud_texture(resolution: Resolution, seed: u64) -> Plane<Rgba> {
    Plane::from_fn(resolution, |x, y| {
        let p = Point::new(f64::from(x) / 32.0, f64::from(y) / 32.0);
        let v = fbm(seed, p, 5);
        [v, v, v, 1.0]
    })
}
