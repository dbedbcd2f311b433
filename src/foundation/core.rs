use crate::foundation::error::{BrushworkError, BrushworkResult};

pub use kurbo::{Point, Vec2};

/// Straight-alpha linear RGBA, channels nominally in `[0, 1]`.
pub type Rgba = [f32; 4];
/// RGB triple, channels nominally in `[0, 1]`.
pub type Rgb = [f32; 3];

/// Opaque white.
pub const WHITE: Rgba = [1.0, 1.0, 1.0, 1.0];
/// Opaque black.
pub const BLACK: Rgba = [0.0, 0.0, 0.0, 1.0];

/// Frame dimensions in pixels.
///
/// Always non-empty: the only ways in are [`Resolution::new`] and deserialization, and both
/// reject a zero dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "ResolutionRepr")]
pub struct Resolution {
    width: u32,
    height: u32,
}

#[derive(serde::Deserialize)]
struct ResolutionRepr {
    width: u32,
    height: u32,
}

impl TryFrom<ResolutionRepr> for Resolution {
    type Error = BrushworkError;

    fn try_from(repr: ResolutionRepr) -> Result<Self, Self::Error> {
        Self::new(repr.width, repr.height)
    }
}

impl Resolution {
    /// Create a validated, non-empty resolution.
    pub fn new(width: u32, height: u32) -> BrushworkResult<Self> {
        if width == 0 || height == 0 {
            return Err(BrushworkError::validation(format!(
                "resolution must be non-empty, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Width in pixels.
    pub fn width(self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(self) -> u32 {
        self.height
    }

    /// Total pixel count.
    pub fn pixel_count(self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    /// Resolution as a vector, for uv <-> pixel conversions.
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(f64::from(self.width), f64::from(self.height))
    }

    /// Size of one texel in uv units.
    pub fn texel(self) -> Vec2 {
        Vec2::new(1.0 / f64::from(self.width), 1.0 / f64::from(self.height))
    }

    /// Fragment coordinate (pixel center) of pixel `(x, y)`.
    pub fn frag_coord(x: u32, y: u32) -> Point {
        Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5)
    }

    /// Normalized coordinate of the center of pixel `(x, y)`.
    pub fn uv(self, x: u32, y: u32) -> Point {
        let f = Self::frag_coord(x, y);
        Point::new(f.x / f64::from(self.width), f.y / f64::from(self.height))
    }
}

/// Build an opaque color from RGB.
pub fn opaque(rgb: Rgb) -> Rgba {
    [rgb[0], rgb[1], rgb[2], 1.0]
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
