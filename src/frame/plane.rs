use crate::foundation::core::{Point, Resolution, Rgba};
use crate::foundation::error::{BrushworkError, BrushworkResult};

/// Values that can be linearly interpolated by a bilinear sampler.
pub trait Texel: Copy + Send + Sync {
    /// `a + (b - a) * t`; exact when `a == b`.
    fn lerp(a: Self, b: Self, t: f32) -> Self;
}

impl Texel for f32 {
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a + (b - a) * t
    }
}

impl Texel for Rgba {
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        std::array::from_fn(|i| a[i] + (b[i] - a[i]) * t)
    }
}

/// Owned, tightly packed, row-major pixel grid.
///
/// All reads clamp to the edge; sampling never wraps and never faults.
#[derive(Clone, Debug, PartialEq)]
pub struct Plane<T> {
    resolution: Resolution,
    data: Vec<T>,
}

impl<T: Texel> Plane<T> {
    /// Allocate a plane filled with `value`.
    ///
    /// Returns an `allocation` error instead of aborting when the buffer cannot be reserved.
    pub fn try_filled(resolution: Resolution, value: T) -> BrushworkResult<Self> {
        let len = resolution.pixel_count();
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|e| {
            BrushworkError::allocation(format!(
                "cannot allocate {}x{} plane: {e}",
                resolution.width(), resolution.height()
            ))
        })?;
        data.resize(len, value);
        Ok(Self { resolution, data })
    }

    /// Allocate a plane filled with `value`, panicking on allocation failure like `vec!`.
    pub fn filled(resolution: Resolution, value: T) -> Self {
        Self {
            resolution,
            data: vec![value; resolution.pixel_count()],
        }
    }

    /// Wrap existing row-major data.
    pub fn from_vec(resolution: Resolution, data: Vec<T>) -> BrushworkResult<Self> {
        if data.len() != resolution.pixel_count() {
            return Err(BrushworkError::validation(format!(
                "plane data length {} does not match {}x{}",
                data.len(),
                resolution.width(),
                resolution.height()
            )));
        }
        Ok(Self { resolution, data })
    }

    /// Build a plane by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(resolution: Resolution, mut f: impl FnMut(u32, u32) -> T) -> Self {
        let mut data = Vec::with_capacity(resolution.pixel_count());
        for y in 0..resolution.height() {
            for x in 0..resolution.width() {
                data.push(f(x, y));
            }
        }
        Self { resolution, data }
    }

    pub fn width(&self) -> u32 {
        self.resolution.width()
    }

    pub fn height(&self) -> u32 {
        self.resolution.height()
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Texel at integer coordinates, clamped to the edge.
    pub fn texel(&self, x: i64, y: i64) -> T {
        let x = x.clamp(0, i64::from(self.width()) - 1) as usize;
        let y = y.clamp(0, i64::from(self.height()) - 1) as usize;
        self.data[y * self.width() as usize + x]
    }

    /// Bilinear sample at a pixel-space position (texel centers sit at `i + 0.5`).
    pub fn sample(&self, p: Point) -> T {
        let x = p.x - 0.5;
        let y = p.y - 0.5;
        let x0 = x.floor();
        let y0 = y.floor();
        let fx = (x - x0) as f32;
        let fy = (y - y0) as f32;
        let (x0, y0) = (x0 as i64, y0 as i64);

        let top = T::lerp(self.texel(x0, y0), self.texel(x0 + 1, y0), fx);
        let bottom = T::lerp(self.texel(x0, y0 + 1), self.texel(x0 + 1, y0 + 1), fx);
        T::lerp(top, bottom, fy)
    }

    /// Bilinear sample at a normalized coordinate in `[0, 1]^2`.
    pub fn sample_uv(&self, uv: Point) -> T {
        self.sample(Point::new(
            uv.x * f64::from(self.width()),
            uv.y * f64::from(self.height()),
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/plane.rs"]
mod tests;
