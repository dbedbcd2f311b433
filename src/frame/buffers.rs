use crate::foundation::core::{Resolution, Rgba};
use crate::foundation::error::{BrushworkError, BrushworkResult};
use crate::frame::plane::Plane;

/// Per-frame input buffers produced by the external rasterizer.
///
/// Read-only to the stylizer and valid for exactly one frame.
#[derive(Clone, Debug)]
pub struct FrameBuffers {
    /// Scene color.
    pub color: Plane<Rgba>,
    /// Depth in `[0, 1]`, `1.0` is background.
    pub depth: Plane<f32>,
    /// View-space normal encoded from `[-1, 1]` into `[0, 1]` RGB.
    pub normal: Plane<Rgba>,
}

impl FrameBuffers {
    /// Bundle the three planes, checking that they share one resolution.
    pub fn new(color: Plane<Rgba>, depth: Plane<f32>, normal: Plane<Rgba>) -> BrushworkResult<Self> {
        let res = color.resolution();
        if depth.resolution() != res || normal.resolution() != res {
            return Err(BrushworkError::validation(format!(
                "frame buffers disagree on resolution: color {}x{}, depth {}x{}, normal {}x{}",
                res.width(),
                res.height(),
                depth.width(),
                depth.height(),
                normal.width(),
                normal.height()
            )));
        }
        Ok(Self {
            color,
            depth,
            normal,
        })
    }

    pub fn resolution(&self) -> Resolution {
        self.color.resolution()
    }
}

/// A stylized output frame as straight-alpha float RGBA.
#[derive(Clone, Debug, PartialEq)]
pub struct OutputFrame {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Row-major pixels.
    pub data: Vec<Rgba>,
}

impl OutputFrame {
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Quantize to tightly packed straight-alpha RGBA8.
    pub fn to_rgba8(&self) -> Vec<u8> {
        fn to_u8(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        let mut out = Vec::with_capacity(self.data.len() * 4);
        for px in &self.data {
            out.extend(px.iter().map(|&c| to_u8(c)));
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/buffers.rs"]
mod tests;
