use std::io::Cursor;
use std::path::Path;

use anyhow::Context;

use crate::foundation::core::{Resolution, Rgba};
use crate::foundation::error::{BrushworkError, BrushworkResult};
use crate::frame::buffers::OutputFrame;
use crate::frame::plane::Plane;

/// Decode an encoded image (PNG, JPEG, ...) into a straight-alpha float RGBA plane.
pub fn decode_rgba_plane(bytes: &[u8]) -> BrushworkResult<Plane<Rgba>> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let res = Resolution::new(width, height)?;

    let data = rgba
        .pixels()
        .map(|p| p.0.map(|c| f32::from(c) / 255.0))
        .collect();
    Plane::from_vec(res, data)
}

/// Decode an encoded image into a scalar depth plane using its 16-bit luma.
pub fn decode_depth_plane(bytes: &[u8]) -> BrushworkResult<Plane<f32>> {
    let dyn_img = image::load_from_memory(bytes).context("decode depth image from memory")?;
    let luma = dyn_img.to_luma16();
    let (width, height) = luma.dimensions();
    let res = Resolution::new(width, height)?;

    let data = luma
        .pixels()
        .map(|p| f32::from(p.0[0]) / f32::from(u16::MAX))
        .collect();
    Plane::from_vec(res, data)
}

pub fn load_rgba_plane(path: &Path) -> BrushworkResult<Plane<Rgba>> {
    let bytes = std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    decode_rgba_plane(&bytes)
}

pub fn load_depth_plane(path: &Path) -> BrushworkResult<Plane<f32>> {
    let bytes = std::fs::read(path).with_context(|| format!("read depth '{}'", path.display()))?;
    decode_depth_plane(&bytes)
}

/// Encode an output frame as an RGBA8 PNG.
pub fn encode_png(frame: &OutputFrame) -> BrushworkResult<Vec<u8>> {
    let img = image::RgbaImage::from_raw(frame.width, frame.height, frame.to_rgba8())
        .ok_or_else(|| BrushworkError::decode("output frame does not match its dimensions"))?;

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}

pub fn write_png(frame: &OutputFrame, path: &Path) -> BrushworkResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &frame.to_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
