//! Brushwork turns rasterized 3D frames into hand-drawn looking images.
//!
//! Each frame arrives as color, depth and normal buffers. The stylizer derives painterly color
//! (anisotropic Kuwahara, posterization, shadow conventions), sketchy ink outlines, and a
//! persistent watercolor trail driven by a brush mask, and composites them over paper.
//!
//! - Describe the look with [`StyleParameters`]
//! - Create a [`Stylizer`] for a fixed [`Resolution`]
//! - Call [`Stylizer::render_frame`] once per frame
#![forbid(unsafe_code)]

mod assets;
mod foundation;

pub(crate) mod effects;
pub(crate) mod frame;
pub(crate) mod noise;
pub(crate) mod render;
pub(crate) mod style;

pub use crate::foundation::core::{BLACK, Point, Resolution, Rgb, Rgba, Vec2, WHITE};
pub use crate::foundation::error::{BrushworkError, BrushworkResult};
pub use crate::foundation::math::{LUMA_601, LUMA_709, luma601, luma709};

pub use crate::assets::decode::{
    decode_depth_plane, decode_rgba_plane, encode_png, load_depth_plane, load_rgba_plane,
    write_png,
};
pub use crate::assets::procedural::{cloud_texture, paper_texture};
pub use crate::effects::composite::{CompositeInputs, PAPER_WASH, composite, sketch_color};
pub use crate::effects::edge::{Jitter, displacement, edge_signal};
pub use crate::effects::kuwahara::{SECTOR_COUNT, SectorSample, kuwahara, sector_statistics};
pub use crate::effects::posterize::{aces_film, posterize, quantize_luma};
pub use crate::effects::shadow::{BACKGROUND_DEPTH, ShadeSite, ShadowQuantizer};
pub use crate::effects::sketch::sketch_outline;
pub use crate::effects::watercolor::{Dissipation, TrailBlend, TrailSlot, WatercolorAccumulator};
pub use crate::frame::buffers::{FrameBuffers, OutputFrame};
pub use crate::frame::plane::{Plane, Texel};
pub use crate::noise::hash::{fbm, gradient_noise, hash12, value_noise};
pub use crate::render::kernel::{PixelContext, stylize_pixel};
pub use crate::render::pipeline::{StyleTextures, Stylizer, StylizerOpts};
pub use crate::style::color::ColorRgb;
pub use crate::style::params::{BlendMode, ShadowMode, StyleParameters};
