//! Per-pixel stylization.

use crate::effects::composite::{CompositeInputs, composite, sketch_color};
use crate::effects::edge::{displacement, edge_signal};
use crate::effects::kuwahara::kuwahara;
use crate::effects::posterize::posterize;
use crate::effects::shadow::{ShadeSite, ShadowQuantizer};
use crate::effects::sketch::sketch_outline;
use crate::foundation::core::{Resolution, Rgba};
use crate::foundation::math::step;
use crate::frame::buffers::FrameBuffers;
use crate::frame::plane::Plane;
use crate::style::params::{BlendMode, StyleParameters};

/// Everything one pixel of one frame may read.
///
/// All planes share the frame's resolution.
#[derive(Clone, Copy, Debug)]
pub struct PixelContext<'a> {
    pub frame: &'a FrameBuffers,
    pub params: &'a StyleParameters,
    pub paper: &'a Plane<Rgba>,
    pub cloud: &'a Plane<Rgba>,
    pub trail: &'a Plane<Rgba>,
}

impl PixelContext<'_> {
    pub fn resolution(&self) -> Resolution {
        self.frame.resolution()
    }
}

/// Stylize pixel `(x, y)`.
///
/// Only the signals the blend mode consumes are computed.
pub fn stylize_pixel(ctx: &PixelContext<'_>, x: u32, y: u32) -> Rgba {
    let mode = ctx.params.blend_mode;
    let input = ctx.frame.color.texel(i64::from(x), i64::from(y));
    if mode == BlendMode::Original {
        return input;
    }

    let needs_paint = matches!(mode, BlendMode::Paint | BlendMode::Blended);
    let needs_sketch = matches!(mode, BlendMode::Sketch | BlendMode::Blended);
    let (kuwahara, shadow) = if needs_paint {
        paint_colors(ctx, x, y)
    } else {
        (input, input)
    };
    let sketch = if needs_sketch {
        sketch_layer(ctx, x, y)
    } else {
        input
    };

    let uv = ctx.resolution().uv(x, y);
    composite(
        mode,
        &CompositeInputs {
            input,
            kuwahara,
            sketch,
            shadow,
            trail: ctx.trail.texel(i64::from(x), i64::from(y)),
            paper: ctx.paper.sample_uv(uv),
        },
    )
}

/// Posterized Kuwahara color and its shadow-quantized variant.
fn paint_colors(ctx: &PixelContext<'_>, x: u32, y: u32) -> (Rgba, Rgba) {
    let p = ctx.params;
    let res = ctx.resolution();
    let posterized = posterize(kuwahara(&ctx.frame.color, x, y, p.kuwahara_radius));
    let site = ShadeSite {
        uv: res.uv(x, y),
        resolution: res,
        displacement: displacement(Resolution::frag_coord(x, y), res, p.jitter()),
    };
    let depth = ctx.frame.depth.texel(i64::from(x), i64::from(y));
    let shadow = ShadowQuantizer::from_params(p).shade(posterized, depth, site);
    (posterized, shadow)
}

/// Ink from the sketchy outline, plus depth+normal silhouettes when `silhouette_threshold` is set.
fn sketch_layer(ctx: &PixelContext<'_>, x: u32, y: u32) -> Rgba {
    let p = ctx.params;
    let f = ctx.frame;
    let mut ink = sketch_outline(&f.color, &f.normal, ctx.cloud, x, y, p.outline_threshold);
    if let Some(threshold) = p.silhouette_threshold {
        let edge = edge_signal(&f.depth, &f.normal, x, y, p.outline_thickness, p.jitter());
        ink = ink.max(step(threshold, edge.clamp(0.0, 1.0)));
    }
    sketch_color(ink, p.outline_color.to_rgba())
}

#[cfg(test)]
#[path = "../../tests/unit/render/kernel.rs"]
mod tests;
