use rayon::prelude::*;

use crate::assets::procedural::{cloud_texture, paper_texture};
use crate::effects::watercolor::{Dissipation, TrailBlend, WatercolorAccumulator};
use crate::foundation::core::{Resolution, Rgba};
use crate::foundation::error::{BrushworkError, BrushworkResult};
use crate::frame::buffers::{FrameBuffers, OutputFrame};
use crate::frame::plane::Plane;
use crate::render::kernel::{PixelContext, stylize_pixel};
use crate::style::params::StyleParameters;

/// Static textures sampled by every frame.
#[derive(Clone, Debug)]
pub struct StyleTextures {
    /// Multiplied into every stylized output.
    pub paper: Plane<Rgba>,
    /// Drives the sketch jitter; only red is read.
    pub cloud: Plane<Rgba>,
}

impl StyleTextures {
    /// Procedurally generated paper and cloud textures.
    pub fn procedural(resolution: Resolution, seed: u64) -> Self {
        Self {
            paper: paper_texture(resolution, seed),
            cloud: cloud_texture(resolution, seed.wrapping_add(1)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct StylizerOpts {
    /// Render rows on a rayon pool. Output is identical either way.
    pub parallel: bool,
    /// Worker count for the pool; `None` lets rayon decide.
    pub threads: Option<usize>,
}

impl Default for StylizerOpts {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: None,
        }
    }
}

/// Frame-to-frame stylizer owning the watercolor trail.
///
/// One instance serves one fixed output resolution; resizing means building a new one.
pub struct Stylizer {
    textures: StyleTextures,
    accumulator: WatercolorAccumulator,
    trail_blend: Box<dyn TrailBlend>,
    pool: Option<rayon::ThreadPool>,
}

impl Stylizer {
    pub fn new(
        resolution: Resolution,
        textures: StyleTextures,
        opts: StylizerOpts,
    ) -> BrushworkResult<Self> {
        for (name, plane) in [("paper", &textures.paper), ("cloud", &textures.cloud)] {
            if plane.resolution() != resolution {
                return Err(BrushworkError::validation(format!(
                    "{name} texture is {}x{}, stylizer is {}x{}",
                    plane.width(),
                    plane.height(),
                    resolution.width(),
                    resolution.height()
                )));
            }
        }
        let pool = if opts.parallel {
            Some(build_thread_pool(opts.threads)?)
        } else {
            None
        };
        Ok(Self {
            textures,
            accumulator: WatercolorAccumulator::new(resolution)?,
            trail_blend: Box::new(Dissipation::default()),
            pool,
        })
    }

    /// Replace the trail blend function.
    pub fn with_trail_blend(mut self, blend: impl TrailBlend + 'static) -> Self {
        self.trail_blend = Box::new(blend);
        self
    }

    pub fn resolution(&self) -> Resolution {
        self.accumulator.resolution()
    }

    pub fn accumulator(&self) -> &WatercolorAccumulator {
        &self.accumulator
    }

    /// Advance the watercolor trail with `brush` and stylize `frame`.
    ///
    /// Every input is checked before the trail is touched; on error the stylizer is unchanged.
    #[tracing::instrument(
        skip_all,
        fields(frame = self.accumulator.frames(), mode = ?params.blend_mode)
    )]
    pub fn render_frame(
        &mut self,
        frame: &FrameBuffers,
        brush: &Plane<Rgba>,
        params: &StyleParameters,
        delta_time: f32,
    ) -> BrushworkResult<OutputFrame> {
        let res = self.resolution();
        if frame.resolution() != res {
            let got = frame.resolution();
            return Err(BrushworkError::validation(format!(
                "frame is {}x{}, stylizer is {}x{}",
                got.width(), got.height(), res.width(), res.height()
            )));
        }
        params.validate()?;

        self.accumulator
            .advance(brush, delta_time, self.trail_blend.as_ref())?;

        let ctx = PixelContext {
            frame,
            params,
            paper: &self.textures.paper,
            cloud: &self.textures.cloud,
            trail: self.accumulator.trail(),
        };
        let data = match &self.pool {
            Some(pool) => pool.install(|| render_rows_parallel(&ctx)),
            None => render_rows(&ctx),
        };
        tracing::debug!(width = res.width(), height = res.height(), "frame stylized");

        Ok(OutputFrame {
            width: res.width(),
            height: res.height(),
            data,
        })
    }
}

fn render_rows(ctx: &PixelContext<'_>) -> Vec<Rgba> {
    let res = ctx.resolution();
    let mut data = vec![[0.0; 4]; res.pixel_count()];
    for (y, row) in data.chunks_mut(res.width() as usize).enumerate() {
        fill_row(ctx, y as u32, row);
    }
    data
}

fn render_rows_parallel(ctx: &PixelContext<'_>) -> Vec<Rgba> {
    let res = ctx.resolution();
    let mut data = vec![[0.0; 4]; res.pixel_count()];
    data.par_chunks_mut(res.width() as usize)
        .enumerate()
        .for_each(|(y, row)| fill_row(ctx, y as u32, row));
    data
}

fn fill_row(ctx: &PixelContext<'_>, y: u32, row: &mut [Rgba]) {
    for (x, px) in row.iter_mut().enumerate() {
        *px = stylize_pixel(ctx, x as u32, y);
    }
}

fn build_thread_pool(threads: Option<usize>) -> BrushworkResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(BrushworkError::validation(
            "stylizer 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| BrushworkError::allocation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
