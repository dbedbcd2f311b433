//! Ping-pong accumulation of a brush-driven pigment trail.
//!
//! Two same-sized buffers alternate roles every frame: one is read as "previous trail", the other
//! is written with the new trail. After [`WatercolorAccumulator::advance`] the freshly written
//! buffer becomes the readable trail and the roles swap.

use rayon::prelude::*;

use crate::foundation::core::{Resolution, Rgba, WHITE};
use crate::foundation::error::{BrushworkError, BrushworkResult};
use crate::foundation::math::mix_rgba;
use crate::frame::plane::Plane;

/// Combines the previous trail value with the current brush intensity.
pub trait TrailBlend: Send + Sync {
    /// `elapsed` is the accumulated frame time in seconds.
    fn blend(&self, previous: Rgba, brush: Rgba, elapsed: f32) -> Rgba;
}

impl<F> TrailBlend for F
where
    F: Fn(Rgba, Rgba, f32) -> Rgba + Send + Sync,
{
    fn blend(&self, previous: Rgba, brush: Rgba, elapsed: f32) -> Rgba {
        self(previous, brush, elapsed)
    }
}

/// Default blend: the trail recovers toward white each frame and the brush lays ink down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dissipation {
    /// Fraction of the previous trail kept per frame; the rest recovers to white.
    pub dissipation: f32,
    /// Scale applied to the brush red channel before mixing in ink.
    pub strength: f32,
    pub ink: Rgba,
}

impl Default for Dissipation {
    fn default() -> Self {
        Self {
            dissipation: 0.98,
            strength: 1.0,
            ink: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

impl TrailBlend for Dissipation {
    fn blend(&self, previous: Rgba, brush: Rgba, _elapsed: f32) -> Rgba {
        let recovery = (1.0 - self.dissipation).clamp(0.0, 1.0);
        let faded = mix_rgba(previous, WHITE, recovery);
        mix_rgba(faded, self.ink, (brush[0] * self.strength).clamp(0.0, 1.0))
    }
}

/// One of the two trail buffers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TrailSlot {
    A,
    B,
}

/// Frame-to-frame pigment trail state.
#[derive(Clone, Debug)]
pub struct WatercolorAccumulator {
    buffers: [Plane<Rgba>; 2],
    flip: bool,
    frames: u64,
    elapsed: f32,
}

impl WatercolorAccumulator {
    /// Allocate both buffers. The initial readable trail is white; the first write goes to
    /// [`TrailSlot::A`].
    pub fn new(resolution: Resolution) -> BrushworkResult<Self> {
        let a = Plane::try_filled(resolution, [0.0; 4])?;
        let b = Plane::try_filled(resolution, WHITE)?;
        Ok(Self {
            buffers: [a, b],
            flip: false,
            frames: 0,
            elapsed: 0.0,
        })
    }

    pub fn resolution(&self) -> Resolution {
        self.buffers[0].resolution()
    }

    /// Buffer the next [`advance`](Self::advance) writes into.
    pub fn current_write(&self) -> TrailSlot {
        if self.flip { TrailSlot::B } else { TrailSlot::A }
    }

    /// The most recently written trail (the initial white buffer before any frame).
    pub fn trail(&self) -> &Plane<Rgba> {
        &self.buffers[usize::from(!self.flip)]
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Blend `brush` into the trail and swap buffers.
    ///
    /// Inputs are validated before any state changes, so an error leaves the accumulator exactly
    /// as it was.
    #[tracing::instrument(skip_all, fields(frame = self.frames))]
    pub fn advance(
        &mut self,
        brush: &Plane<Rgba>,
        delta_time: f32,
        blend: &dyn TrailBlend,
    ) -> BrushworkResult<()> {
        let res = self.resolution();
        if brush.resolution() != res {
            return Err(BrushworkError::validation(format!(
                "brush is {}x{}, trail is {}x{}",
                brush.width(),
                brush.height(),
                res.width(),
                res.height()
            )));
        }
        if !delta_time.is_finite() || delta_time < 0.0 {
            return Err(BrushworkError::validation(format!(
                "delta_time must be finite and >= 0, got {delta_time}"
            )));
        }

        self.elapsed += delta_time;
        let elapsed = self.elapsed;
        let width = res.width() as usize;
        let (write, read) = self.split_mut();
        write
            .as_mut_slice()
            .par_chunks_mut(width)
            .zip(read.as_slice().par_chunks(width))
            .zip(brush.as_slice().par_chunks(width))
            .for_each(|((out, prev), brush)| {
                for ((o, p), b) in out.iter_mut().zip(prev).zip(brush) {
                    *o = blend.blend(*p, *b, elapsed);
                }
            });

        self.flip = !self.flip;
        self.frames += 1;
        tracing::debug!(
            frames = self.frames,
            elapsed,
            next_write = ?self.current_write(),
            "trail advanced"
        );
        Ok(())
    }

    fn split_mut(&mut self) -> (&mut Plane<Rgba>, &Plane<Rgba>) {
        let [a, b] = &mut self.buffers;
        if self.flip { (b, a) } else { (a, b) }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/watercolor.rs"]
mod tests;
