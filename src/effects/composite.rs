use crate::foundation::core::Rgba;
use crate::foundation::math::{mix_rgba, mul_rgba};
use crate::style::params::BlendMode;

/// Flat paper wash that sketch ink sits on.
pub const PAPER_WASH: Rgba = [0.957, 0.941, 0.910, 1.0];

/// Sketch color for an ink coverage in `[0, 1]`.
pub fn sketch_color(ink: f32, outline_color: Rgba) -> Rgba {
    mix_rgba(PAPER_WASH, outline_color, ink)
}

/// Per-pixel signals feeding the final composition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompositeInputs {
    /// Unmodified input color.
    pub input: Rgba,
    /// Posterized Kuwahara color. Paint and blended output are built from this.
    pub kuwahara: Rgba,
    /// Ink over paper wash, see [`sketch_color`].
    pub sketch: Rgba,
    /// Shadow-quantized color. Carried for callers that composite it themselves; no blend mode
    /// reads it.
    pub shadow: Rgba,
    /// Watercolor trail; only red is read.
    pub trail: Rgba,
    /// Paper texture sample.
    pub paper: Rgba,
}

/// Assemble the output pixel for `mode`.
pub fn composite(mode: BlendMode, inputs: &CompositeInputs) -> Rgba {
    match mode {
        BlendMode::Original => inputs.input,
        BlendMode::Sketch => mul_rgba(inputs.sketch, inputs.paper),
        BlendMode::Paint => mul_rgba(inputs.kuwahara, inputs.paper),
        BlendMode::Blended => mul_rgba(
            mix_rgba(inputs.kuwahara, inputs.sketch, inputs.trail[0]),
            inputs.paper,
        ),
    }
}
