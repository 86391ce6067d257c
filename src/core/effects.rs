//! Post-processing chain description and the CPU form of its per-pixel rules.
//!
//! The renderer evaluates the same formulas in `shaders/post.wgsl`; keeping
//! them here lets the chain be configured and checked without a GPU.

use super::constants::*;
use super::easing::smoothstep;
use glam::{Vec2, Vec3};
use smallvec::SmallVec;

/// How the depth-of-field mask is combined with the blurred color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MaskFunction {
    /// Drop texels whose mask is zero, keep the rest untouched.
    Discard,
    /// Scale every channel by the mask.
    #[default]
    Multiply,
    /// Scale RGB by the mask and replace alpha with the mask.
    MultiplyRgbSetAlpha,
}

impl MaskFunction {
    pub fn apply(self, texel: [f32; 4], mask: f32) -> [f32; 4] {
        let [r, g, b, a] = texel;
        match self {
            MaskFunction::Discard if mask <= 0.0 => [0.0; 4],
            MaskFunction::Discard => texel,
            MaskFunction::Multiply => [r * mask, g * mask, b * mask, a * mask],
            MaskFunction::MultiplyRgbSetAlpha => [r * mask, g * mask, b * mask, mask],
        }
    }

    /// Code passed to the post shader.
    pub fn shader_code(self) -> u32 {
        match self {
            MaskFunction::Discard => 0,
            MaskFunction::Multiply => 1,
            MaskFunction::MultiplyRgbSetAlpha => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthOfField {
    /// World-space point kept in focus.
    pub target: Vec3,
    pub bokeh_scale: f32,
    /// Width of the in-focus band in world units; zero means hard focus.
    pub focal_length: f32,
    /// Reference resolution the blur radius is expressed against.
    pub width: u32,
    pub mask: MaskFunction,
}

impl DepthOfField {
    pub fn new(target: Vec3, bokeh_scale: f32, focal_length: f32, width: u32) -> Self {
        Self {
            target,
            bokeh_scale,
            focal_length,
            width,
            mask: MaskFunction::default(),
        }
    }

    pub fn with_mask(mut self, mask: MaskFunction) -> Self {
        self.mask = mask;
        self
    }

    pub fn focus_range(&self) -> f32 {
        self.focal_length.max(DOF_MIN_FOCUS_RANGE)
    }

    /// Circle of confusion in [0, 1] for a fragment at `depth` (view distance).
    pub fn circle_of_confusion(&self, depth: f32, focus_distance: f32) -> f32 {
        smoothstep(0.0, self.focus_range(), (depth - focus_distance).abs())
    }

    /// Blur radius in pixels for a surface `surface_width` pixels wide.
    pub fn blur_radius_px(&self, coc: f32, surface_width: u32) -> f32 {
        let rel = surface_width as f32 / self.width.max(1) as f32;
        coc * DOF_BASE_BLUR_PX * self.bokeh_scale * rel
    }

    /// Blend the sharp scene with its blurred copy using the CoC as mask.
    pub fn composite(&self, sharp: [f32; 4], blurred: [f32; 4], coc: f32) -> [f32; 4] {
        let far = self.mask.apply(blurred, coc);
        let keep = 1.0 - coc;
        [
            sharp[0] * keep + far[0],
            sharp[1] * keep + far[1],
            sharp[2] * keep + far[2],
            sharp[3] * keep + far[3],
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vignette {
    pub offset: f32,
    pub darkness: f32,
    pub softness: f32,
}

impl Default for Vignette {
    fn default() -> Self {
        Self {
            offset: VIGNETTE_OFFSET,
            darkness: VIGNETTE_DARKNESS,
            softness: VIGNETTE_SOFTNESS,
        }
    }
}

impl Vignette {
    pub fn with_softness(mut self, softness: f32) -> Self {
        self.softness = softness;
        self
    }

    /// Brightness multiplier at `uv`: 1 near the center, falling to
    /// `1 - darkness` past `offset`, over a band `softness` wide.
    pub fn factor(&self, uv: Vec2) -> f32 {
        // 0 at the center, 1 at the corners
        let dist = (uv - Vec2::splat(0.5)).length() * std::f32::consts::SQRT_2;
        let start = (self.offset - self.softness * 0.5).max(0.0);
        let end = self.offset + self.softness * 0.5;
        1.0 - self.darkness * smoothstep(start, end, dist)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    DepthOfField(DepthOfField),
    Vignette(Vignette),
}

/// Ordered list of full-screen effects applied after the scene pass.
#[derive(Clone, Debug, Default)]
pub struct EffectChain {
    effects: SmallVec<[Effect; 4]>,
}

impl EffectChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn depth_of_field(&self) -> Option<&DepthOfField> {
        self.effects.iter().find_map(|e| match e {
            Effect::DepthOfField(d) => Some(d),
            _ => None,
        })
    }

    pub fn vignette(&self) -> Option<&Vignette> {
        self.effects.iter().find_map(|e| match e {
            Effect::Vignette(v) => Some(v),
            _ => None,
        })
    }

    /// Depth of field focused on the foreground object, then a soft vignette.
    ///
    /// The mask writes alpha so the canvas composites correctly over the page.
    pub fn scene_default() -> Self {
        Self::new()
            .push(Effect::DepthOfField(
                DepthOfField::new(DOF_TARGET, DOF_BOKEH_SCALE, DOF_FOCAL_LENGTH, DOF_WIDTH)
                    .with_mask(MaskFunction::MultiplyRgbSetAlpha),
            ))
            .push(Effect::Vignette(
                Vignette::default().with_softness(VIGNETTE_SOFTNESS),
            ))
    }
}
