//! Static layer table, per-layer uniforms and plane geometry.

use super::camera::Viewport;
use super::constants::{COVER_FACTOR, LAYER_COUNT, WIGGLE_SEGMENTS};
use super::error::SceneError;
use glam::Vec3;

/// One entry of the fixed parallax stack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerSpec {
    pub texture: &'static str,
    pub position: Vec3,
    pub factor: f32,
    pub scale_factor: f32,
    pub wiggle: f32,
    /// Source aspect used for cover scaling (width, height).
    pub aspect: (f32, f32),
}

impl LayerSpec {
    const fn new(texture: &'static str, position: Vec3, aspect: (f32, f32)) -> Self {
        Self {
            texture,
            position,
            factor: 0.0,
            scale_factor: 1.0,
            wiggle: 0.0,
            aspect,
        }
    }

    const fn factor(mut self, factor: f32) -> Self {
        self.factor = factor;
        self
    }

    const fn scale_factor(mut self, scale_factor: f32) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    const fn wiggle(mut self, wiggle: f32) -> Self {
        self.wiggle = wiggle;
        self
    }

    /// Wiggling layers get a subdivided plane so the vertex sway has something to bend.
    pub fn segments(&self) -> u32 {
        if self.wiggle > 0.0 {
            WIGGLE_SEGMENTS
        } else {
            1
        }
    }
}

const FAR_ASPECT: (f32, f32) = (2600.0, 1000.0);
const NEAR_ASPECT: (f32, f32) = (1600.0, 1000.0);
const WIDE_ASPECT: (f32, f32) = (2200.0, 1000.0);

/// Back to front: background, stars, ground, foreground object, two leaf layers.
pub const LAYERS: [LayerSpec; LAYER_COUNT] = [
    LayerSpec::new("bgrd.png", Vec3::new(0.0, 0.0, 0.0), FAR_ASPECT).factor(0.05),
    LayerSpec::new("effect.png", Vec3::new(0.0, 0.0, 10.0), WIDE_ASPECT).factor(0.001),
    LayerSpec::new("bgrd_top.png", Vec3::new(0.0, 0.0, 20.0), WIDE_ASPECT).factor(0.01),
    LayerSpec::new("object.png", Vec3::new(0.0, 0.0, 30.0), NEAR_ASPECT).scale_factor(0.87),
    LayerSpec::new("leaves1.png", Vec3::new(0.0, 0.0, 40.0), WIDE_ASPECT)
        .factor(0.5)
        .wiggle(0.6),
    LayerSpec::new("leaves2.png", Vec3::new(-20.0, -20.0, 49.0), WIDE_ASPECT)
        .factor(0.15)
        .scale_factor(1.3)
        .wiggle(1.0),
];

/// Values bound to the layer shader.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerUniforms {
    pub movement: Vec3,
    pub factor: f32,
    pub scale: f32,
    pub wiggle: f32,
    pub time: f32,
}

impl LayerUniforms {
    pub fn from_spec(spec: &LayerSpec) -> Self {
        Self {
            movement: Vec3::ZERO,
            factor: spec.factor,
            scale: spec.scale_factor,
            wiggle: spec.wiggle,
            time: 0.0,
        }
    }
}

/// Indexed registration of per-layer uniforms.
///
/// Every slot must be filled exactly once before `finish` hands out the
/// fixed-size array; ordering of the `register` calls does not matter.
#[derive(Debug, Default)]
pub struct UniformRegistry {
    slots: [Option<LayerUniforms>; LAYER_COUNT],
}

impl UniformRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, index: usize, uniforms: LayerUniforms) -> Result<(), SceneError> {
        let slot = self.slots.get_mut(index).ok_or(SceneError::LayerOutOfRange {
            index,
            count: LAYER_COUNT,
        })?;
        if slot.is_some() {
            return Err(SceneError::DuplicateLayer(index));
        }
        *slot = Some(uniforms);
        Ok(())
    }

    pub fn finish(self) -> Result<[LayerUniforms; LAYER_COUNT], SceneError> {
        let mut out = [LayerUniforms::from_spec(&LAYERS[0]); LAYER_COUNT];
        for (i, slot) in self.slots.into_iter().enumerate() {
            out[i] = slot.ok_or(SceneError::MissingLayer(i))?;
        }
        Ok(out)
    }
}

/// Scale that makes an image of aspect `w:h` cover the viewport, times `factor`.
pub fn aspect_cover_scale(w: f32, h: f32, factor: f32, viewport: Viewport) -> Vec3 {
    let adapted = if viewport.aspect() > w / h {
        viewport.width / w
    } else {
        viewport.height / h
    };
    Vec3::new(w * adapted * factor, h * adapted * factor, 1.0)
}

/// A mounted layer: its static spec plus the state that changes at runtime.
#[derive(Clone, Copy, Debug)]
pub struct Layer {
    pub spec: LayerSpec,
    pub scale: Vec3,
    pub uniforms: LayerUniforms,
}

impl Layer {
    pub fn fit(&mut self, viewport: Viewport) {
        let (w, h) = self.spec.aspect;
        self.scale = aspect_cover_scale(w, h, COVER_FACTOR, viewport);
    }
}

/// Vertex of the unit plane: xy in [-0.5, 0.5], uv with v = 1 on the top edge.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlaneVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Unit plane split into `segments x segments` quads (two triangles each).
pub fn plane_geometry(segments: u32) -> (Vec<PlaneVertex>, Vec<u16>) {
    let s = segments.max(1);
    let mut vertices = Vec::with_capacity(((s + 1) * (s + 1)) as usize);
    for iy in 0..=s {
        let fy = iy as f32 / s as f32;
        for ix in 0..=s {
            let fx = ix as f32 / s as f32;
            vertices.push(PlaneVertex {
                position: [fx - 0.5, 0.5 - fy, 0.0],
                uv: [fx, 1.0 - fy],
            });
        }
    }
    let row = (s + 1) as u16;
    let mut indices = Vec::with_capacity((s * s * 6) as usize);
    for iy in 0..s as u16 {
        for ix in 0..s as u16 {
            let a = iy * row + ix;
            let b = a + row;
            let c = b + 1;
            let d = a + 1;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    (vertices, indices)
}
