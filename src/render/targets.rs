use super::helpers;
use crate::constants::{DEPTH_FORMAT, SCENE_FORMAT};
use wgpu;

/// Offscreen targets for the scene and the depth-of-field passes.
///
/// - `scene_*` holds the layer stack and fireflies in Rgba16Float.
/// - `depth_*` is sampled by the post passes to derive the circle of confusion.
/// - `blur_*` are the ping-pong buffers of the separable blur.
pub(crate) struct RenderTargets {
    pub(crate) scene_tex: wgpu::Texture,
    pub(crate) scene_view: wgpu::TextureView,
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
    pub(crate) blur_a: wgpu::Texture,
    pub(crate) blur_a_view: wgpu::TextureView,
    pub(crate) blur_b: wgpu::Texture,
    pub(crate) blur_b_view: wgpu::TextureView,
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let usage = wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING;
        let (scene_tex, scene_view) =
            helpers::create_target_texture(device, "scene_tex", width, height, SCENE_FORMAT, usage);
        let (depth_tex, depth_view) =
            helpers::create_target_texture(device, "depth_tex", width, height, DEPTH_FORMAT, usage);
        let (blur_a, blur_a_view) =
            helpers::create_target_texture(device, "blur_a", width, height, SCENE_FORMAT, usage);
        let (blur_b, blur_b_view) =
            helpers::create_target_texture(device, "blur_b", width, height, SCENE_FORMAT, usage);
        Self {
            scene_tex,
            scene_view,
            depth_tex,
            depth_view,
            blur_a,
            blur_a_view,
            blur_b,
            blur_b_view,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, width, height);
    }
}
