use crate::constants::{CLEAR_COLOR, SCENE_FORMAT};
use crate::core::{EffectChain, Experience, OrthoCamera};
use web_sys as web;

mod fireflies;
mod helpers;
mod layers;
mod post;
mod targets;
pub mod textures;

use fireflies::{create_firefly_resources, FireflyResources};
use layers::{create_layer_resources, LayerResources};
use post::{PostBindGroups, PostResources};
use targets::RenderTargets;
use textures::{DecodedImage, TextureCache};

// ===================== WebGPU state =====================

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    layers: LayerResources,
    fireflies: FireflyResources,
    targets: RenderTargets,
    post: PostResources,
    post_groups: PostBindGroups,
    chain: EffectChain,
    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(
        canvas: web::HtmlCanvasElement,
        experience: &Experience,
        images: &[(String, DecodedImage)],
        chain: EffectChain,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // Premultiplied output lets the page background show through
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[gpu] surface {}x{} format={:?} alpha={:?}",
            width,
            height,
            format,
            alpha_mode
        );

        let mut cache = TextureCache::default();
        for (path, image) in images {
            cache.upload(&device, &queue, path, image);
        }
        let layers = create_layer_resources(&device, experience, &cache)?;
        let fireflies = create_firefly_resources(&device, experience.fireflies.len());

        let targets = RenderTargets::new(&device, width, height);
        let post = post::create_post_resources(&device, SCENE_FORMAT, format);
        let post_groups = post.bind_groups(&device, &targets);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            layers,
            fireflies,
            targets,
            post,
            post_groups,
            chain,
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);

            // Recreate offscreen render targets and the bind groups that reference them
            self.targets.recreate(&self.device, width, height);
            self.post_groups = self.post.bind_groups(&self.device, &self.targets);
        }
    }

    /// Reconfigure after the surface was lost or went out of date.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(
        &mut self,
        experience: &Experience,
        camera: &OrthoCamera,
    ) -> Result<(), wgpu::SurfaceError> {
        let view_proj = camera.view_proj();
        self.layers.write(&self.queue, experience, view_proj);
        self.fireflies.write(&self.queue, experience, view_proj);
        self.post
            .write_uniforms(&self.queue, &self.chain, camera, self.width, self.height);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        // Pass 1: layer stack + fireflies -> scene target
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.scene_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.layers.draw(&mut rpass);
            self.fireflies.draw(&mut rpass);
        }

        if self.chain.depth_of_field().is_some() {
            // Pass 2: blur horizontal scene -> blur_a
            post::blit(
                &mut encoder,
                "dof_blur_h",
                &self.targets.blur_a_view,
                wgpu::Color::TRANSPARENT,
                &self.post.blur_pipeline,
                &self.post_groups.from_scene,
                None,
            );
            // Pass 3: blur vertical blur_a -> blur_b
            post::blit(
                &mut encoder,
                "dof_blur_v",
                &self.targets.blur_b_view,
                wgpu::Color::TRANSPARENT,
                &self.post.blur_pipeline,
                &self.post_groups.from_blur_a,
                None,
            );
        }

        // Pass 4: masked depth-of-field composite + vignette to swapchain
        post::blit(
            &mut encoder,
            "composite",
            &view,
            CLEAR_COLOR,
            &self.post.composite_pipeline,
            &self.post_groups.from_scene,
            Some(&self.post_groups.blur_b_only),
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
