use super::helpers;
use super::targets::RenderTargets;
use crate::core::{EffectChain, OrthoCamera};
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    resolution: [f32; 2],
    near: f32,
    far: f32,
    focus_distance: f32,
    focus_range: f32,
    blur_px: f32,
    mask_fn: u32,
    vignette: [f32; 4],
    blur_dir: [f32; 2],
    dof_enabled: f32,
    _pad: f32,
}

impl PostUniforms {
    pub(crate) fn from_chain(
        chain: &EffectChain,
        camera: &OrthoCamera,
        width: u32,
        height: u32,
        blur_dir: [f32; 2],
    ) -> Self {
        let mut u = PostUniforms {
            resolution: [width as f32, height as f32],
            near: camera.znear,
            far: camera.zfar,
            focus_distance: 0.0,
            focus_range: 1.0,
            blur_px: 0.0,
            mask_fn: 0,
            vignette: [0.0; 4],
            blur_dir,
            dof_enabled: 0.0,
            _pad: 0.0,
        };
        if let Some(dof) = chain.depth_of_field() {
            u.focus_distance = camera.view_distance(dof.target);
            u.focus_range = dof.focus_range();
            u.blur_px = dof.blur_radius_px(1.0, width);
            u.mask_fn = dof.mask.shader_code();
            u.dof_enabled = 1.0;
        }
        if let Some(v) = chain.vignette() {
            u.vignette = [v.offset, v.darkness, v.softness, 1.0];
        }
        u
    }
}

pub(crate) struct PostBindGroups {
    /// Scene color as source, horizontal blur uniforms.
    pub(crate) from_scene: wgpu::BindGroup,
    /// First blur target as source, vertical blur uniforms.
    pub(crate) from_blur_a: wgpu::BindGroup,
    /// Final blur target for the composite's second group.
    pub(crate) blur_b_only: wgpu::BindGroup,
}

pub(crate) struct PostResources {
    pub(crate) bgl0: wgpu::BindGroupLayout, // tex+sampler+uniform+depth
    pub(crate) bgl1: wgpu::BindGroupLayout, // tex+sampler
    pub(crate) uniform_h: wgpu::Buffer,
    pub(crate) uniform_v: wgpu::Buffer,
    pub(crate) sampler: wgpu::Sampler,
    pub(crate) blur_pipeline: wgpu::RenderPipeline,
    pub(crate) composite_pipeline: wgpu::RenderPipeline,
}

pub(crate) fn create_post_resources(
    device: &wgpu::Device,
    blur_format: wgpu::TextureFormat,
    swap_format: wgpu::TextureFormat,
) -> PostResources {
    let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("post_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::POST_WGSL.into()),
    });
    let bgl0 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl0"),
        entries: &[
            helpers::texture_layout_entry(0),
            helpers::sampler_layout_entry(1),
            helpers::uniform_layout_entry(2, wgpu::ShaderStages::FRAGMENT),
            wgpu::BindGroupLayoutEntry {
                binding: 3,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Depth,
                },
                count: None,
            },
        ],
    });
    let bgl1 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl1"),
        entries: &[
            helpers::texture_layout_entry(0),
            helpers::sampler_layout_entry(1),
        ],
    });
    let new_uniforms = |label| {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<PostUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    };
    let uniform_h = new_uniforms("post_uniforms_h");
    let uniform_v = new_uniforms("post_uniforms_v");
    let pl_blur = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_blur"),
        bind_group_layouts: &[&bgl0],
        push_constant_ranges: &[],
    });
    let pl_composite = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_comp"),
        bind_group_layouts: &[&bgl0, &bgl1],
        push_constant_ranges: &[],
    });
    let blur_pipeline =
        helpers::make_post_pipeline(device, &pl_blur, &post_shader, "fs_blur", blur_format, None);
    let composite_pipeline = helpers::make_post_pipeline(
        device,
        &pl_composite,
        &post_shader,
        "fs_composite",
        swap_format,
        Some(wgpu::BlendState::REPLACE),
    );

    PostResources {
        bgl0,
        bgl1,
        uniform_h,
        uniform_v,
        sampler: helpers::create_linear_sampler(device, "post_sampler"),
        blur_pipeline,
        composite_pipeline,
    }
}

impl PostResources {
    pub(crate) fn write_uniforms(
        &self,
        queue: &wgpu::Queue,
        chain: &EffectChain,
        camera: &OrthoCamera,
        width: u32,
        height: u32,
    ) {
        let h = PostUniforms::from_chain(chain, camera, width, height, [1.0, 0.0]);
        let v = PostUniforms::from_chain(chain, camera, width, height, [0.0, 1.0]);
        queue.write_buffer(&self.uniform_h, 0, bytemuck::bytes_of(&h));
        queue.write_buffer(&self.uniform_v, 0, bytemuck::bytes_of(&v));
    }

    /// Bind groups referencing the current targets; rebuilt after every resize.
    pub(crate) fn bind_groups(&self, device: &wgpu::Device, targets: &RenderTargets) -> PostBindGroups {
        let group0 = |label, view: &wgpu::TextureView, uniforms: &wgpu::Buffer| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: &self.bgl0,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(&self.sampler),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: uniforms.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 3,
                        resource: wgpu::BindingResource::TextureView(&targets.depth_view),
                    },
                ],
            })
        };
        let from_scene = group0("bg_from_scene", &targets.scene_view, &self.uniform_h);
        let from_blur_a = group0("bg_from_blur_a", &targets.blur_a_view, &self.uniform_v);
        let blur_b_only = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg_blur_b_only"),
            layout: &self.bgl1,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&targets.blur_b_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        });
        PostBindGroups {
            from_scene,
            from_blur_a,
            blur_b_only,
        }
    }
}

pub(crate) fn blit(
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    target: &wgpu::TextureView,
    clear: wgpu::Color,
    pipeline: &wgpu::RenderPipeline,
    bg0: &wgpu::BindGroup,
    bg1: Option<&wgpu::BindGroup>,
) {
    let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(clear),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    r.set_pipeline(pipeline);
    r.set_bind_group(0, bg0, &[]);
    if let Some(g1) = bg1 {
        r.set_bind_group(1, g1, &[]);
    }
    r.draw(0..3, 0..1);
    drop(r);
}
