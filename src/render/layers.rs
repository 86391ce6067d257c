use super::helpers;
use super::textures::TextureCache;
use crate::constants::{DEPTH_FORMAT, SCENE_FORMAT};
use crate::core::{plane_geometry, Experience, PlaneVertex, LAYER_COUNT};
use glam::Mat4;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct CameraUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct LayerGpuUniforms {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) movement: [f32; 4],
    pub(crate) factor: f32,
    pub(crate) scale: f32,
    pub(crate) wiggle: f32,
    pub(crate) time: f32,
}

const VERTEX_ATTRIBS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<PlaneVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRIBS,
    }
}

pub(crate) struct LayerMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

pub(crate) struct LayerResources {
    pipeline: wgpu::RenderPipeline,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    meshes: Vec<LayerMesh>,
}

pub(crate) fn create_layer_resources(
    device: &wgpu::Device,
    experience: &Experience,
    textures: &TextureCache,
) -> anyhow::Result<LayerResources> {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("layer_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::LAYER_WGSL.into()),
    });
    let camera_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("camera_bgl"),
        entries: &[helpers::uniform_layout_entry(0, wgpu::ShaderStages::VERTEX)],
    });
    let layer_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("layer_bgl"),
        entries: &[
            helpers::uniform_layout_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT),
            helpers::texture_layout_entry(1),
            helpers::sampler_layout_entry(2),
        ],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("layer_pl"),
        bind_group_layouts: &[&camera_bgl, &layer_bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("layer_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_layer"),
            buffers: &[vertex_layout()],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_layer"),
            targets: &[Some(wgpu::ColorTargetState {
                format: SCENE_FORMAT,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("camera_uniforms"),
        size: std::mem::size_of::<CameraUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("camera_bg"),
        layout: &camera_bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: camera_buffer.as_entire_binding(),
        }],
    });

    let sampler = helpers::create_linear_sampler(device, "layer_sampler");
    let mut meshes = Vec::with_capacity(LAYER_COUNT);
    for (i, layer) in experience.layers.iter().enumerate() {
        let view = textures
            .get(layer.spec.texture)
            .ok_or_else(|| anyhow::anyhow!("texture {} not loaded", layer.spec.texture))?;
        let (vertices, indices) = plane_geometry(layer.spec.segments());
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("layer_vertices"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("layer_indices"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("layer_uniforms"),
            contents: bytemuck::bytes_of(&pack_layer(experience, i)),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("layer_bg"),
            layout: &layer_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });
        meshes.push(LayerMesh {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
            uniform_buffer,
            bind_group,
        });
    }

    Ok(LayerResources {
        pipeline,
        camera_buffer,
        camera_bind_group,
        meshes,
    })
}

fn pack_layer(experience: &Experience, i: usize) -> LayerGpuUniforms {
    let u = &experience.layers[i].uniforms;
    LayerGpuUniforms {
        model: experience.layer_model(i).to_cols_array_2d(),
        movement: u.movement.extend(0.0).to_array(),
        factor: u.factor,
        scale: u.scale,
        wiggle: u.wiggle,
        time: u.time,
    }
}

impl LayerResources {
    pub(crate) fn write(&self, queue: &wgpu::Queue, experience: &Experience, view_proj: Mat4) {
        let cam = CameraUniforms {
            view_proj: view_proj.to_cols_array_2d(),
        };
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&cam));
        for (i, mesh) in self.meshes.iter().enumerate() {
            queue.write_buffer(
                &mesh.uniform_buffer,
                0,
                bytemuck::bytes_of(&pack_layer(experience, i)),
            );
        }
    }

    /// Back to front; depth testing resolves the overlap.
    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.camera_bind_group, &[]);
        for mesh in &self.meshes {
            rpass.set_bind_group(1, &mesh.bind_group, &[]);
            rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
        }
    }
}
