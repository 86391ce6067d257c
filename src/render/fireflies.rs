use super::helpers;
use crate::constants::{DEPTH_FORMAT, FIREFLY_WORLD_SIZE, SCENE_FORMAT};
use crate::core::{Experience, FireflyInstance};
use glam::Mat4;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct FirefliesUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) params: [f32; 4],
}

const INSTANCE_ATTRIBS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x4];

pub(crate) struct FireflyResources {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    instance_buffer: wgpu::Buffer,
    instance_count: u32,
    scratch: Vec<FireflyInstance>,
}

pub(crate) fn create_firefly_resources(device: &wgpu::Device, count: usize) -> FireflyResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("fireflies_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::FIREFLIES_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("fireflies_bgl"),
        entries: &[helpers::uniform_layout_entry(0, wgpu::ShaderStages::VERTEX)],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("fireflies_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let additive = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    };
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("fireflies_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_firefly"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<FireflyInstance>() as wgpu::BufferAddress,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &INSTANCE_ATTRIBS,
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: false,
            depth_compare: wgpu::CompareFunction::LessEqual,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_firefly"),
            targets: &[Some(wgpu::ColorTargetState {
                format: SCENE_FORMAT,
                blend: Some(wgpu::BlendState {
                    color: additive,
                    alpha: additive,
                }),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("fireflies_uniforms"),
        size: std::mem::size_of::<FirefliesUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("fireflies_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });
    let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("fireflies_instances"),
        size: (std::mem::size_of::<FireflyInstance>() * count.max(1)) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    FireflyResources {
        pipeline,
        uniform_buffer,
        bind_group,
        instance_buffer,
        instance_count: count as u32,
        scratch: Vec::with_capacity(count),
    }
}

impl FireflyResources {
    pub(crate) fn write(&mut self, queue: &wgpu::Queue, experience: &Experience, view_proj: Mat4) {
        let u = FirefliesUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            model: experience.group.matrix().to_cols_array_2d(),
            params: [FIREFLY_WORLD_SIZE, 0.0, 0.0, 0.0],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
        experience
            .fireflies
            .write_instances(experience.firefly_time, &mut self.scratch);
        self.instance_count = self.scratch.len() as u32;
        if !self.scratch.is_empty() {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&self.scratch));
        }
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.instance_count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.instance_buffer.slice(..));
        rpass.draw(0..6, 0..self.instance_count);
    }
}
