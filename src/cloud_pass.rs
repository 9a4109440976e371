//! The cloud rendering pass.
//!
//! [`CloudPass`] owns everything needed to draw the animated cloud quad: the
//! render pipeline, the static full-screen vertex buffer, the one-float
//! uniform buffer, and its bind group. The WGSL source is a compiled-in text
//! constant; the shading-language compiler inside wgpu is treated as an
//! external collaborator, and its diagnostics are captured through validation
//! error scopes.
//!
//! Shader compilation and pipeline creation failures are fatal: both return a
//! [`RenderError`] carrying the full diagnostic instead of leaving the program
//! running with an unusable pipeline.

use wgpu::util::DeviceExt;

use crate::error::RenderError;
use crate::gpu::GpuContext;
use crate::quad::{FULLSCREEN_QUAD, QuadVertex};

/// The embedded WGSL source for the cloud shader.
pub const SHADER_SOURCE: &str = include_str!("shaders/clouds.wgsl");

/// Uniforms for the cloud shader, bound at `@group(0) @binding(0)`.
///
/// Padded to 16 bytes to satisfy uniform buffer alignment.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct CloudUniforms {
    cloud_shift: f32,
    _padding: [f32; 3],
}

/// Pipeline and GPU resources for drawing the full-screen cloud quad.
pub struct CloudPass {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl CloudPass {
    /// Compile the shader, upload the quad, and build the render pipeline.
    ///
    /// The shader module only lives long enough to create the pipeline, the
    /// same way compiled stages are freed once a program is linked. Validation
    /// failures at either step are returned with their diagnostic log.
    pub fn new(gpu: &GpuContext) -> Result<Self, RenderError> {
        let device = &gpu.device;

        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Cloud Shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
        });
        if let Some(err) = pollster::block_on(device.pop_error_scope()) {
            return Err(RenderError::ShaderCompile(err.to_string()));
        }

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Cloud Quad"),
            contents: bytemuck::cast_slice(&FULLSCREEN_QUAD),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Cloud Uniforms"),
            size: std::mem::size_of::<CloudUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Cloud Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Cloud Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Cloud Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Cloud Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs"),
                buffers: &[QuadVertex::LAYOUT],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: gpu.config.format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });
        if let Some(err) = pollster::block_on(device.pop_error_scope()) {
            return Err(RenderError::PipelineCreation(err.to_string()));
        }

        Ok(Self {
            pipeline,
            vertex_buffer,
            uniform_buffer,
            bind_group,
        })
    }

    /// Upload the animation scalar and draw the quad into the given pass.
    pub fn render(&self, gpu: &GpuContext, render_pass: &mut wgpu::RenderPass, cloud_shift: f32) {
        let uniforms = CloudUniforms {
            cloud_shift,
            _padding: [0.0; 3],
        };
        gpu.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniforms]));

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.draw(0..FULLSCREEN_QUAD.len() as u32, 0..1);
    }
}
