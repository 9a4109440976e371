//! The full-screen quad geometry.
//!
//! One static buffer of six vertices, two triangles, covering the whole
//! clip-space square with texture coordinates spanning `[0,1]` on each axis.
//! Uploaded once at startup and never touched again.

use bytemuck::{Pod, Zeroable};

/// Vertex format for the full-screen quad: clip-space position plus UV.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    /// Position in clip space, z = 0.
    pub position: [f32; 2],
    /// Texture coordinate in `[0,1]²`.
    pub tex_coord: [f32; 2],
}

// (-1,1)     (1,1)
//    +---------+
//    |       / |
//    |     /   |
//    |   /     |
//    | /       |
//    +---------+
// (-1,-1)     (1,-1)

/// Two counter-clockwise triangles covering the clip-space square.
pub const FULLSCREEN_QUAD: [QuadVertex; 6] = [
    QuadVertex { position: [-1.0, 1.0], tex_coord: [0.0, 1.0] },
    QuadVertex { position: [-1.0, -1.0], tex_coord: [0.0, 0.0] },
    QuadVertex { position: [1.0, -1.0], tex_coord: [1.0, 0.0] },
    QuadVertex { position: [-1.0, 1.0], tex_coord: [0.0, 1.0] },
    QuadVertex { position: [1.0, -1.0], tex_coord: [1.0, 0.0] },
    QuadVertex { position: [1.0, 1.0], tex_coord: [1.0, 1.0] },
];

impl QuadVertex {
    /// Vertex buffer layout matching the shader's `@location(0)` position and
    /// `@location(1)` texture coordinate inputs.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<QuadVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x2,
            },
            // texture coordinate
            wgpu::VertexAttribute {
                offset: 8,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x2,
            },
        ],
    };
}
