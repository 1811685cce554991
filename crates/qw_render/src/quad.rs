//! Quad geometry for the two demo meshes.
//!
//! Both quads occupy the same clip-space rectangle (±0.5, no camera involved).
//! They differ only in texture coordinates: the small quad samples [0,1]x[0,1],
//! the tiled quad samples [0,4]x[0,2] so wrap modes have something to wrap.

use qw_core::QuadVariant;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2],
    pub tex_coords: [f32; 2],
}

impl QuadVertex {
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // position
                wgpu::VertexAttribute {
                    offset: std::mem::offset_of!(QuadVertex, position) as wgpu::BufferAddress,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                // tex_coords
                wgpu::VertexAttribute {
                    offset: std::mem::offset_of!(QuadVertex, tex_coords) as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Vertices in bottom-left, bottom-right, top-right, top-left order.
pub fn quad_vertices(variant: QuadVariant) -> [QuadVertex; 4] {
    // v grows downward in texture space, so the bottom edge samples the max v.
    let (u_max, v_max) = match variant {
        QuadVariant::Small => (1.0, 1.0),
        QuadVariant::Tiled => (4.0, 2.0),
    };
    [
        QuadVertex {
            position: [-0.5, -0.5],
            tex_coords: [0.0, v_max],
        },
        QuadVertex {
            position: [0.5, -0.5],
            tex_coords: [u_max, v_max],
        },
        QuadVertex {
            position: [0.5, 0.5],
            tex_coords: [u_max, 0.0],
        },
        QuadVertex {
            position: [-0.5, 0.5],
            tex_coords: [0.0, 0.0],
        },
    ]
}

pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

pub struct QuadMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl QuadMesh {
    pub fn new(device: &wgpu::Device, variant: QuadVariant) -> Self {
        let label = match variant {
            QuadVariant::Small => "Small Quad",
            QuadVariant::Tiled => "Tiled Quad",
        };
        let vertices = quad_vertices(variant);
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: QUAD_INDICES.len() as u32,
        }
    }

    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uv_extent(vertices: &[QuadVertex; 4]) -> (f32, f32) {
        let u = vertices
            .iter()
            .map(|v| v.tex_coords[0])
            .fold(0.0f32, f32::max);
        let v = vertices
            .iter()
            .map(|v| v.tex_coords[1])
            .fold(0.0f32, f32::max);
        (u, v)
    }

    #[test]
    fn small_quad_spans_unit_uv() {
        assert_eq!(uv_extent(&quad_vertices(QuadVariant::Small)), (1.0, 1.0));
    }

    #[test]
    fn tiled_quad_spans_4_by_2_uv() {
        assert_eq!(uv_extent(&quad_vertices(QuadVariant::Tiled)), (4.0, 2.0));
    }

    #[test]
    fn both_quads_share_clip_space_footprint() {
        let small = quad_vertices(QuadVariant::Small);
        let tiled = quad_vertices(QuadVariant::Tiled);
        for (a, b) in small.iter().zip(tiled.iter()) {
            assert_eq!(a.position, b.position);
        }
        for v in &small {
            assert!(v.position[0].abs() <= 0.5 + f32::EPSILON);
            assert!(v.position[1].abs() <= 0.5 + f32::EPSILON);
        }
    }

    #[test]
    fn indices_form_two_ccw_triangles_over_four_vertices() {
        assert_eq!(QUAD_INDICES.len(), 6);
        assert!(QUAD_INDICES.iter().all(|&i| (i as usize) < 4));
        // Both triangles share the bottom-left/top-right diagonal.
        assert_eq!(&QUAD_INDICES[..3], &[0, 1, 2]);
        assert_eq!(&QUAD_INDICES[3..], &[0, 2, 3]);
    }

    #[test]
    fn vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<QuadVertex>(), 16);
        let layout = QuadVertex::layout();
        assert_eq!(layout.array_stride, 16);
        assert_eq!(layout.attributes.len(), 2);
        assert_eq!(layout.attributes[1].offset, 8);
    }
}
