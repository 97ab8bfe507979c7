//! Mesh output types.
//!
//! Responsibilities:
//! - hold tessellated vertex/index buffers in a host-uploadable layout
//! - keep allocations steady across rebuilds
//! - keep bar-specific tessellation isolated in `mesh::bar`

pub mod bar;

use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;
use crate::paint::Color;

/// A single colored vertex.
///
/// Layout matches a host vertex buffer directly: 2D position in logical
/// pixels, straight-alpha RGBA color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    #[inline]
    pub fn new(position: Vec2, color: Color) -> Self {
        Self {
            position: [position.x, position.y],
            color: color.to_array(),
        }
    }
}

/// Tessellated triangle mesh.
///
/// Fully regenerated on every rebuild, never patched; ownership of the
/// contents passes to the host right after generation. `clear` keeps the
/// allocated capacity so steady-state rebuilds do not allocate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Raw vertex bytes for upload.
    #[inline]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index bytes for upload.
    #[inline]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
