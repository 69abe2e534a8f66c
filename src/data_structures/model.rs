//! Flat output buffers and their on-disk record types.

use cgmath::Vector3;

/// Per-mesh record of the packed output.
///
/// `vertex_base`/`index_base` point into the global pools of [`FlatModel`].
/// The ranges of consecutive meshes tile the pools in scene order with no
/// gaps or overlaps, so `vertex_base + vertex_count` of one mesh is the
/// `vertex_base` of the next.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mesh {
    /// Diffuse RGB of the owning material, black when unresolved.
    pub color: Vector3<f32>,
    pub vertex_base: u32,
    pub vertex_count: u32,
    pub index_base: u32,
    /// Always a multiple of 3; non-triangle faces never contribute.
    pub index_count: u32,
}

/// On-disk vertex record.
///
/// `normal` is reserved: it is written zero-filled so the record size stays
/// stable for readers, and carries no semantic meaning yet.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// The three flat buffers produced by one packing run.
///
/// Indices reference the global vertex pool, already offset by the owning
/// mesh's `vertex_base`. The buffers are built in a single forward pass and
/// never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlatModel {
    pub meshes: Vec<Mesh>,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}
