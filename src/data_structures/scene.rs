//! Imported-scene types.
//!
//! These structs form the boundary between the import crates and the
//! flattener. The importers guarantee nothing beyond this shape; faces may
//! still have arbitrary arity and material ids may dangle. Everything
//! downstream has to tolerate both.

use cgmath::Vector3;

/// A scene as produced by the import layer: submeshes plus the material
/// table they reference.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub meshes: Vec<SceneMesh>,
    pub materials: Vec<SceneMaterial>,
}

/// One submesh: a contiguous group of geometry sharing a single material.
#[derive(Clone, Debug, Default)]
pub struct SceneMesh {
    pub positions: Vec<Vector3<f32>>,
    /// Per-vertex normals, when the source file carries them.
    pub normals: Option<Vec<Vector3<f32>>>,
    /// First UV channel, when the source file carries one.
    pub tex_coords: Option<Vec<[f32; 2]>>,
    /// Faces with vertex references local to this submesh.
    pub faces: Vec<Face>,
    /// Index into [`Scene::materials`]. `None` when the source assigned no
    /// material to this submesh.
    pub material_id: Option<usize>,
}

impl SceneMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

/// A single face as an ordered list of local vertex references.
///
/// No arity is enforced here. Importers that triangulate produce
/// three-reference faces only; without triangulation the original polygon
/// arity survives and the flattener decides what to keep.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Face(pub Vec<u32>);

/// The only material property the packer retains: the diffuse base colour.
///
/// `None` mirrors a source material without a diffuse key; the flattener
/// substitutes black for it rather than failing the run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneMaterial {
    pub diffuse: Option<[f32; 3]>,
}
