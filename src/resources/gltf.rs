//! glTF import backed by the `gltf` crate.

use std::path::Path;

use anyhow::Context;
use cgmath::Vector3;
use gltf::mesh::Mode;

use crate::data_structures::scene::{Face, Scene, SceneMaterial, SceneMesh};
use crate::resources::ImportOptions;

/// Imports a `.gltf`/`.glb` file into a scene.
///
/// Each glTF primitive becomes one submesh; meshes appear in document order.
/// glTF data is already indexed and triangulated per primitive mode, so
/// `triangulate`/`merge_vertices` have nothing left to do. The
/// `sort_by_primitive` intent is realized by the mode filter: primitives
/// that are not plain triangle lists contribute their vertices but no faces.
pub fn import_gltf(path: &Path, _options: &ImportOptions) -> anyhow::Result<Scene> {
    let gltf = gltf::Gltf::open(path)
        .with_context(|| format!("failed to load model {}", path.display()))?;

    // Load buffers: either the GLB-embedded blob or sibling files next to
    // the document.
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    let mut buffer_data = Vec::new();
    for buffer in gltf.buffers() {
        match buffer.source() {
            gltf::buffer::Source::Bin => {
                if let Some(blob) = gltf.blob.as_deref() {
                    buffer_data.push(blob.to_vec());
                }
            }
            gltf::buffer::Source::Uri(uri) => {
                let bin = std::fs::read(base.join(uri))
                    .with_context(|| format!("failed to read glTF buffer {uri}"))?;
                buffer_data.push(bin);
            }
        }
    }

    let materials = gltf
        .materials()
        .map(|material| {
            let base_color = material.pbr_metallic_roughness().base_color_factor();
            SceneMaterial {
                diffuse: Some([base_color[0], base_color[1], base_color[2]]),
            }
        })
        .collect();

    let mut meshes = Vec::new();
    for mesh in gltf.meshes() {
        for primitive in mesh.primitives() {
            let reader = primitive
                .reader(|buffer| buffer_data.get(buffer.index()).map(|data| data.as_slice()));

            let positions: Vec<Vector3<f32>> = reader
                .read_positions()
                .map(|positions| positions.map(Into::into).collect())
                .unwrap_or_default();
            let normals = reader
                .read_normals()
                .map(|normals| normals.map(Into::into).collect());
            let tex_coords = reader
                .read_tex_coords(0)
                .map(|tex_coords| tex_coords.into_f32().collect());

            let faces = match primitive.mode() {
                Mode::Triangles => {
                    let indices: Vec<u32> = match reader.read_indices() {
                        Some(indices) => indices.into_u32().collect(),
                        // Non-indexed primitives reference their vertices in order.
                        None => (0..positions.len() as u32).collect(),
                    };
                    indices
                        .chunks_exact(3)
                        .map(|face| Face(face.to_vec()))
                        .collect()
                }
                mode => {
                    log::warn!(
                        "Skipping {mode:?} primitive in {}: only triangle lists are packed.",
                        path.display()
                    );
                    Vec::new()
                }
            };

            meshes.push(SceneMesh {
                positions,
                normals,
                tex_coords,
                faces,
                material_id: primitive.material().index(),
            });
        }
    }

    Ok(Scene { meshes, materials })
}
