//! Binary export of flat models.
//!
//! The layout is fixed and deliberately free of a header, magic or version
//! field; a renderer maps the sections straight into its own buffers. All
//! integers are little-endian `u32`, all floats little-endian IEEE-754
//! binary32, written field-by-field with no padding:
//!
//! ```text
//! [4 bytes: mesh count]
//! per mesh (28 bytes):
//!   [12 bytes: diffuse r, g, b]
//!   [4 bytes: vertex base]  [4 bytes: vertex count]
//!   [4 bytes: index base]   [4 bytes: index count]
//! [4 bytes: vertex count]
//! per vertex (24 bytes):
//!   [12 bytes: position x, y, z]
//!   [12 bytes: normal x, y, z]
//! [4 bytes: index count]
//! per index (4 bytes):
//!   [4 bytes: index into the vertex pool]
//! ```
//!
//! Every count is written even when zero, so a reader can skip a section
//! without inspecting its contents.

use std::io::Write;

use crate::data_structures::model::{FlatModel, Mesh, Vertex};

/// Size of one serialized mesh record in bytes.
pub const MESH_RECORD_BYTES: usize = 28;
/// Size of one serialized vertex record in bytes.
pub const VERTEX_RECORD_BYTES: usize = 24;

/// Writes the three flat buffers to `out` in the documented layout.
///
/// Only advances the sink's write position; flushing and closing stay with
/// the caller, who owns the resource.
pub fn write_flat_model(out: &mut impl Write, model: &FlatModel) -> std::io::Result<()> {
    write_u32(out, model.meshes.len() as u32)?;
    for mesh in &model.meshes {
        write_mesh(out, mesh)?;
    }

    write_u32(out, model.vertices.len() as u32)?;
    for vertex in &model.vertices {
        write_vertex(out, vertex)?;
    }

    write_u32(out, model.indices.len() as u32)?;
    for &index in &model.indices {
        write_u32(out, index)?;
    }

    Ok(())
}

fn write_mesh(out: &mut impl Write, mesh: &Mesh) -> std::io::Result<()> {
    write_f32(out, mesh.color.x)?;
    write_f32(out, mesh.color.y)?;
    write_f32(out, mesh.color.z)?;
    write_u32(out, mesh.vertex_base)?;
    write_u32(out, mesh.vertex_count)?;
    write_u32(out, mesh.index_base)?;
    write_u32(out, mesh.index_count)
}

fn write_vertex(out: &mut impl Write, vertex: &Vertex) -> std::io::Result<()> {
    for component in vertex.position {
        write_f32(out, component)?;
    }
    for component in vertex.normal {
        write_f32(out, component)?;
    }
    Ok(())
}

fn write_u32(out: &mut impl Write, value: u32) -> std::io::Result<()> {
    out.write_all(&value.to_le_bytes())
}

fn write_f32(out: &mut impl Write, value: f32) -> std::io::Result<()> {
    out.write_all(&value.to_le_bytes())
}
