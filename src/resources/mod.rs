/**
 * This module contains all logic for importing model files from disk into a
 * `Scene`. Parsing itself is delegated to the import crates; the importers
 * here only reshape their output into the crate's own scene types.
 */
use std::path::Path;

use anyhow::bail;

use crate::data_structures::scene::Scene;

pub mod gltf;
pub mod obj;

/// Post-processing requested from the import layer.
///
/// These mirror the flag set of the upstream import services this tool has
/// been fed by: triangulate every face, merge identical vertices into a
/// single indexed entry, and keep primitives grouped by kind. Not every
/// backend can honour every flag; see the importer docs for the mapping.
#[derive(Clone, Copy, Debug)]
pub struct ImportOptions {
    pub triangulate: bool,
    pub merge_vertices: bool,
    pub sort_by_primitive: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            triangulate: true,
            merge_vertices: true,
            sort_by_primitive: true,
        }
    }
}

/// Imports a model file, dispatching on its extension.
///
/// Supported: Wavefront OBJ (`.obj`) and glTF (`.gltf`, `.glb`). Any error
/// from the underlying import crate is propagated with the offending path
/// attached.
pub fn import_scene(path: &Path, options: &ImportOptions) -> anyhow::Result<Scene> {
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.to_ascii_lowercase());

    match extension.as_deref() {
        Some("obj") => obj::import_obj(path, options),
        Some("gltf") | Some("glb") => gltf::import_gltf(path, options),
        _ => bail!("unsupported model format: {}", path.display()),
    }
}
