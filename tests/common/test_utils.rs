use cgmath::Vector3;
use meshpack::data_structures::scene::{Face, Scene, SceneMaterial, SceneMesh};

/// Builds a submesh from raw positions and face reference lists.
pub fn submesh(positions: &[[f32; 3]], faces: &[&[u32]], material_id: Option<usize>) -> SceneMesh {
    SceneMesh {
        positions: positions
            .iter()
            .map(|&[x, y, z]| Vector3::new(x, y, z))
            .collect(),
        normals: None,
        tex_coords: None,
        faces: faces.iter().map(|face| Face(face.to_vec())).collect(),
        material_id,
    }
}

/// The reference scene used across the tests: submesh A with 4 vertices, two
/// triangles and a red diffuse; submesh B with 3 vertices, one triangle, one
/// quad and a material without a diffuse key.
pub fn two_submesh_scene() -> Scene {
    Scene {
        meshes: vec![
            submesh(
                &[
                    [0.0, 0.0, 0.0],
                    [1.0, 0.0, 0.0],
                    [1.0, 1.0, 0.0],
                    [0.0, 1.0, 0.0],
                ],
                &[&[0, 1, 2], &[0, 2, 3]],
                Some(0),
            ),
            submesh(
                &[[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [0.0, 1.0, 1.0]],
                &[&[0, 1, 2], &[0, 1, 2, 2]],
                Some(1),
            ),
        ],
        materials: vec![
            SceneMaterial {
                diffuse: Some([1.0, 0.0, 0.0]),
            },
            SceneMaterial { diffuse: None },
        ],
    }
}

/// Reads the next little-endian u32 from `bytes`, advancing `offset`.
pub fn read_u32(bytes: &[u8], offset: &mut usize) -> u32 {
    let value = u32::from_le_bytes(bytes[*offset..*offset + 4].try_into().unwrap());
    *offset += 4;
    value
}

/// Reads the next little-endian IEEE-754 f32 from `bytes`, advancing `offset`.
pub fn read_f32(bytes: &[u8], offset: &mut usize) -> f32 {
    let value = f32::from_le_bytes(bytes[*offset..*offset + 4].try_into().unwrap());
    *offset += 4;
    value
}
