use crate::geometry::alias::Float3;
use crate::geometry::fundamental_constants::VERTICES_IN_TRIANGLE;
use crate::mesh::load_error::MeshLoadError;
use serde::{Deserialize, Serialize};

/// Loader output: parallel per-vertex positions and normals plus a triangle
/// list, in the canonical coordinate space.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MeshDataParts")]
pub struct MeshData {
    positions: Vec<Float3>,
    normals: Vec<Float3>,
    indices: Vec<u16>,
}

impl MeshData {
    #[must_use]
    pub(crate) fn new(positions: Vec<Float3>, normals: Vec<Float3>, indices: Vec<u16>) -> Self {
        assert_eq!(positions.len(), normals.len(), "positions and normals must be parallel");
        debug_assert!(indices.iter().all(|&index| (index as usize) < positions.len()), "index out of vertex range");
        MeshData { positions, normals, indices }
    }

    #[must_use]
    pub fn positions(&self) -> &[Float3] {
        &self.positions
    }

    #[must_use]
    pub fn normals(&self) -> &[Float3] {
        &self.normals
    }

    #[must_use]
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    #[must_use]
    pub fn vertices_count(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn triangles_count(&self) -> usize {
        self.indices.len() / VERTICES_IN_TRIANGLE
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[must_use]
    pub fn positions_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    #[must_use]
    pub fn normals_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    #[must_use]
    pub fn indices_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    #[must_use]
    pub fn into_parts(self) -> (Vec<Float3>, Vec<Float3>, Vec<u16>) {
        (self.positions, self.normals, self.indices)
    }
}

#[derive(Deserialize)]
struct MeshDataParts {
    positions: Vec<Float3>,
    normals: Vec<Float3>,
    indices: Vec<u16>,
}

impl TryFrom<MeshDataParts> for MeshData {
    type Error = MeshLoadError;

    fn try_from(parts: MeshDataParts) -> Result<Self, Self::Error> {
        if parts.positions.len() != parts.normals.len() {
            return Err(MeshLoadError::MalformedGeometry {
                what: format!("{} positions but {} normals", parts.positions.len(), parts.normals.len()),
            });
        }
        if parts.indices.len() % VERTICES_IN_TRIANGLE != 0 {
            return Err(MeshLoadError::MalformedGeometry {
                what: format!("{} indices do not form whole triangles", parts.indices.len()),
            });
        }
        if let Some(index) = parts.indices.iter().find(|&&index| (index as usize) >= parts.positions.len()) {
            return Err(MeshLoadError::MalformedGeometry {
                what: format!("index {} is out of range of {} vertices", index, parts.positions.len()),
            });
        }
        Ok(MeshData { positions: parts.positions, normals: parts.normals, indices: parts.indices })
    }
}
