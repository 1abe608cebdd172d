use crate::geometry::alias::Float3;
use crate::geometry::fundamental_constants::{VERTICES_IN_LINE, VERTICES_IN_TRIANGLE};
use crate::mesh::mesh_data::MeshData;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Primitive {
    Triangles,
    Lines,
}

impl Primitive {
    #[must_use]
    pub const fn vertices_per_primitive(self) -> usize {
        match self {
            Primitive::Triangles => VERTICES_IN_TRIANGLE,
            Primitive::Lines => VERTICES_IN_LINE,
        }
    }
}

/// Geometry a renderer can upload: parallel positions and normals with an
/// index list of the given primitive kind.
pub trait Model {
    #[must_use]
    fn positions(&self) -> &[Float3];

    #[must_use]
    fn normals(&self) -> &[Float3];

    #[must_use]
    fn indices(&self) -> &[u16];

    #[must_use]
    fn primitive(&self) -> Primitive {
        Primitive::Triangles
    }

    #[must_use]
    fn indices_count(&self) -> usize {
        self.indices().len()
    }
}

impl Model for MeshData {
    fn positions(&self) -> &[Float3] {
        MeshData::positions(self)
    }

    fn normals(&self) -> &[Float3] {
        MeshData::normals(self)
    }

    fn indices(&self) -> &[u16] {
        MeshData::indices(self)
    }
}
