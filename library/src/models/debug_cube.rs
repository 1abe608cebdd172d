use crate::geometry::alias::Float3;
use crate::models::model::{Model, Primitive};

const CUBE_CORNERS: [Float3; 8] = [
    [-1.0,  1.0, -1.0],
    [ 1.0,  1.0, -1.0],
    [ 1.0, -1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [-1.0,  1.0,  1.0],
    [ 1.0,  1.0,  1.0],
    [ 1.0, -1.0,  1.0],
    [-1.0, -1.0,  1.0],
];

const CUBE_EDGES: [u16; 24] = [
    0, 1,
    1, 2,
    2, 3,
    3, 0,
    4, 5,
    5, 6,
    6, 7,
    7, 4,
    0, 4,
    1, 5,
    2, 6,
    3, 7,
];

/// Wireframe of the canonical space bounds, drawn as a line list.
pub struct DebugCube {
    normals: [Float3; CUBE_CORNERS.len()],
}

impl DebugCube {
    #[must_use]
    pub fn new() -> Self {
        Self { normals: [[0.0; 3]; CUBE_CORNERS.len()] }
    }
}

impl Default for DebugCube {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for DebugCube {
    fn positions(&self) -> &[Float3] {
        &CUBE_CORNERS
    }

    fn normals(&self) -> &[Float3] {
        &self.normals
    }

    fn indices(&self) -> &[u16] {
        &CUBE_EDGES
    }

    fn primitive(&self) -> Primitive {
        Primitive::Lines
    }
}
