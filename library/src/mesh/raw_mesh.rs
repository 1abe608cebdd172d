use crate::geometry::alias::Float3;
use crate::geometry::fundamental_constants::VERTICES_IN_TRIANGLE;
use crate::mesh::load_error::MeshLoadError;
use crate::mesh::obj_records::{parse_line, Corner, Face, Record};
use log::trace;
use obj::raw::object::{parse_obj, Polygon, RawObj};
use obj::ObjError;

/// Mesh records as they appear in the source, before any reordering or
/// normalization. Indices are already 0-based.
#[derive(Default, Debug)]
pub(crate) struct RawMesh {
    pub(crate) positions: Vec<Float3>,
    pub(crate) normals: Vec<Float3>,
    pub(crate) faces: Vec<Face>,
    pub(crate) skipped_lines: usize,
}

impl RawMesh {
    /// Line by line parse; malformed records are skipped and counted.
    #[must_use]
    pub(crate) fn parse_tolerant(text: &str) -> Self {
        let mut result = RawMesh::default();
        for (line_index, line) in text.lines().enumerate() {
            match parse_line(line) {
                Record::Position(position) => result.positions.push(position),
                Record::Normal(normal) => result.normals.push(normal),
                Record::Face(face) => result.faces.push(face),
                Record::Ignored => {}
                Record::Malformed { reason } => {
                    trace!("skipping line {}: {}", line_index + 1, reason);
                    result.skipped_lines += 1;
                }
            }
        }
        result.drop_dangling_faces();
        result
    }

    /// Whole-file parse with the `obj` crate; any malformed record fails the load.
    pub(crate) fn parse_strict(text: &str) -> Result<Self, MeshLoadError> {
        let raw: RawObj = parse_obj(text.as_bytes()).map_err(|e| translate_error(e))?;

        let mut result = RawMesh {
            positions: raw.positions.iter().map(|&(x, y, z, _)| [x, y, z]).collect(),
            normals: raw.normals.iter().map(|&(x, y, z)| [x, y, z]).collect(),
            faces: Vec::with_capacity(raw.polygons.len()),
            skipped_lines: 0,
        };

        for (polygon_index, polygon) in raw.polygons.iter().enumerate() {
            let corners = polygon_corners(polygon);
            if corners.len() != VERTICES_IN_TRIANGLE {
                return Err(MeshLoadError::MalformedGeometry {
                    what: format!("polygon #{} has {} vertices, only triangles are supported", polygon_index, corners.len()),
                });
            }
            result.faces.push(Face { corners: [corners[0], corners[1], corners[2]] });
        }

        if let Some(problem) = result.first_dangling_face() {
            return Err(MeshLoadError::MalformedGeometry { what: problem });
        }

        Ok(result)
    }

    fn drop_dangling_faces(&mut self) {
        let positions_count = self.positions.len();
        let normals_count = self.normals.len();
        let faces_before = self.faces.len();

        self.faces.retain(|face| face_is_resolvable(face, positions_count, normals_count));

        let dropped = faces_before - self.faces.len();
        if dropped > 0 {
            trace!("skipping {} faces referring to missing vertices or normals", dropped);
            self.skipped_lines += dropped;
        }
    }

    #[must_use]
    fn first_dangling_face(&self) -> Option<String> {
        self.faces
            .iter()
            .position(|face| !face_is_resolvable(face, self.positions.len(), self.normals.len()))
            .map(|index| format!("face #{} refers to a missing vertex or normal", index))
    }
}

#[must_use]
fn face_is_resolvable(face: &Face, positions_count: usize, normals_count: usize) -> bool {
    face.corners.iter().all(|corner| {
        corner.vertex < positions_count && corner.normal.is_none_or(|normal| normal < normals_count)
    })
}

#[must_use]
fn polygon_corners(polygon: &Polygon) -> Vec<Corner> {
    match polygon {
        Polygon::P(vertices) => vertices.iter().map(|&v| Corner::new(v, None)).collect(),
        Polygon::PT(vertices) => vertices.iter().map(|&(v, _)| Corner::new(v, None)).collect(),
        Polygon::PN(vertices) => vertices.iter().map(|&(v, n)| Corner::new(v, Some(n))).collect(),
        Polygon::PTN(vertices) => vertices.iter().map(|&(v, _, n)| Corner::new(v, Some(n))).collect(),
    }
}

#[must_use]
fn translate_error(from: ObjError) -> MeshLoadError {
    match from {
        ObjError::Io(_) => MeshLoadError::ReadError { what: from.to_string() },
        ObjError::ParseInt(_) => MeshLoadError::MalformedGeometry { what: from.to_string() },
        ObjError::ParseFloat(_) => MeshLoadError::MalformedGeometry { what: from.to_string() },
        ObjError::Load(_) => MeshLoadError::MalformedGeometry { what: from.to_string() },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE_WITH_NORMAL: &str = r#"
        v  0.0  1.0  0.0
        v -1.0 -1.0  0.0
        v  1.0 -1.0  0.0

        vn  0.0  0.0  1.0

        f 1//1 2//1 3//1
        "#;

    #[test]
    fn test_tolerant_parse_of_valid_source() {
        let system_under_test = RawMesh::parse_tolerant(TRIANGLE_WITH_NORMAL);

        assert_eq!(system_under_test.positions, vec![[0.0, 1.0, 0.0], [-1.0, -1.0, 0.0], [1.0, -1.0, 0.0]]);
        assert_eq!(system_under_test.normals, vec![[0.0, 0.0, 1.0]]);
        assert_eq!(system_under_test.faces.len(), 1);
        assert_eq!(system_under_test.faces[0].corners[2], Corner::new(2, Some(0)));
        assert_eq!(system_under_test.skipped_lines, 0);
    }

    #[test]
    fn test_tolerant_parse_counts_malformed_lines() {
        let source = "v 0 0 0\nv 1 1\nv 1 0 0\nv 0 1 0\nvn 1\nf 1 2 3\n";

        let system_under_test = RawMesh::parse_tolerant(source);

        assert_eq!(system_under_test.positions.len(), 3);
        assert_eq!(system_under_test.normals.len(), 0);
        assert_eq!(system_under_test.faces.len(), 1);
        assert_eq!(system_under_test.skipped_lines, 2);
    }

    #[test]
    fn test_tolerant_parse_drops_faces_with_missing_references() {
        let source = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nf 1 2 4\nf 1//2 2//1 3//1\nf 1//1 2//1 3//1\n";

        let system_under_test = RawMesh::parse_tolerant(source);

        assert_eq!(system_under_test.faces.len(), 1);
        assert_eq!(system_under_test.skipped_lines, 2);
    }

    #[test]
    fn test_strict_parse_of_valid_source() {
        let system_under_test = RawMesh::parse_strict(TRIANGLE_WITH_NORMAL).unwrap();

        assert_eq!(system_under_test.positions.len(), 3);
        assert_eq!(system_under_test.normals, vec![[0.0, 0.0, 1.0]]);
        assert_eq!(
            system_under_test.faces,
            vec![Face { corners: [Corner::new(0, Some(0)), Corner::new(1, Some(0)), Corner::new(2, Some(0))] }]
        );
    }

    #[test]
    fn test_strict_parse_rejects_quads() {
        let source = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";

        let actual = RawMesh::parse_strict(source);

        assert!(matches!(actual, Err(MeshLoadError::MalformedGeometry { .. })));
    }

    #[test]
    fn test_strict_parse_rejects_non_numeric_coordinates() {
        let source = "v 0 zero 0\nv 1 0 0\nv 1 1 0\nf 1 2 3\n";

        let actual = RawMesh::parse_strict(source);

        assert!(matches!(actual, Err(MeshLoadError::MalformedGeometry { .. })));
    }

    #[test]
    fn test_strict_parse_rejects_dangling_face() {
        let source = "v 0 0 0\nv 1 0 0\nf 1 2 3\n";

        let actual = RawMesh::parse_strict(source);

        assert!(matches!(actual, Err(MeshLoadError::MalformedGeometry { .. })));
    }
}
