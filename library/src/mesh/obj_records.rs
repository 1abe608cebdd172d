use crate::geometry::alias::Float3;
use crate::geometry::fundamental_constants::{COMPONENTS_IN_NORMAL, COMPONENTS_IN_POSITION, VERTICES_IN_TRIANGLE};

const POSITION_TAG: &str = "v";
const NORMAL_TAG: &str = "vn";
const FACE_TAG: &str = "f";

const CORNER_FIELDS_SEPARATOR: char = '/';
const CORNER_NORMAL_FIELD: usize = 2;

/// One corner of a triangle, with 0-based indices.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Corner {
    pub(crate) vertex: usize,
    pub(crate) normal: Option<usize>,
}

impl Corner {
    #[must_use]
    pub(crate) const fn new(vertex: usize, normal: Option<usize>) -> Self {
        Corner { vertex, normal }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Face {
    pub(crate) corners: [Corner; VERTICES_IN_TRIANGLE],
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Record {
    Position(Float3),
    Normal(Float3),
    Face(Face),
    Ignored,
    Malformed { reason: &'static str },
}

#[must_use]
pub(crate) fn parse_line(line: &str) -> Record {
    let mut fields = line.split_whitespace();
    let Some(tag) = fields.next() else {
        return Record::Ignored;
    };

    match tag {
        POSITION_TAG => match parse_triple(fields, COMPONENTS_IN_POSITION) {
            Some(position) => Record::Position(position),
            None => Record::Malformed { reason: "vertex needs exactly three numeric coordinates" },
        },
        NORMAL_TAG => match parse_triple(fields, COMPONENTS_IN_NORMAL) {
            Some(normal) => Record::Normal(normal),
            None => Record::Malformed { reason: "normal needs exactly three numeric components" },
        },
        FACE_TAG => parse_face(fields),
        _ => Record::Ignored,
    }
}

#[must_use]
fn parse_triple<'a>(fields: impl Iterator<Item = &'a str>, expected_count: usize) -> Option<Float3> {
    let values: Vec<&str> = fields.collect();
    if values.len() != expected_count {
        return None;
    }

    let mut result = [0.0_f32; 3];
    for (slot, text) in result.iter_mut().zip(values) {
        let value: f32 = text.parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        *slot = value;
    }
    Some(result)
}

/// Only the first three corners are consumed: polygons with more corners
/// are not triangulated.
#[must_use]
fn parse_face<'a>(fields: impl Iterator<Item = &'a str>) -> Record {
    let records: Vec<&str> = fields.collect();
    if records.len() < VERTICES_IN_TRIANGLE {
        return Record::Malformed { reason: "face needs three vertex records" };
    }

    let mut corners = [Corner::new(0, None); VERTICES_IN_TRIANGLE];
    for (corner, record) in corners.iter_mut().zip(records) {
        match parse_corner(record) {
            Some(parsed) => *corner = parsed,
            None => return Record::Malformed { reason: "face vertex record is not a valid index triple" },
        }
    }
    Record::Face(Face { corners })
}

#[must_use]
fn parse_corner(record: &str) -> Option<Corner> {
    let fields: Vec<&str> = record.split(CORNER_FIELDS_SEPARATOR).collect();
    let vertex = parse_one_based(fields[0])?;

    let normal = match fields.get(CORNER_NORMAL_FIELD) {
        Some(text) if !text.is_empty() => Some(parse_one_based(text)?),
        _ => None,
    };

    Some(Corner::new(vertex, normal))
}

#[must_use]
fn parse_one_based(text: &str) -> Option<usize> {
    let index: usize = text.parse().ok()?;
    index.checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_position_record() {
        assert_eq!(parse_line("v 1.0 -2.5 3"), Record::Position([1.0, -2.5, 3.0]));
    }

    #[test]
    fn test_normal_record() {
        assert_eq!(parse_line("vn 0 0 1"), Record::Normal([0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_whitespace_runs_and_carriage_return() {
        assert_eq!(parse_line("  v\t1  2   3\r"), Record::Position([1.0, 2.0, 3.0]));
    }

    #[rstest]
    #[case("v 1 2")]
    #[case("v 1 2 3 4")]
    #[case("v 1 two 3")]
    #[case("v nan 0 0")]
    #[case("vn 0 1")]
    #[case("vn 0 inf 0")]
    #[case("f 1 2")]
    #[case("f 0 1 2")]
    #[case("f 1 -2 3")]
    #[case("f 1/1/x 2 3")]
    #[case("f a b c")]
    fn test_malformed_lines(#[case] line: &str) {
        assert!(matches!(parse_line(line), Record::Malformed { .. }), "line '{}' should be malformed", line);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("# comment")]
    #[case("vt 0.5 0.5")]
    #[case("o arrow")]
    #[case("g body")]
    #[case("s off")]
    #[case("usemtl default")]
    fn test_ignored_lines(#[case] line: &str) {
        assert_eq!(parse_line(line), Record::Ignored);
    }

    #[test]
    fn test_face_without_normals() {
        let expected = Face { corners: [Corner::new(0, None), Corner::new(1, None), Corner::new(2, None)] };
        assert_eq!(parse_line("f 1 2 3"), Record::Face(expected));
    }

    #[test]
    fn test_face_with_texture_only() {
        let expected = Face { corners: [Corner::new(3, None), Corner::new(4, None), Corner::new(5, None)] };
        assert_eq!(parse_line("f 4/1 5/2 6/3"), Record::Face(expected));
    }

    #[test]
    fn test_face_with_empty_normal_field() {
        let expected = Face { corners: [Corner::new(0, None), Corner::new(1, None), Corner::new(2, None)] };
        assert_eq!(parse_line("f 1/1/ 2/2/ 3/3/"), Record::Face(expected));
    }

    #[test]
    fn test_face_with_normals_and_no_texture() {
        let expected = Face { corners: [Corner::new(0, Some(0)), Corner::new(1, Some(0)), Corner::new(2, Some(0))] };
        assert_eq!(parse_line("f 1//1 2//1 3//1"), Record::Face(expected));
    }

    #[test]
    fn test_face_with_full_triples() {
        let expected = Face { corners: [Corner::new(9, Some(2)), Corner::new(10, Some(3)), Corner::new(11, Some(4))] };
        assert_eq!(parse_line("f 10/7/3 11/8/4 12/9/5"), Record::Face(expected));
    }

    #[test]
    fn test_quad_face_consumes_first_three_corners() {
        let expected = Face { corners: [Corner::new(0, None), Corner::new(1, None), Corner::new(2, None)] };
        assert_eq!(parse_line("f 1 2 3 4"), Record::Face(expected));
    }
}
