//! Canonical coordinate space: geometry centered at the origin, scaled by a
//! single factor so the largest coordinate magnitude is exactly one, and
//! mirrored along Z into the right-handed convention of the renderer.

use crate::geometry::aabb::Aabb;
use crate::geometry::alias::{Float3, Vector};
use crate::geometry::axis::{Axis, ALL_AXES};
use crate::mesh::load_error::MeshLoadError;
use crate::mesh::obj_records::Face;
use cgmath::{InnerSpace, Zero};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CenteringPrecision {
    Single,
    #[default]
    Double,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Normalization {
    precision: CenteringPrecision,
    offset: [f64; 3],
    scale_denominator: f64,
}

impl Normalization {
    pub(crate) fn evaluate(raw_positions: &[Float3], precision: CenteringPrecision) -> Result<Self, MeshLoadError> {
        let bounds = Aabb::from_positions(raw_positions);
        if bounds.is_null() {
            return Ok(Normalization { precision, offset: [0.0; 3], scale_denominator: 1.0 });
        }

        let center = bounds.center();
        let mut offset = [0.0_f64; 3];
        for axis in ALL_AXES {
            offset[axis.as_index()] = round_to(precision, -center[axis.as_index()]);
        }

        let mut max_abs = 0.0_f64;
        for position in raw_positions {
            for axis in ALL_AXES {
                let index = axis.as_index();
                let centered = round_to(precision, position[index] as f64 + offset[index]);
                max_abs = f64::max(max_abs, centered.abs());
            }
        }

        if max_abs == 0.0 {
            return Err(MeshLoadError::DegenerateGeometry {
                what: format!("all {} vertices coincide, scale is undefined", raw_positions.len()),
            });
        }

        Ok(Normalization { precision, offset, scale_denominator: max_abs })
    }

    #[must_use]
    pub(crate) fn apply(&self, raw: Float3) -> Float3 {
        let mut result = [0.0_f32; 3];
        for axis in ALL_AXES {
            let index = axis.as_index();
            let centered = round_to(self.precision, raw[index] as f64 + self.offset[index]);
            result[index] = (centered / self.scale_denominator) as f32;
        }
        flip_handedness(result)
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn offset(&self) -> [f64; 3] {
        self.offset
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn scale_denominator(&self) -> f64 {
        self.scale_denominator
    }
}

#[must_use]
fn round_to(precision: CenteringPrecision, value: f64) -> f64 {
    match precision {
        CenteringPrecision::Single => value as f32 as f64,
        CenteringPrecision::Double => value,
    }
}

#[must_use]
pub(crate) fn flip_handedness(mut victim: Float3) -> Float3 {
    victim[Axis::Z.as_index()] = -victim[Axis::Z.as_index()];
    victim
}

/// Direction vectors are neither centered nor scaled, only mirrored and
/// brought to unit length.
#[must_use]
pub(crate) fn prepare_normal(raw: Float3) -> Float3 {
    let flipped = Vector::from(flip_handedness(raw));
    if flipped.magnitude2().is_zero() {
        return [0.0; 3];
    }
    flipped.normalize().into()
}

/// Moves face-varying normals into the per-vertex slots; when several faces
/// disagree on a vertex, the last face in source order wins.
#[must_use]
pub(crate) fn reorder_normals(vertices_count: usize, faces: &[Face], prepared_normals: &[Float3]) -> Vec<Float3> {
    let mut result = vec![[0.0_f32; 3]; vertices_count];
    for face in faces {
        for corner in &face.corners {
            if let Some(normal) = corner.normal {
                result[corner.vertex] = prepared_normals[normal];
            }
        }
    }
    result
}
