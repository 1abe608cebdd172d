use cgmath::{InnerSpace, Matrix, Matrix4, SquareMatrix, Transform, Zero};
use crate::geometry::alias::{Point, Vector};

pub type Affine = Matrix4<f32>;

pub struct Transformation {
    forward: Affine,
    inverse: Affine,
}

impl Transformation {
    #[must_use]
    pub fn new(source: Affine) -> Self {
        Transformation {
            forward: source,
            inverse: source.invert().unwrap_or(Affine::identity()),
        }
    }

    #[must_use]
    pub fn identity() -> Self {
        Transformation::new(Affine::identity())
    }

    #[must_use]
    pub fn forward(&self) -> &Affine {
        &self.forward
    }
}

impl Transformation {
    /// Homogeneous transform of a point, divided by the resulting `w`.
    #[must_use]
    pub fn of_point(&self, target: &Point) -> Point {
        self.forward.transform_point(*target)
    }

    /// Transforms a surface normal with the inverse transpose and brings it
    /// back to unit length; a zero vector stays zero.
    #[must_use]
    pub fn of_surface_vector(&self, target: &Vector) -> Vector {
        let transformed = self.inverse.transpose().transform_vector(*target);
        if transformed.magnitude2().is_zero() {
            return Vector::zero();
        }
        transformed.normalize()
    }
}
