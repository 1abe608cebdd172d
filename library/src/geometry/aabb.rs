use crate::geometry::alias::Float3;
use crate::geometry::axis::Axis;
use cgmath::Point3;
use strum::EnumCount;

type WidePoint = Point3<f64>;

/// Bounding box of raw mesh positions, accumulated in double precision
/// so that centering of large coordinates does not lose the low bits.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Aabb {
    min: WidePoint,
    max: WidePoint,
}

impl Aabb {
    #[must_use]
    pub(crate) const fn make_null() -> Self {
        Aabb {
            min: WidePoint::new(f64::MAX, f64::MAX, f64::MAX),
            max: WidePoint::new(f64::MIN, f64::MIN, f64::MIN),
        }
    }

    #[must_use]
    pub(crate) fn from_positions(positions: &[Float3]) -> Self {
        let mut result = Aabb::make_null();
        for position in positions {
            result.include(*position);
        }
        result
    }

    pub(crate) fn include(&mut self, position: Float3) {
        for i in 0..Axis::COUNT {
            let coordinate = position[i] as f64;
            self.min[i] = f64::min(self.min[i], coordinate);
            self.max[i] = f64::max(self.max[i], coordinate);
        }
    }

    #[must_use]
    pub(crate) fn is_null(&self) -> bool {
        (0..Axis::COUNT).any(|i| self.min[i] > self.max[i])
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn axis(&self, axis: Axis) -> (f64, f64) {
        let index = axis.as_index();
        (self.min[index], self.max[index])
    }

    #[must_use]
    pub(crate) fn center(&self) -> [f64; 3] {
        debug_assert!(!self.is_null(), "center of an empty box");
        let mut result = [0.0; 3];
        for i in 0..Axis::COUNT {
            result[i] = (self.min[i] + self.max[i]) / 2.0;
        }
        result
    }
}
