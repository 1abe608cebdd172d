use strum_macros::EnumCount;

#[derive(EnumCount, Copy, Clone, Default, Debug, PartialEq)]
pub enum Axis {
    #[default]
    X,
    Y,
    Z,
}

impl Axis {
    #[must_use]
    pub(crate) const fn as_index(self) -> usize {
        self as usize
    }
}

pub(crate) const ALL_AXES: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
