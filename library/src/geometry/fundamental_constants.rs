pub(crate) const VERTICES_IN_TRIANGLE: usize = 3;
pub(crate) const VERTICES_IN_LINE: usize = 2;

pub(crate) const COMPONENTS_IN_POSITION: usize = 3;
pub(crate) const COMPONENTS_IN_NORMAL: usize = 3;
