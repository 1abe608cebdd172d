pub mod alias;
pub mod transform;
pub(crate) mod aabb;
pub mod axis;
pub(crate) mod fundamental_constants;
