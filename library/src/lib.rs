#![allow(clippy::needless_range_loop)]

pub mod geometry;
pub mod gpu;
pub mod mesh;
pub mod models;
pub mod resources;

pub use mesh::load_error::MeshLoadError;
pub use mesh::mesh_data::MeshData;
pub use mesh::mesh_loader::{LoadOptions, LoadStatistics, MeshLoader, ParsePolicy};
pub use mesh::normalization::CenteringPrecision;
pub use resources::resource_set::{ResourceError, ResourceSet};

#[must_use]
pub fn get_reasonable_log_filter() -> &'static str {
    "wgpu=warn,naga=warn"
}
