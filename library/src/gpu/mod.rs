pub mod context;
pub mod resources;
pub mod gpu_mesh;
