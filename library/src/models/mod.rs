pub mod model;
pub mod upload_model;
pub mod descriptors;
pub mod debug_cube;
