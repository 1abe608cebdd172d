pub mod load_error;
pub mod mesh_data;
pub mod mesh_loader;
pub mod normalization;
pub(crate) mod obj_records;
pub(crate) mod raw_mesh;
