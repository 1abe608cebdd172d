use crate::mesh::load_error::MeshLoadError;
use crate::mesh::mesh_data::MeshData;
use crate::mesh::mesh_loader::{LoadStatistics, MeshLoader};
use log::info;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_MODEL_EXTENSION: &str = "obj";

#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("mesh resource not found: {name:?} (looked for {path:?})")]
    ResourceNotFound { name: String, path: PathBuf },
    #[error(transparent)]
    Load(#[from] MeshLoadError),
}

/// Directory of mesh files addressed by name, the extension is implied.
#[derive(Clone, Debug)]
pub struct ResourceSet {
    root: PathBuf,
}

impl ResourceSet {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn locate(&self, name: &str) -> Result<PathBuf, ResourceError> {
        let path = self.root.join(format!("{name}.{DEFAULT_MODEL_EXTENSION}"));
        if path.is_file() {
            Ok(path)
        } else {
            Err(ResourceError::ResourceNotFound { name: name.to_string(), path })
        }
    }

    pub fn load_mesh(&self, name: &str, loader: &MeshLoader) -> Result<MeshData, ResourceError> {
        self.load_mesh_with_statistics(name, loader).map(|(mesh, _)| mesh)
    }

    pub fn load_mesh_with_statistics(&self, name: &str, loader: &MeshLoader) -> Result<(MeshData, LoadStatistics), ResourceError> {
        let path = self.locate(name)?;
        let (mesh, statistics) = loader.load_with_statistics_from_file(&path)?;
        info!("mesh '{}' loaded: {} vertices, {} triangles", name, mesh.vertices_count(), mesh.triangles_count());
        Ok((mesh, statistics))
    }
}
