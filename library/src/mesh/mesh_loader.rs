use crate::mesh::load_error::MeshLoadError;
use crate::mesh::mesh_data::MeshData;
use crate::mesh::normalization::{prepare_normal, reorder_normals, CenteringPrecision, Normalization};
use crate::mesh::raw_mesh::RawMesh;
use log::{debug, warn};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Largest vertex count addressable by 16-bit indices.
const MAX_VERTICES: usize = u16::MAX as usize + 1;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ParsePolicy {
    /// Malformed lines are skipped silently.
    #[default]
    Tolerant,
    /// Any malformed record aborts the load.
    Strict,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadOptions {
    pub policy: ParsePolicy,
    pub centering: CenteringPrecision,
}

impl LoadOptions {
    #[must_use]
    pub fn strict() -> Self {
        LoadOptions { policy: ParsePolicy::Strict, ..Default::default() }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LoadStatistics {
    pub vertices: usize,
    pub normals: usize,
    pub triangles: usize,
    pub skipped_lines: usize,
}

#[derive(Copy, Clone, Debug, Default)]
pub struct MeshLoader {
    options: LoadOptions,
}

impl MeshLoader {
    #[must_use]
    pub fn new(options: LoadOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> LoadOptions {
        self.options
    }

    pub fn load_from_file(&self, source_file: &Path) -> Result<MeshData, MeshLoadError> {
        self.load_with_statistics_from_file(source_file).map(|(mesh, _)| mesh)
    }

    pub fn load_from_reader(&self, source: impl Read) -> Result<MeshData, MeshLoadError> {
        self.load_with_statistics_from_reader(source).map(|(mesh, _)| mesh)
    }

    pub fn load_from_str(&self, source: &str) -> Result<MeshData, MeshLoadError> {
        self.load_with_statistics_from_str(source).map(|(mesh, _)| mesh)
    }

    pub fn load_with_statistics_from_file(&self, source_file: &Path) -> Result<(MeshData, LoadStatistics), MeshLoadError> {
        let file = File::open(source_file)
            .map_err(|e| MeshLoadError::ReadError { what: format!("{}: {}", source_file.display(), e) })?;
        debug!("loading mesh from {}", source_file.display());
        self.load_with_statistics_from_reader(BufReader::new(file))
    }

    pub fn load_with_statistics_from_reader(&self, mut source: impl Read) -> Result<(MeshData, LoadStatistics), MeshLoadError> {
        let mut bytes = Vec::new();
        source.read_to_end(&mut bytes).map_err(|e| MeshLoadError::ReadError { what: e.to_string() })?;
        let text = String::from_utf8(bytes).map_err(|e| MeshLoadError::ReadError { what: e.to_string() })?;
        self.load_with_statistics_from_str(&text)
    }

    pub fn load_with_statistics_from_str(&self, source: &str) -> Result<(MeshData, LoadStatistics), MeshLoadError> {
        let raw = match self.options.policy {
            ParsePolicy::Tolerant => RawMesh::parse_tolerant(source),
            ParsePolicy::Strict => RawMesh::parse_strict(source)?,
        };

        if raw.positions.len() > MAX_VERTICES {
            return Err(MeshLoadError::IndexOverflow {
                what: format!("{} vertices, at most {} supported", raw.positions.len(), MAX_VERTICES),
            });
        }

        let normalization = Normalization::evaluate(&raw.positions, self.options.centering)?;
        let positions = raw.positions.iter().map(|&position| normalization.apply(position)).collect();

        let prepared_normals: Vec<_> = raw.normals.iter().map(|&normal| prepare_normal(normal)).collect();
        let normals = reorder_normals(raw.positions.len(), &raw.faces, &prepared_normals);

        let indices: Vec<u16> = raw.faces
            .iter()
            .flat_map(|face| face.corners.iter().map(|corner| corner.vertex as u16))
            .collect();

        let statistics = LoadStatistics {
            vertices: raw.positions.len(),
            normals: raw.normals.len(),
            triangles: raw.faces.len(),
            skipped_lines: raw.skipped_lines,
        };
        if statistics.skipped_lines > 0 {
            warn!("{} malformed mesh records were skipped", statistics.skipped_lines);
        }
        debug!(
            "mesh loaded: {} vertices, {} normals, {} triangles",
            statistics.vertices, statistics.normals, statistics.triangles,
        );

        Ok((MeshData::new(positions, normals, indices), statistics))
    }
}
