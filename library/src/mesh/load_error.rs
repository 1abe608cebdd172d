use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeshLoadError {
    #[error("io problem while loading mesh: {what:?}")]
    ReadError { what: String },
    #[error("format problem while loading mesh: {what:?}")]
    MalformedGeometry { what: String },
    #[error("degenerate mesh geometry: {what:?}")]
    DegenerateGeometry { what: String },
    #[error("mesh does not fit 16-bit indices: {what:?}")]
    IndexOverflow { what: String },
}
