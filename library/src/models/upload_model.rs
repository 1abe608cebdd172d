use crate::geometry::alias::{Float3, Point, Vector};
use crate::geometry::transform::Transformation;
use crate::mesh::mesh_data::MeshData;
use crate::mesh::mesh_loader::{LoadStatistics, MeshLoader};
use crate::models::descriptors::ModelDescriptor;
use crate::models::model::Model;
use crate::resources::resource_set::{ResourceError, ResourceSet};
use more_asserts::assert_gt;

/// A loaded mesh with its scale and pre-transformation baked into the
/// vertex data, ready for upload.
pub struct UploadModel {
    name: String,
    positions: Vec<Float3>,
    normals: Vec<Float3>,
    indices: Vec<u16>,
}

impl UploadModel {
    #[must_use]
    pub fn new(name: impl Into<String>, mesh: MeshData, scale: f32, pre_transformation: &Transformation) -> Self {
        assert_gt!(scale, 0.0, "scale must be a positive number");

        let (positions, normals, indices) = mesh.into_parts();
        let positions = positions
            .into_iter()
            .map(|position| pre_transformation.of_point(&(Point::from(position) * scale)).into())
            .collect();
        let normals = normals
            .into_iter()
            .map(|normal| pre_transformation.of_surface_vector(&Vector::from(normal)).into())
            .collect();

        Self { name: name.into(), positions, normals, indices }
    }

    pub fn load(descriptor: &ModelDescriptor, resources: &ResourceSet, loader: &MeshLoader) -> Result<Self, ResourceError> {
        Self::load_with_statistics(descriptor, resources, loader).map(|(model, _)| model)
    }

    pub fn load_with_statistics(descriptor: &ModelDescriptor, resources: &ResourceSet, loader: &MeshLoader) -> Result<(Self, LoadStatistics), ResourceError> {
        let (mesh, statistics) = resources.load_mesh_with_statistics(&descriptor.name, loader)?;
        let pre_transformation = Transformation::new(descriptor.pre_transformation);
        Ok((UploadModel::new(descriptor.name.clone(), mesh, descriptor.scale, &pre_transformation), statistics))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Model for UploadModel {
    fn positions(&self) -> &[Float3] {
        &self.positions
    }

    fn normals(&self) -> &[Float3] {
        &self.normals
    }

    fn indices(&self) -> &[u16] {
        &self.indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::transform::Affine;
    use cgmath::Deg;
    use std::fs;
    use tempfile::TempDir;

    const SINGLE_TRIANGLE_OBJ_FILE: &str = "v 0 1 0\nv -1 -1 0\nv 1 -1 0\nvn 0 0 1\nf 1//1 2//1 3//1\n";

    #[must_use]
    fn make_triangle() -> MeshData {
        MeshLoader::default().load_from_str(SINGLE_TRIANGLE_OBJ_FILE).unwrap()
    }

    #[test]
    fn test_identity_keeps_mesh() {
        let mesh = make_triangle();

        let system_under_test = UploadModel::new("triangle", mesh.clone(), 1.0, &Transformation::identity());

        assert_eq!(system_under_test.positions(), mesh.positions());
        assert_eq!(system_under_test.normals(), mesh.normals());
        assert_eq!(system_under_test.indices(), mesh.indices());
        assert_eq!(system_under_test.name(), "triangle");
    }

    #[test]
    fn test_scale_then_translate() {
        let translation = Transformation::new(Affine::from_translation(Vector::new(0.0, 0.0, 3.0)));

        let system_under_test = UploadModel::new("triangle", make_triangle(), 0.5, &translation);

        assert_eq!(system_under_test.positions()[0], [0.0, 0.5, 3.0]);
        assert_eq!(system_under_test.positions()[1], [-0.5, -0.5, 3.0]);
        assert_eq!(system_under_test.normals()[0], [0.0, 0.0, -1.0]);
    }

    #[test]
    fn test_rotation_turns_normals() {
        let rotation = Transformation::new(Affine::from_angle_x(Deg(90.0)));

        let system_under_test = UploadModel::new("triangle", make_triangle(), 1.0, &rotation);

        let normal = system_under_test.normals()[2];
        assert!((normal[0] - 0.0).abs() < 1e-6);
        assert!((normal[1] - 1.0).abs() < 1e-6);
        assert!((normal[2] - 0.0).abs() < 1e-6);
    }

    #[test]
    #[should_panic(expected = "scale must be a positive number")]
    fn test_zero_scale() {
        let _ = UploadModel::new("triangle", make_triangle(), 0.0, &Transformation::identity());
    }

    #[test]
    fn test_load_by_descriptor() {
        let folder = TempDir::new().expect("failed to create temp folder");
        fs::write(folder.path().join("direction_arrow.obj"), SINGLE_TRIANGLE_OBJ_FILE).expect("failed to write mesh");
        let resources = ResourceSet::new(folder.path());

        let system_under_test = UploadModel::load(&ModelDescriptor::direction_arrow(), &resources, &MeshLoader::default()).unwrap();

        assert_eq!(system_under_test.name(), "direction_arrow");
        assert_eq!(system_under_test.indices_count(), 3);
        let top = system_under_test.positions()[0];
        assert!((top[0] - 0.0).abs() < 1e-6);
        assert!((top[1] - 0.0).abs() < 1e-6);
        assert!((top[2] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_load_with_statistics_by_preset_name() {
        let folder = TempDir::new().expect("failed to create temp folder");
        fs::write(folder.path().join("african_head.obj"), SINGLE_TRIANGLE_OBJ_FILE).expect("failed to write mesh");
        let resources = ResourceSet::new(folder.path());

        let (system_under_test, statistics) = UploadModel::load_with_statistics(
            &ModelDescriptor::preset("african_head"), &resources, &MeshLoader::default()).unwrap();

        assert_eq!(system_under_test.name(), "african_head");
        assert_eq!(system_under_test.positions(), make_triangle().positions());
        assert_eq!(statistics.vertices, 3);
        assert_eq!(statistics.triangles, 1);
    }

    #[test]
    fn test_load_missing_resource() {
        let folder = TempDir::new().expect("failed to create temp folder");
        let resources = ResourceSet::new(folder.path());

        let actual = UploadModel::load(&ModelDescriptor::african_head(), &resources, &MeshLoader::default());

        assert!(matches!(actual, Err(ResourceError::ResourceNotFound { .. })));
    }
}
