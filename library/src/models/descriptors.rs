use crate::geometry::transform::Affine;
use cgmath::{Deg, SquareMatrix};

pub const DIRECTION_ARROW_NAME: &str = "direction_arrow";
pub const AFRICAN_HEAD_NAME: &str = "african_head";

/// Names a mesh resource together with the placement applied once at upload.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelDescriptor {
    pub name: String,
    pub scale: f32,
    pub pre_transformation: Affine,
}

impl ModelDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), scale: 1.0, pre_transformation: Affine::identity() }
    }

    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_pre_transformation(mut self, pre_transformation: Affine) -> Self {
        self.pre_transformation = pre_transformation;
        self
    }

    /// The arrow mesh is authored lying along a different axis, so it is
    /// stood up and turned to point forward.
    #[must_use]
    pub fn direction_arrow() -> Self {
        let rotate_x = Affine::from_angle_x(Deg(90.0));
        let rotate_z = Affine::from_angle_z(Deg(90.0));
        let turn_around = Affine::from_angle_z(Deg(180.0));
        ModelDescriptor::new(DIRECTION_ARROW_NAME).with_pre_transformation(turn_around * rotate_z * rotate_x)
    }

    #[must_use]
    pub fn african_head() -> Self {
        ModelDescriptor::new(AFRICAN_HEAD_NAME)
    }

    /// Well-known meshes get their placement, anything else loads as is.
    #[must_use]
    pub fn preset(name: &str) -> Self {
        match name {
            DIRECTION_ARROW_NAME => ModelDescriptor::direction_arrow(),
            AFRICAN_HEAD_NAME => ModelDescriptor::african_head(),
            _ => ModelDescriptor::new(name),
        }
    }
}
