use library::models::debug_cube::DebugCube;
use library::models::model::{Model, Primitive};
use library::LoadStatistics;
use serde::Serialize;
use std::fmt;

const DEBUG_CUBE_NAME: &str = "debug_cube";

#[derive(Serialize, Default)]
pub(crate) struct Report {
    pub(crate) models: Vec<ModelReport>,
}

#[derive(Serialize)]
pub(crate) struct ModelReport {
    name: String,
    primitive: &'static str,
    vertices: usize,
    indices: usize,
    bounds_min: [f32; 3],
    bounds_max: [f32; 3],
    #[serde(skip_serializing_if = "Option::is_none")]
    statistics: Option<LoadStatistics>,
}

impl ModelReport {
    #[must_use]
    pub(crate) fn new(name: &str, statistics: LoadStatistics, model: &dyn Model) -> Self {
        Self::describe(name, Some(statistics), model)
    }

    #[must_use]
    pub(crate) fn of_debug_cube(cube: &DebugCube) -> Self {
        Self::describe(DEBUG_CUBE_NAME, None, cube)
    }

    #[must_use]
    fn describe(name: &str, statistics: Option<LoadStatistics>, model: &dyn Model) -> Self {
        let mut bounds_min = [f32::MAX; 3];
        let mut bounds_max = [f32::MIN; 3];
        for position in model.positions() {
            for i in 0..3 {
                bounds_min[i] = bounds_min[i].min(position[i]);
                bounds_max[i] = bounds_max[i].max(position[i]);
            }
        }
        if model.positions().is_empty() {
            bounds_min = [0.0; 3];
            bounds_max = [0.0; 3];
        }

        ModelReport {
            name: name.to_string(),
            primitive: match model.primitive() {
                Primitive::Triangles => "triangles",
                Primitive::Lines => "lines",
            },
            vertices: model.positions().len(),
            indices: model.indices_count(),
            bounds_min,
            bounds_max,
            statistics,
        }
    }
}

impl fmt::Display for ModelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} vertices, {} indices ({}), bounds [{:.3}, {:.3}, {:.3}]..[{:.3}, {:.3}, {:.3}]",
            self.name,
            self.vertices,
            self.indices,
            self.primitive,
            self.bounds_min[0], self.bounds_min[1], self.bounds_min[2],
            self.bounds_max[0], self.bounds_max[1], self.bounds_max[2],
        )?;
        if let Some(statistics) = self.statistics {
            write!(f, ", {} lines skipped", statistics.skipped_lines)?;
        }
        Ok(())
    }
}
