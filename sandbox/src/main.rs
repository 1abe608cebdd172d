mod report;

use anyhow::{Context, Result};
use library::models::debug_cube::DebugCube;
use library::models::descriptors::{ModelDescriptor, DIRECTION_ARROW_NAME};
use library::models::upload_model::UploadModel;
use library::{get_reasonable_log_filter, LoadOptions, MeshLoader, ResourceSet};
use log::info;
use std::env;
use std::path::PathBuf;

use crate::report::{ModelReport, Report};

const DEFAULT_RESOURCES_FOLDER: &str = "assets";
const STRICT_FLAG: &str = "--strict";
const JSON_FLAG: &str = "--json";

struct Arguments {
    resources: PathBuf,
    meshes: Vec<String>,
    strict: bool,
    json: bool,
}

impl Arguments {
    #[must_use]
    fn parse(raw: impl Iterator<Item = String>) -> Self {
        let mut strict = false;
        let mut json = false;
        let mut positional = Vec::new();
        for argument in raw {
            match argument.as_str() {
                STRICT_FLAG => strict = true,
                JSON_FLAG => json = true,
                _ => positional.push(argument),
            }
        }

        let mut positional = positional.into_iter();
        let resources = positional.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_RESOURCES_FOLDER));
        let mut meshes: Vec<String> = positional.collect();
        if meshes.is_empty() {
            meshes.push(DIRECTION_ARROW_NAME.to_string());
        }

        Arguments { resources, meshes, strict, json }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(format!("info,{}", get_reasonable_log_filter()))).init();

    match env::current_dir() {
        Ok(path) => info!("current directory: {}", path.display()),
        Err(e) => info!("error getting current directory: {}", e),
    }

    let arguments = Arguments::parse(env::args().skip(1));
    let options = if arguments.strict { LoadOptions::strict() } else { LoadOptions::default() };
    let loader = MeshLoader::new(options);
    let resources = ResourceSet::new(&arguments.resources);

    let mut report = Report::default();
    for name in &arguments.meshes {
        let descriptor = ModelDescriptor::preset(name);
        let (model, statistics) = UploadModel::load_with_statistics(&descriptor, &resources, &loader)
            .with_context(|| format!("loading mesh '{}'", name))?;

        report.models.push(ModelReport::new(model.name(), statistics, &model));
    }
    report.models.push(ModelReport::of_debug_cube(&DebugCube::new()));

    if arguments.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for model in &report.models {
            println!("{}", model);
        }
    }

    Ok(())
}
