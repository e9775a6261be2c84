use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::models::Problem;
use crate::paths::Layout;

/// Copy the problem's template into the playground.
///
/// An existing copy is only replaced when `force` is set.
pub fn create(layout: &Layout, problem: &Problem, force: bool) -> Result<PathBuf> {
    let paths = &problem.paths;

    if !paths.template.is_file() {
        return Err(Error::MissingTemplate(problem.full_name.clone()));
    }
    if !force && paths.playground.exists() {
        return Err(Error::PlaygroundExists(paths.playground.clone()));
    }

    fs::create_dir_all(&layout.playground).map_err(Error::io(&layout.playground))?;

    let template = fs::read_to_string(&paths.template).map_err(Error::io(&paths.template))?;
    fs::write(&paths.playground, template).map_err(Error::io(&paths.playground))?;

    tracing::debug!(problem = %problem.full_name, path = %paths.playground.display(), force, "wrote playground code");
    Ok(paths.playground.clone())
}
