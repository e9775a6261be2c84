use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};
use crate::models::config::RunnerConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Run,
    Watch,
}

/// Run the external test runner on `artifact`, streaming its output.
pub fn run_tests(runner: &RunnerConfig, artifact: &Path, mode: RunMode) -> Result<()> {
    let args = match mode {
        RunMode::Run => &runner.run_args,
        RunMode::Watch => &runner.watch_args,
    };

    tracing::debug!(program = %runner.program, ?args, artifact = %artifact.display(), "spawning test runner");

    let status = Command::new(&runner.program)
        .args(args)
        .arg(artifact)
        .status()
        .map_err(|source| Error::RunnerSpawn {
            program: runner.program.clone(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::TestsFailed {
            code: status.code(),
        })
    }
}
