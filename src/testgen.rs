//! Generates the vitest entry module for a problem.
//!
//! The playground solution and the problem's test file are imported as two
//! separate ES modules, so names declared in one can never clash with the
//! other. The test module's registration function receives the solution's
//! default export, or its `solution` binding when there is no default.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::{Error, Result};
use crate::models::Problem;
use crate::paths::{self, Layout, PathOptions};

pub fn synthesize(layout: &Layout, problem: &Problem) -> Result<PathBuf> {
    let paths = &problem.paths;

    if !paths.playground.is_file() {
        return Err(Error::MissingPlayground {
            name: problem.full_name.clone(),
            id: problem.id.clone(),
        });
    }
    if !paths.test.is_file() {
        return Err(Error::MissingTestDefinition(problem.full_name.clone()));
    }

    let code = render_test_module(
        &problem.full_name,
        &import_specifier(&paths.playground, &layout.cache),
        &import_specifier(&paths.test, &layout.cache),
        &Local::now().to_rfc3339(),
    );

    fs::create_dir_all(&layout.cache).map_err(Error::io(&layout.cache))?;
    fs::write(&paths.artifact, code).map_err(Error::io(&paths.artifact))?;

    tracing::debug!(problem = %problem.full_name, path = %paths.artifact.display(), "wrote test module");
    Ok(paths.artifact.clone())
}

/// Relative ES module specifier from `from_dir` to `target`.
fn import_specifier(target: &Path, from_dir: &Path) -> String {
    let relative = paths::display(
        target,
        &PathOptions {
            relative_to: Some(from_dir),
            forward_slashes: true,
        },
    );
    if relative.starts_with("../") || relative.starts_with("./") {
        relative
    } else {
        format!("./{}", relative)
    }
}

fn js_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

fn render_test_module(full_name: &str, solution: &str, tests: &str, generated_at: &str) -> String {
    format!(
        r#"// Generated by jsc for {full_name} at {generated_at}.
// Regenerated on every `jsc test` run; edit the playground file instead.
// solution: {solution}
// tests:    {tests}
import {{ describe, it, expect }} from 'vitest';
import * as solutionModule from {solution_literal};
import * as testModule from {tests_literal};

const solution = solutionModule.default ?? solutionModule.solution;
const registerTests = testModule.default ?? testModule.test;

if (typeof registerTests !== 'function') {{
  throw new Error({missing_tests});
}}

registerTests(describe, it, expect, solution);
"#,
        full_name = full_name,
        generated_at = generated_at,
        solution = solution,
        tests = tests,
        solution_literal = js_string(solution),
        tests_literal = js_string(tests),
        missing_tests = js_string(&format!("{} does not export a test function", tests)),
    )
}
