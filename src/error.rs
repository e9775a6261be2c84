use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Problem \"{0}\" not found. Run `jsc list` to see available problems.")]
    NotFound(String),

    #[error("\"{prefix}\" matches several problems: {}", candidates.join(", "))]
    Ambiguous {
        prefix: String,
        candidates: Vec<String>,
    },

    #[error("Problem {0} already exists")]
    ProblemExists(String),

    #[error("Playground code already exists at {}. Use --force to overwrite it.", .0.display())]
    PlaygroundExists(PathBuf),

    #[error("Problem {0} has no template file")]
    MissingTemplate(String),

    #[error("Problem {0} has no test file")]
    MissingTestDefinition(String),

    #[error("No playground code for {name}. Run `jsc create {id}` first.")]
    MissingPlayground { name: String, id: String },

    #[error("Invalid structure in {name}: missing {}", missing.join(", "))]
    StructureInvalid { name: String, missing: Vec<String> },

    #[error("Validation failed for: {}", .0.join(", "))]
    ValidationFailed(Vec<String>),

    #[error("Invalid problem name \"{0}\"")]
    InvalidName(String),

    #[error("Failed to parse config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize output: {0}")]
    Json(#[source] serde_json::Error),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to run {program}: {source}")]
    RunnerSpawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Tests did not pass{}", code.map(|c| format!(" (exit code {c})")).unwrap_or_default())]
    TestsFailed { code: Option<i32> },
}

impl Error {
    /// Attach a path to an I/O error, for use with `map_err`.
    pub fn io(path: &Path) -> impl FnOnce(io::Error) -> Error + '_ {
        move |source| Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
