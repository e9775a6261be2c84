use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::paths::Layout;

pub const PROJECT_CONFIG_FILE: &str = "jsc.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub problems_dir: PathBuf,
    pub playground_dir: PathBuf,
    pub cache_dir: PathBuf,
    pub runner: RunnerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            problems_dir: PathBuf::from("problems"),
            playground_dir: PathBuf::from("playground"),
            cache_dir: PathBuf::from(".cache"),
            runner: RunnerConfig::default(),
        }
    }
}

impl Config {
    pub fn layout(&self, root: &Path) -> Layout {
        Layout::new(root, &self.problems_dir, &self.playground_dir, &self.cache_dir)
    }
}

/// External test runner, invoked as `<program> <args...> <artifact>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub program: String,
    pub run_args: Vec<String>,
    pub watch_args: Vec<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            program: "npx".to_string(),
            run_args: vec!["vitest".to_string(), "run".to_string()],
            watch_args: vec!["vitest".to_string(), "watch".to_string()],
        }
    }
}

pub fn get_global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("jsc").join("config.json"))
}

/// Project-local `jsc.json` wins over the global config; defaults otherwise.
pub fn load_config(root: &Path) -> Result<Config> {
    let local = root.join(PROJECT_CONFIG_FILE);
    let candidates = std::iter::once(local).chain(get_global_config_path());

    for path in candidates {
        if !path.exists() {
            continue;
        }
        tracing::debug!(path = %path.display(), "loading config");
        return read_config(&path);
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path).map_err(Error::io(path))?;
    serde_json::from_str(&contents).map_err(|source| Error::Config {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(PROJECT_CONFIG_FILE),
            r#"{ "problems_dir": "questions", "runner": { "program": "node" } }"#,
        )
        .unwrap();

        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.problems_dir, PathBuf::from("questions"));
        assert_eq!(config.playground_dir, PathBuf::from("playground"));
        assert_eq!(config.runner.program, "node");
        assert_eq!(config.runner.run_args, vec!["vitest", "run"]);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(PROJECT_CONFIG_FILE), "{ not json").unwrap();

        let err = load_config(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_layout_is_rooted() {
        let config = Config::default();
        let layout = config.layout(Path::new("/repo"));
        assert_eq!(layout.problems, PathBuf::from("/repo/problems"));
        assert_eq!(layout.cache, PathBuf::from("/repo/.cache"));
    }
}
