use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::paths::Layout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanScope {
    /// Generated test modules only.
    Cache,
    /// Generated test modules and every playground copy.
    All,
}

/// Remove generated directories, returning the ones that existed.
pub fn clean(layout: &Layout, scope: CleanScope) -> Result<Vec<PathBuf>> {
    let targets = match scope {
        CleanScope::Cache => vec![&layout.cache],
        CleanScope::All => vec![&layout.cache, &layout.playground],
    };

    let mut removed = Vec::new();
    for dir in targets {
        if !dir.exists() {
            continue;
        }
        fs::remove_dir_all(dir).map_err(Error::io(dir))?;
        tracing::debug!(path = %dir.display(), "removed");
        removed.push(dir.clone());
    }
    Ok(removed)
}
