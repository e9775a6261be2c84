use std::path::{Component, Path, PathBuf};

pub const DESCRIPTION_FILE: &str = "README.md";
pub const TEMPLATE_FILE: &str = "template.js";
pub const TEST_FILE: &str = "test.js";

/// Files every problem directory must contain.
pub const REQUIRED_FILES: [&str; 3] = [DESCRIPTION_FILE, TEMPLATE_FILE, TEST_FILE];

#[derive(Debug, Clone, Default)]
pub struct PathOptions<'a> {
    pub relative_to: Option<&'a Path>,
    pub forward_slashes: bool,
}

/// Join `segments` onto `base` and return an absolute, normalized path.
pub fn resolve(base: &Path, segments: &[&str]) -> PathBuf {
    let mut joined = base.to_path_buf();
    for segment in segments {
        joined.push(segment);
    }
    let absolute = std::path::absolute(&joined).unwrap_or(joined);
    normalize(&absolute)
}

/// Render a path for display or for use inside generated code.
pub fn display(path: &Path, options: &PathOptions) -> String {
    let path = match options.relative_to {
        Some(base) => relative_to(path, base),
        None => path.to_path_buf(),
    };
    let rendered = path.to_string_lossy().into_owned();
    if options.forward_slashes {
        rendered.replace(std::path::MAIN_SEPARATOR, "/")
    } else {
        rendered
    }
}

/// Fold `.` and `..` components without touching the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Lexical path from `base` to `path`.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let path = normalize(path);
    let base = normalize(base);

    let mut path_parts = path.components().peekable();
    let mut base_parts = base.components().peekable();
    while let (Some(a), Some(b)) = (path_parts.peek(), base_parts.peek()) {
        if a != b {
            break;
        }
        path_parts.next();
        base_parts.next();
    }

    let mut out = PathBuf::new();
    for _ in base_parts {
        out.push("..");
    }
    for part in path_parts {
        out.push(part.as_os_str());
    }
    out
}

/// Base directories of a workspace.
#[derive(Debug, Clone)]
pub struct Layout {
    pub problems: PathBuf,
    pub playground: PathBuf,
    pub cache: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProblemPaths {
    pub dir: PathBuf,
    pub description: PathBuf,
    pub template: PathBuf,
    pub test: PathBuf,
    pub playground: PathBuf,
    pub artifact: PathBuf,
}

impl Layout {
    pub fn new(root: &Path, problems: &Path, playground: &Path, cache: &Path) -> Self {
        let base = |dir: &Path| resolve(&root.join(dir), &[]);
        Self {
            problems: base(problems),
            playground: base(playground),
            cache: base(cache),
        }
    }

    pub fn problem_dir(&self, full_name: &str) -> PathBuf {
        resolve(&self.problems, &[full_name])
    }

    pub fn paths_for(&self, full_name: &str) -> ProblemPaths {
        ProblemPaths {
            dir: self.problem_dir(full_name),
            description: resolve(&self.problems, &[full_name, DESCRIPTION_FILE]),
            template: resolve(&self.problems, &[full_name, TEMPLATE_FILE]),
            test: resolve(&self.problems, &[full_name, TEST_FILE]),
            playground: resolve(&self.playground, &[&format!("{}.js", full_name)]),
            artifact: resolve(&self.cache, &[&format!("{}.test.js", full_name)]),
        }
    }
}
