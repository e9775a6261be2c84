use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::metadata::{self, Metadata};
use crate::models::{split_name, Problem, ProblemFilter};
use crate::paths::{Layout, REQUIRED_FILES};

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub name: String,
    pub exists: bool,
    pub missing: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.exists && self.missing.is_empty()
    }

    pub fn into_result(self) -> Result<()> {
        if self.is_valid() {
            return Ok(());
        }
        let missing = if self.exists {
            self.missing
        } else {
            vec!["problem directory".to_string()]
        };
        Err(Error::StructureInvalid {
            name: self.name,
            missing,
        })
    }
}

/// Read a README, replacing bytes that are not valid UTF-8.
pub fn read_description(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(Error::io(path))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub struct ProblemRepository {
    layout: Layout,
}

impl ProblemRepository {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    /// Names of all problem directories, sorted by name.
    pub fn names(&self) -> Result<Vec<String>> {
        let dir = &self.layout.problems;
        if !dir.is_dir() {
            tracing::debug!(path = %dir.display(), "problems directory does not exist");
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(dir).map_err(Error::io(dir))? {
            let entry = entry.map_err(Error::io(dir))?;
            if !entry.path().is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        names.sort();
        tracing::debug!(count = names.len(), "enumerated problem directories");
        Ok(names)
    }

    /// Find a problem by full name, exact id, or unique name prefix.
    pub fn resolve(&self, prefix: &str) -> Result<Problem> {
        if prefix.is_empty() {
            return Err(Error::NotFound(prefix.to_string()));
        }

        let names = self.names()?;
        let candidates: Vec<&String> = names.iter().filter(|n| n.starts_with(prefix)).collect();

        let exact_name: Vec<&String> = candidates
            .iter()
            .copied()
            .filter(|n| n.as_str() == prefix)
            .collect();
        let exact_id: Vec<&String> = candidates
            .iter()
            .copied()
            .filter(|n| split_name(n).0 == prefix)
            .collect();

        // Narrow to the most specific non-empty match set.
        let matches = [exact_name, exact_id, candidates]
            .into_iter()
            .find(|set| !set.is_empty())
            .unwrap_or_default();

        let full_name = match matches.as_slice() {
            [] => return Err(Error::NotFound(prefix.to_string())),
            [only] => *only,
            many => {
                return Err(Error::Ambiguous {
                    prefix: prefix.to_string(),
                    candidates: many.iter().map(|n| n.to_string()).collect(),
                })
            }
        };

        tracing::debug!(prefix, full_name = %full_name, "resolved problem");
        self.load(full_name)
    }

    /// Build the full record for a problem directory name.
    pub fn load(&self, full_name: &str) -> Result<Problem> {
        let paths = self.layout.paths_for(full_name);
        let (id, title) = split_name(full_name);

        let has_description = paths.description.is_file();
        let meta = if has_description {
            metadata::parse(&read_description(&paths.description)?)
        } else {
            Metadata::default()
        };

        Ok(Problem {
            id: id.to_string(),
            title: title.to_string(),
            full_name: full_name.to_string(),
            difficulty: meta.difficulty,
            category: meta.category,
            description: meta.description,
            has_description,
            has_template: paths.template.is_file(),
            has_test: paths.test.is_file(),
            has_playground: paths.playground.is_file(),
            paths,
        })
    }

    pub fn list(&self, filter: &ProblemFilter) -> Result<Vec<Problem>> {
        let mut problems = Vec::new();
        for name in self.names()? {
            let problem = self.load(&name)?;
            if filter.matches(&problem) {
                problems.push(problem);
            }
        }
        problems.sort_by(Problem::listing_order);
        Ok(problems)
    }

    pub fn validate_structure(&self, full_name: &str) -> ValidationReport {
        let dir = self.layout.problem_dir(full_name);
        let mut report = ValidationReport {
            name: full_name.to_string(),
            exists: dir.is_dir(),
            missing: Vec::new(),
        };

        if !report.exists {
            tracing::warn!(problem = full_name, "problem directory does not exist");
            return report;
        }

        for file in REQUIRED_FILES {
            if !dir.join(file).is_file() {
                tracing::warn!(problem = full_name, file, "missing required file");
                report.missing.push(file.to_string());
            }
        }
        report
    }
}
