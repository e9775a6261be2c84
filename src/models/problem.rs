use std::cmp::Ordering;

use clap::ValueEnum;
use serde::{Serialize, Serializer};

use super::difficulty::Difficulty;
use crate::paths::ProblemPaths;

pub const DEFAULT_CATEGORY: &str = "general";

#[derive(Debug, Clone, Serialize)]
pub struct Problem {
    pub id: String,
    pub title: String,
    pub full_name: String,
    #[serde(rename = "path", serialize_with = "serialize_dir")]
    pub paths: ProblemPaths,
    pub difficulty: Difficulty,
    pub category: String,
    pub description: String,
    pub has_description: bool,
    pub has_template: bool,
    pub has_test: bool,
    pub has_playground: bool,
}

fn serialize_dir<S: Serializer>(paths: &ProblemPaths, serializer: S) -> Result<S::Ok, S::Error> {
    paths.dir.serialize(serializer)
}

impl Problem {
    pub fn status(&self) -> Status {
        if self.has_playground {
            Status::Created
        } else {
            Status::Pending
        }
    }

    fn numeric_id(&self) -> Option<u64> {
        self.id.parse().ok()
    }

    /// Numeric ids ascending, then everything else by name.
    pub fn listing_order(a: &Problem, b: &Problem) -> Ordering {
        let by_id = match (a.numeric_id(), b.numeric_id()) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_id.then_with(|| a.full_name.cmp(&b.full_name))
    }
}

/// Split a directory name into `(id, title)` at the first `-`.
pub fn split_name(full_name: &str) -> (&str, &str) {
    full_name.split_once('-').unwrap_or((full_name, ""))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Created,
    Pending,
}

impl Status {
    pub fn display_name(&self) -> &'static str {
        match self {
            Status::Created => "created",
            Status::Pending => "not started",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProblemFilter {
    pub category: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub status: Option<Status>,
}

impl ProblemFilter {
    pub fn matches(&self, problem: &Problem) -> bool {
        if let Some(ref category) = self.category {
            let needle = category.to_lowercase();
            if !problem.category.to_lowercase().contains(&needle)
                && !problem.description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        if let Some(difficulty) = self.difficulty {
            if problem.difficulty != difficulty {
                return false;
            }
        }
        if let Some(status) = self.status {
            if problem.status() != status {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::Layout;
    use std::path::Path;

    fn problem(full_name: &str) -> Problem {
        let (id, title) = split_name(full_name);
        let layout = Layout::new(
            Path::new("/repo"),
            Path::new("problems"),
            Path::new("playground"),
            Path::new(".cache"),
        );
        Problem {
            id: id.to_string(),
            title: title.to_string(),
            full_name: full_name.to_string(),
            paths: layout.paths_for(full_name),
            difficulty: Difficulty::Medium,
            category: DEFAULT_CATEGORY.to_string(),
            description: String::new(),
            has_description: true,
            has_template: true,
            has_test: true,
            has_playground: false,
        }
    }

    #[test]
    fn test_split_name() {
        assert_eq!(split_name("1-two-sum"), ("1", "two-sum"));
        assert_eq!(split_name("scratch"), ("scratch", ""));
    }

    #[test]
    fn test_listing_order_puts_non_numeric_last() {
        let mut problems = vec![problem("misc-notes"), problem("10-merge"), problem("2-reverse")];
        problems.sort_by(Problem::listing_order);
        let names: Vec<&str> = problems.iter().map(|p| p.full_name.as_str()).collect();
        assert_eq!(names, vec!["2-reverse", "10-merge", "misc-notes"]);
    }

    #[test]
    fn test_filter_category_matches_description() {
        let mut p = problem("1-two-sum");
        p.description = "Two Sum with a Hash Map".to_string();
        let filter = ProblemFilter {
            category: Some("hash".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&p));

        let filter = ProblemFilter {
            category: Some("graph".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&p));
    }

    #[test]
    fn test_json_includes_problem_path() {
        let value = serde_json::to_value(problem("1-two-sum")).unwrap();
        assert_eq!(value["path"], "/repo/problems/1-two-sum");
        assert_eq!(value["full_name"], "1-two-sum");
        assert!(value.get("paths").is_none());
    }

    #[test]
    fn test_filter_status() {
        let mut p = problem("1-two-sum");
        let created = ProblemFilter {
            status: Some(Status::Created),
            ..Default::default()
        };
        assert!(!created.matches(&p));
        p.has_playground = true;
        assert!(created.matches(&p));
    }
}
