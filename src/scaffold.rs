use std::fs;
use std::path::{Component, Path, PathBuf};

use clap::ValueEnum;

use crate::error::{Error, Result};
use crate::models::Difficulty;
use crate::paths::{Layout, DESCRIPTION_FILE, TEMPLATE_FILE, TEST_FILE};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ScaffoldTemplate {
    #[default]
    Basic,
}

#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    pub category: String,
    pub difficulty: Difficulty,
    pub template: ScaffoldTemplate,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            category: crate::models::DEFAULT_CATEGORY.to_string(),
            difficulty: Difficulty::default(),
            template: ScaffoldTemplate::default(),
        }
    }
}

/// Create `problems/<name>/` with a README, template and test stub.
pub fn create_new(layout: &Layout, name: &str, options: &ScaffoldOptions) -> Result<PathBuf> {
    let mut components = Path::new(name).components();
    let single_component = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !single_component {
        return Err(Error::InvalidName(name.to_string()));
    }

    let problem_dir = layout.problem_dir(name);
    if problem_dir.exists() {
        return Err(Error::ProblemExists(name.to_string()));
    }

    fs::create_dir_all(&problem_dir).map_err(Error::io(&problem_dir))?;

    let files = [
        (DESCRIPTION_FILE, readme_content(name, options)),
        (TEMPLATE_FILE, template_content(name, options.template)),
        (TEST_FILE, test_content(name, options.template)),
    ];
    for (file, content) in files {
        let path = problem_dir.join(file);
        fs::write(&path, content).map_err(Error::io(&path))?;
    }

    tracing::debug!(path = %problem_dir.display(), "scaffolded problem");
    Ok(problem_dir)
}

fn readme_content(name: &str, options: &ScaffoldOptions) -> String {
    format!(
        r#"---
category: {category}
difficulty: {difficulty}
---
# {name}

> Category: {category} | Difficulty: {difficulty}

## Description

Describe the problem here...

## Example

```javascript
// Example input
const input = [];

// Example output
const output = [];
```

## Requirements

- Time complexity: O(?)
- Space complexity: O(?)

## Hints

Add hints here...
"#,
        name = name,
        category = options.category,
        difficulty = options.difficulty,
    )
}

fn template_content(name: &str, template: ScaffoldTemplate) -> String {
    match template {
        ScaffoldTemplate::Basic => format!(
            r#"/**
 * {name}
 * @param {{any}} input - input value
 * @returns {{any}} - result
 */
function solution(input) {{
    // Implement your solution here

}}

export default solution;
"#,
            name = name
        ),
    }
}

fn test_content(name: &str, template: ScaffoldTemplate) -> String {
    let name = name.replace('\\', "\\\\").replace('\'', "\\'");
    match template {
        ScaffoldTemplate::Basic => format!(
            r#"/**
 * Test cases, registered with vitest
 */
export default function test(describe, it, expect, code) {{
    describe('{name}', () => {{
        it('handles the basic case', () => {{
            const input = null; // replace with a real input
            const expected = null; // replace with the expected output
            expect(code(input)).toEqual(expected);
        }});

        it('handles boundary cases', () => {{
            // add boundary tests
        }});

        it('handles exceptional cases', () => {{
            // add error-handling tests
        }});
    }});
}}
"#,
            name = name
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::TestRepo;

    #[test]
    fn test_new_problem_validates() {
        let repo = TestRepo::new();
        let options = ScaffoldOptions::default();

        let path = create_new(repo.layout(), "5-debounce", &options).unwrap();
        assert_eq!(path, repo.layout().problems.join("5-debounce"));
        assert!(repo.repository().validate_structure("5-debounce").is_valid());
    }

    #[test]
    fn test_new_problem_metadata_round_trips() {
        let repo = TestRepo::new();
        let options = ScaffoldOptions {
            category: "async".to_string(),
            difficulty: Difficulty::Hard,
            ..Default::default()
        };
        create_new(repo.layout(), "7-promise-all", &options).unwrap();

        let problem = repo.repository().resolve("7").unwrap();
        assert_eq!(problem.description, "7-promise-all");
        assert_eq!(problem.category, "async");
        assert_eq!(problem.difficulty, Difficulty::Hard);
        assert!(!problem.has_playground);
    }

    #[test]
    fn test_new_problem_creates_problems_dir() {
        let repo = TestRepo::empty();
        create_new(repo.layout(), "1-two-sum", &ScaffoldOptions::default()).unwrap();
        assert!(repo.layout().problems.join("1-two-sum").join("test.js").is_file());
    }

    #[test]
    fn test_existing_name_is_rejected() {
        let repo = TestRepo::new();
        repo.add_problem("1-two-sum", "# Two Sum\n");

        let err = create_new(repo.layout(), "1-two-sum", &ScaffoldOptions::default()).unwrap_err();
        assert!(matches!(err, Error::ProblemExists(name) if name == "1-two-sum"));
    }

    #[test]
    fn test_path_like_names_are_rejected() {
        let repo = TestRepo::new();
        for name in ["", "..", "a/b", "/abs"] {
            let err = create_new(repo.layout(), name, &ScaffoldOptions::default()).unwrap_err();
            assert!(matches!(err, Error::InvalidName(_)), "{name:?}");
        }
    }

    #[test]
    fn test_content_is_deterministic() {
        let options = ScaffoldOptions::default();
        assert_eq!(readme_content("x", &options), readme_content("x", &options));

        let template = template_content("3-flatten", ScaffoldTemplate::Basic);
        assert!(template.contains("function solution(input)"));
        assert!(template.contains("export default solution;"));

        let test = test_content("3-flatten", ScaffoldTemplate::Basic);
        assert!(test.contains("export default function test(describe, it, expect, code)"));
        assert_eq!(test.matches("it('").count(), 3);
    }
}
