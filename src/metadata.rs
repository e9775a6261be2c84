//! Difficulty, category and description extraction from a problem's README.
//!
//! A front matter block (`---` fenced `key: value` lines at the top of the
//! file) is authoritative. Without it the body is scanned line by line for
//! `Difficulty`/`Category` markers, in English or Chinese; when a marker
//! appears more than once the last one counts.

use crate::models::{Difficulty, DEFAULT_CATEGORY};

#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    pub description: String,
    pub difficulty: Difficulty,
    pub category: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            description: String::new(),
            difficulty: Difficulty::default(),
            category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

const DIFFICULTY_MARKERS: [&str; 2] = ["Difficulty", "难度"];
const CATEGORY_MARKERS: [&str; 2] = ["Category", "分类"];

pub fn parse(content: &str) -> Metadata {
    let (front, body) = split_front_matter(content);

    let mut difficulty = None;
    let mut category = None;

    for line in front.into_iter().flat_map(str::lines) {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
        match key.trim().to_lowercase().as_str() {
            "difficulty" | "难度" => difficulty = value.parse().ok(),
            "category" | "分类" if !value.is_empty() => category = Some(value.to_lowercase()),
            _ => {}
        }
    }

    let description = body
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with('#'))
        .map(|line| line.trim_start_matches('#').trim().to_string())
        .unwrap_or_default();

    // Front matter fields are fixed; otherwise the last marker in the body wins.
    let scan_for_difficulty = difficulty.is_none();
    let scan_for_category = category.is_none();
    for line in body.lines() {
        if scan_for_difficulty && DIFFICULTY_MARKERS.iter().any(|m| line.contains(*m)) {
            if let Some(found) = scan_difficulty(line) {
                difficulty = Some(found);
            }
        }
        if scan_for_category {
            if let Some(found) = scan_category(line) {
                category = Some(found);
            }
        }
    }

    Metadata {
        description,
        difficulty: difficulty.unwrap_or_default(),
        category: category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
    }
}

/// Returns the front matter block, if any, and the remaining body.
fn split_front_matter(content: &str) -> (Option<&str>, &str) {
    let Some(rest) = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
    else {
        return (None, content);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }

    // Unterminated fence: treat the whole file as body.
    (None, content)
}

fn scan_difficulty(line: &str) -> Option<Difficulty> {
    let lower = line.to_lowercase();
    if lower.contains("easy") || line.contains("简单") {
        Some(Difficulty::Easy)
    } else if lower.contains("hard") || line.contains("困难") {
        Some(Difficulty::Hard)
    } else {
        None
    }
}

fn scan_category(line: &str) -> Option<String> {
    for marker in CATEGORY_MARKERS {
        for (idx, _) in line.match_indices(marker) {
            let rest = &line[idx + marker.len()..];
            let Some(rest) = rest.strip_prefix(':').or_else(|| rest.strip_prefix('：')) else {
                continue;
            };
            let word: String = rest
                .trim_start()
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
                .collect();
            if !word.is_empty() {
                return Some(word.to_lowercase());
            }
        }
    }
    None
}
