use serde::Serialize;

use crate::error::{Error, Result};
use crate::models::{Difficulty, Problem};
use crate::stats::StatsSnapshot;

pub fn banner(title: &str) {
    println!("{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}", "=".repeat(60));
}

pub fn rule() {
    println!("{}", "-".repeat(60));
}

pub fn difficulty_marker(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "[E]",
        Difficulty::Medium => "[M]",
        Difficulty::Hard => "[H]",
    }
}

pub fn check(present: bool) -> &'static str {
    if present {
        "yes"
    } else {
        "no"
    }
}

pub fn display_stats_summary(stats: &StatsSnapshot) {
    println!("Total:     {}", stats.total);
    println!("Created:   {}", stats.created);
    println!("Remaining: {}", stats.remaining);
    println!("Progress:  {}%", stats.progress);
    println!(
        "By difficulty: easy {} | medium {} | hard {}",
        stats.count(Difficulty::Easy),
        stats.count(Difficulty::Medium),
        stats.count(Difficulty::Hard)
    );
}

pub fn display_problem_line(index: usize, problem: &Problem) {
    println!(
        "{:>3}. {} {} ({})",
        index,
        difficulty_marker(problem.difficulty),
        problem.full_name,
        problem.status().display_name()
    );
    if !problem.description.is_empty() {
        println!("     {}", problem.description);
    }
}

pub fn display_problem(problem: &Problem, readme: Option<&str>) {
    banner(&format!("Problem {}", problem.full_name));
    println!();
    println!("Name:       {}", problem.full_name);
    println!("Path:       {}", problem.paths.dir.display());
    println!("Category:   {}", problem.category);
    println!("Difficulty: {}", problem.difficulty.display_name());
    println!("Template:   {}", check(problem.has_template));
    println!("Tests:      {}", check(problem.has_test));
    println!("Playground: {}", problem.status().display_name());
    if problem.has_playground {
        println!("Playground file: {}", problem.paths.playground.display());
    }

    if let Some(readme) = readme {
        println!();
        rule();
        println!("{}", readme.trim_end());
        rule();
    }

    println!();
    if problem.has_playground {
        println!("Run `jsc test {}` to check your solution", problem.id);
        println!("Run `jsc test {} --watch` to re-run on every change", problem.id);
    } else {
        println!("Run `jsc create {}` to start practicing", problem.id);
    }
}

/// Render `value` as indented JSON for `--json` output.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(Error::Json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_to_pretty_json() {
        let value = serde_json::json!({ "total": 2 });
        assert_eq!(to_pretty_json(&value).unwrap(), "{\n  \"total\": 2\n}");
    }

    #[test]
    fn test_to_pretty_json_reports_failure() {
        let mut map = BTreeMap::new();
        map.insert((1u8, 2u8), 3u8);
        assert!(matches!(to_pretty_json(&map), Err(Error::Json(_))));
    }
}
