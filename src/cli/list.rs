use crate::display::{display_problem_line, display_stats_summary, to_pretty_json};
use crate::error::Result;
use crate::models::{Difficulty, ProblemFilter, Status};

use super::Context;

pub fn list_problems(
    ctx: &Context,
    category: Option<String>,
    difficulty: Option<Difficulty>,
    status: Option<Status>,
    json: bool,
) -> Result<()> {
    let repository = ctx.repository();
    let filter = ProblemFilter {
        category,
        difficulty,
        status,
    };
    let problems = repository.list(&filter)?;

    if json {
        println!("{}", to_pretty_json(&problems)?);
        return Ok(());
    }

    display_stats_summary(&repository.stats()?);
    println!();

    if problems.is_empty() {
        println!("No matching problems found.");
        return Ok(());
    }

    println!("Problems ({}):", problems.len());
    println!();
    for (i, problem) in problems.iter().enumerate() {
        display_problem_line(i + 1, problem);
    }

    println!();
    println!("Run `jsc create <id>` to start a problem");
    println!("Run `jsc info <id>` for details");
    println!("Run `jsc test <id>` to test your solution");
    Ok(())
}
