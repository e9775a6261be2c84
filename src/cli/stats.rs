use crate::display::{banner, check, display_stats_summary, to_pretty_json};
use crate::error::Result;
use crate::models::ProblemFilter;

use super::Context;

const RECOMMENDED: usize = 5;

pub fn show_stats(ctx: &Context, json: bool) -> Result<()> {
    let repository = ctx.repository();
    let stats = repository.stats()?;

    if json {
        println!("{}", to_pretty_json(&stats)?);
        return Ok(());
    }

    banner("jsc - Practice Statistics");
    println!();
    display_stats_summary(&stats);

    let problems = repository.list(&ProblemFilter::default())?;
    if !problems.is_empty() {
        println!();
        println!("Up next:");
        for (i, problem) in problems.iter().take(RECOMMENDED).enumerate() {
            println!(
                "  {}. {} (started: {})",
                i + 1,
                problem.full_name,
                check(problem.has_playground)
            );
        }
    }
    Ok(())
}
