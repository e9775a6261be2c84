use crate::error::{Error, Result};
use crate::models::ProblemFilter;
use crate::repository::ValidationReport;

use super::Context;

pub fn validate(ctx: &Context, id: Option<&str>) -> Result<()> {
    let repository = ctx.repository();

    if let Some(id) = id {
        let problem = repository.resolve(id)?;
        let report = repository.validate_structure(&problem.full_name);
        print_report(&report);
        return report.into_result();
    }

    let mut failed = Vec::new();
    for problem in repository.list(&ProblemFilter::default())? {
        let report = repository.validate_structure(&problem.full_name);
        print_report(&report);
        if !report.is_valid() {
            failed.push(report.name);
        }
    }

    println!();
    if failed.is_empty() {
        println!("All problems are valid");
        Ok(())
    } else {
        Err(Error::ValidationFailed(failed))
    }
}

fn print_report(report: &ValidationReport) {
    if report.is_valid() {
        println!("ok      {}", report.name);
    } else if !report.exists {
        println!("FAILED  {} (directory not found)", report.name);
    } else {
        println!("FAILED  {} (missing {})", report.name, report.missing.join(", "));
    }
}
