use crate::display::display_problem;
use crate::error::Result;
use crate::repository::read_description;

use super::Context;

pub fn show_info(ctx: &Context, id: &str) -> Result<()> {
    let problem = ctx.repository().resolve(id)?;

    let readme = if problem.has_description {
        Some(read_description(&problem.paths.description)?)
    } else {
        None
    };

    display_problem(&problem, readme.as_deref());
    Ok(())
}
