use crate::error::Result;
use crate::playground;

use super::Context;

pub fn create_playground(ctx: &Context, id: &str, force: bool) -> Result<()> {
    let problem = ctx.repository().resolve(id)?;
    let path = playground::create(&ctx.layout, &problem, force)?;

    println!("Created playground code for {}", problem.full_name);
    println!("File: {}", path.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit {}", path.display());
    println!("  2. jsc test {}", id);
    println!("  3. jsc test {} --watch", id);
    Ok(())
}
