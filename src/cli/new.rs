use crate::error::Result;
use crate::models::Difficulty;
use crate::paths::{DESCRIPTION_FILE, TEMPLATE_FILE, TEST_FILE};
use crate::scaffold::{create_new, ScaffoldOptions, ScaffoldTemplate};

use super::Context;

pub fn new_problem(
    ctx: &Context,
    name: &str,
    template: ScaffoldTemplate,
    category: String,
    difficulty: Difficulty,
) -> Result<()> {
    let options = ScaffoldOptions {
        category,
        difficulty,
        template,
    };
    let path = create_new(&ctx.layout, name, &options)?;

    println!("Created problem {}", name);
    println!("Location: {}", path.display());
    println!();
    println!("Fill in:");
    println!("  Description: {}", path.join(DESCRIPTION_FILE).display());
    println!("  Template:    {}", path.join(TEMPLATE_FILE).display());
    println!("  Tests:       {}", path.join(TEST_FILE).display());
    println!();
    println!("Then run `jsc validate {}` and `jsc create {}`", name, name);
    Ok(())
}
