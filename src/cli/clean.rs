use crate::clean::{self as cleaner, CleanScope};
use crate::error::Result;

use super::Context;

pub fn clean(ctx: &Context, all: bool, cache: bool) -> Result<()> {
    let scope = match (all, cache) {
        (true, _) => CleanScope::All,
        (false, true) => CleanScope::Cache,
        (false, false) => {
            println!("Specify what to clean:");
            println!("  --cache  generated test files");
            println!("  --all    generated test files and playground code");
            return Ok(());
        }
    };

    let removed = cleaner::clean(&ctx.layout, scope)?;
    if removed.is_empty() {
        println!("Nothing to clean");
    }
    for dir in removed {
        println!("Removed {}", dir.display());
    }
    Ok(())
}
