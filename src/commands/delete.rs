use anyhow::Result;
use owo_colors::OwoColorize;

use super::Context;

pub fn run(ctx: &mut Context, id: &str) -> Result<()> {
    let event = ctx.resolve_event(id)?;

    if ctx.repo.delete(&event.id)? {
        println!("{}", format!("  Deleted: {}", event.display_title()).red());
    }

    Ok(())
}
