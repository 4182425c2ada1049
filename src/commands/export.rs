use std::path::PathBuf;

use anyhow::{Context as _, Result};
use owo_colors::OwoColorize;
use secondbrain_core::ics::export_month;
use secondbrain_core::YearMonth;

use super::Context;

/// Write the month's occurrences to `calendar-{year}-{MM}.ics`.
pub fn run(ctx: &Context, month: YearMonth, output: Option<PathBuf>) -> Result<()> {
    let path = write_export(ctx, month, output)?;
    println!("{}", format!("  Exported: {}", path.display()).green());
    Ok(())
}

fn write_export(ctx: &Context, month: YearMonth, output: Option<PathBuf>) -> Result<PathBuf> {
    let dir = output.unwrap_or_else(|| ctx.config.export_dir());
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create {}", dir.display()))?;

    let export = export_month(ctx.repo.events(), month, &ctx.config.ics_options());
    let path = dir.join(&export.file_name);
    std::fs::write(&path, &export.content)
        .with_context(|| format!("Could not write {}", path.display()))?;

    log::info!("Wrote {} bytes to {}", export.content.len(), path.display());
    Ok(path)
}
