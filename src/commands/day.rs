use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use super::Context;
use crate::render::{day_title, Render};

pub fn run(ctx: &Context, date: NaiveDate) -> Result<()> {
    print_day(ctx, date);
    Ok(())
}

/// Day detail: title, count and every event occurring on `date`.
pub fn print_day(ctx: &Context, date: NaiveDate) {
    let events = ctx.repo.events_on(date);

    println!(
        "{} {}",
        day_title(date).bold(),
        format!("({} évènement(s))", events.len()).dimmed()
    );

    if events.is_empty() {
        println!(
            "{}",
            "Aucun événement. Ajoute un rappel avec `secondbrain add`.".dimmed()
        );
        return;
    }

    for event in events {
        println!();
        println!("{}", event.render());
    }
}
