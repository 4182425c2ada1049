use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use secondbrain_core::label::Label;
use secondbrain_core::EventDraft;

use super::Context;

/// Raw add-form contents. Blank strings mean absent.
pub struct AddForm {
    pub date: NaiveDate,
    pub title: String,
    pub start: String,
    pub end: String,
    pub label: String,
    pub note: String,
    pub recur: String,
}

pub fn run(ctx: &mut Context, form: AddForm) -> Result<()> {
    let draft = EventDraft::from_form(
        &form.title,
        &form.start,
        &form.end,
        &form.label,
        &form.note,
        &form.recur,
    )?;

    if let Some(ref label) = draft.label {
        if Label::find(label).is_none() {
            eprintln!(
                "  {}",
                format!("Unknown label '{}', it will be shown without color", label).yellow()
            );
        }
    }

    match ctx.repo.add(form.date, draft)? {
        Some(event) => {
            println!("{}", format!("  Created: {}", event.title).green());
            println!("  {}", format!("id: {}", event.id).dimmed());
        }
        None => println!("{}", "  Nothing added: the title is empty".dimmed()),
    }

    Ok(())
}
