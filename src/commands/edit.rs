use anyhow::Result;
use owo_colors::OwoColorize;
use secondbrain_core::{EventDraft, TimeOfDay};

use super::Context;

/// Fields to change. `None` keeps the current value, `Some("")` clears it.
#[derive(Default)]
pub struct EditChanges {
    pub title: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub label: Option<String>,
    pub note: Option<String>,
    pub recur: Option<String>,
}

impl EditChanges {
    /// Apply the changes on top of the current form contents.
    fn apply_to(self, mut draft: EventDraft) -> Result<EventDraft> {
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(start) = self.start {
            draft.start = parse_time(&start)?;
        }
        if let Some(end) = self.end {
            draft.end = parse_time(&end)?;
        }
        if let Some(label) = self.label {
            draft.label = non_blank(label);
        }
        if let Some(note) = self.note {
            draft.note = non_blank(note);
        }
        if let Some(recur) = self.recur {
            draft.recur = recur.parse()?;
        }
        Ok(draft)
    }
}

pub fn run(ctx: &mut Context, id: &str, changes: EditChanges) -> Result<()> {
    let event = ctx.resolve_event(id)?;
    let draft = changes.apply_to(EventDraft::from_event(&event))?;

    if ctx.repo.update(&event.id, draft)? {
        if let Some(updated) = ctx.repo.get(&event.id) {
            println!("{}", format!("  Updated: {}", updated.title).yellow());
        }
    } else {
        println!("{}", "  Nothing changed: the title is empty".dimmed());
    }

    Ok(())
}

fn parse_time(s: &str) -> Result<Option<TimeOfDay>> {
    if s.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(s.parse()?))
    }
}

fn non_blank(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
