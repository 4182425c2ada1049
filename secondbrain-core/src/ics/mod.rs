//! ICS export.
//!
//! Serializes projected occurrences into a minimal iCalendar document.

mod generate;

pub use generate::{escape_text, to_ics, IcsOptions};

use serde::Serialize;

use crate::constants::ICS_MIME_TYPE;
use crate::event::Event;
use crate::month::{expand, YearMonth};

/// An exported calendar file, ready to be written or downloaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IcsExport {
    pub file_name: String,
    pub mime_type: &'static str,
    pub content: String,
}

/// File name of a month export: `calendar-{year}-{MM}.ics`
pub fn export_file_name(month: YearMonth) -> String {
    format!("calendar-{}-{:02}.ics", month.year(), month.month())
}

/// Expand `events` over `month` and serialize the result.
pub fn export_month(events: &[Event], month: YearMonth, options: &IcsOptions) -> IcsExport {
    let occurrences = expand(events, month);
    log::debug!(
        "Exporting {} occurrences for {} ({} events)",
        occurrences.len(),
        month,
        events.len()
    );

    IcsExport {
        file_name: export_file_name(month),
        mime_type: ICS_MIME_TYPE,
        content: to_ics(&occurrences, options),
    }
}
