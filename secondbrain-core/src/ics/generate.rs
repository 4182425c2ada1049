//! ICS text generation.

use chrono::NaiveDate;

use crate::constants::{DEFAULT_SUMMARY, PRODUCT_ID, UID_DOMAIN};
use crate::event::TimeOfDay;
use crate::month::Occurrence;

/// Export options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IcsOptions {
    /// Suffix UIDs with the occurrence date so that recurring instances
    /// don't collapse in consumers that de-duplicate by UID.
    pub uid_per_occurrence: bool,
}

/// Generate a VCALENDAR document with one VEVENT per occurrence, in input order.
///
/// Every line ends with CRLF, including the last one.
pub fn to_ics(occurrences: &[Occurrence], options: &IcsOptions) -> String {
    let mut lines: Vec<String> = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", PRODUCT_ID),
    ];

    for occurrence in occurrences {
        push_vevent(&mut lines, occurrence, options);
    }

    lines.push("END:VCALENDAR".to_string());

    let mut output = String::with_capacity(lines.iter().map(|l| l.len() + 2).sum());
    for line in &lines {
        output.push_str(line);
        output.push_str("\r\n");
    }
    output
}

fn push_vevent(lines: &mut Vec<String>, occurrence: &Occurrence, options: &IcsOptions) {
    let event = &occurrence.event;
    let day = format_date(occurrence.date());

    lines.push("BEGIN:VEVENT".to_string());

    if options.uid_per_occurrence {
        lines.push(format!("UID:{}-{}@{}", event.id, day, UID_DOMAIN));
    } else {
        lines.push(format!("UID:{}@{}", event.id, UID_DOMAIN));
    }

    // DTSTAMP is the occurrence date at midnight UTC
    lines.push(format!("DTSTAMP:{}T000000Z", day));

    match (event.start, event.end) {
        (None, None) => {
            lines.push(format!("DTSTART;VALUE=DATE:{}", day));
            lines.push(format!("DTEND;VALUE=DATE:{}", day));
        }
        (start, end) => {
            // A single bound is used for both ends
            let start = start.or(end);
            let end = end.or(start);
            if let (Some(start), Some(end)) = (start, end) {
                lines.push(format!("DTSTART:{}", format_local(occurrence.date(), start)));
                lines.push(format!("DTEND:{}", format_local(occurrence.date(), end)));
            }
        }
    }

    let summary = if event.title.is_empty() {
        DEFAULT_SUMMARY
    } else {
        &event.title
    };
    lines.push(format!("SUMMARY:{}", escape_text(summary)));

    if let Some(ref note) = event.note {
        lines.push(format!("DESCRIPTION:{}", escape_text(note)));
    }

    lines.push("END:VEVENT".to_string());
}

/// Escape a TEXT value: `,` and `;` get a backslash, line breaks become `\n`.
///
/// Backslashes are not escaped, so an existing two-character `\n` stays as is.
pub fn escape_text(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ',' => result.push_str("\\,"),
            ';' => result.push_str("\\;"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                result.push_str("\\n");
            }
            '\n' => result.push_str("\\n"),
            _ => result.push(c),
        }
    }

    result
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Naive local date-time, no `Z` and no TZID
fn format_local(date: NaiveDate, time: TimeOfDay) -> String {
    format!("{}T{}00", format_date(date), time.time().format("%H%M"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Event, EventDraft, Recurrence};
    use crate::ics::export_month;
    use crate::month::{expand, YearMonth};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_test_event(title: &str) -> Event {
        let mut event = Event::new(date(2025, 3, 10), EventDraft::new(title));
        event.id = "evt123".into();
        event
    }

    fn single(event: &Event) -> String {
        to_ics(&[Occurrence::project(event, event.date)], &IcsOptions::default())
    }

    #[test]
    fn test_generate_ics_all_day_event_has_value_date() {
        let ics = single(&make_test_event("Natation"));

        assert!(
            ics.contains("DTSTART;VALUE=DATE:20250310\r\n"),
            "DTSTART should have VALUE=DATE parameter. ICS:\n{}",
            ics
        );
        assert!(
            ics.contains("DTEND;VALUE=DATE:20250310\r\n"),
            "DTEND should have VALUE=DATE parameter. ICS:\n{}",
            ics
        );
        assert!(ics.contains("SUMMARY:Natation\r\n"), "ICS:\n{}", ics);
        assert!(!ics.contains("DESCRIPTION"), "No note, no DESCRIPTION. ICS:\n{}", ics);
    }

    #[test]
    fn test_generate_ics_full_document() {
        let mut event = make_test_event("Appel client");
        event.start = TimeOfDay::new(9, 30);
        event.end = TimeOfDay::new(10, 15);
        event.note = Some("Préparer le devis".to_string());

        let expected = "BEGIN:VCALENDAR\r\n\
            VERSION:2.0\r\n\
            PRODID:-//SecondBrain//Calendar//FR\r\n\
            BEGIN:VEVENT\r\n\
            UID:evt123@secondbrain\r\n\
            DTSTAMP:20250310T000000Z\r\n\
            DTSTART:20250310T093000\r\n\
            DTEND:20250310T101500\r\n\
            SUMMARY:Appel client\r\n\
            DESCRIPTION:Préparer le devis\r\n\
            END:VEVENT\r\n\
            END:VCALENDAR\r\n";

        assert_eq!(single(&event), expected);
    }

    #[test]
    fn test_generate_ics_empty_list() {
        let ics = to_ics(&[], &IcsOptions::default());
        assert_eq!(
            ics,
            "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//SecondBrain//Calendar//FR\r\nEND:VCALENDAR\r\n"
        );
    }

    #[test]
    fn test_generate_ics_single_bound_is_used_for_both() {
        let mut event = make_test_event("Départ");
        event.start = TimeOfDay::new(7, 0);
        let ics = single(&event);
        assert!(ics.contains("DTSTART:20250310T070000\r\n"), "ICS:\n{}", ics);
        assert!(ics.contains("DTEND:20250310T070000\r\n"), "ICS:\n{}", ics);

        let mut event = make_test_event("Arrivée");
        event.end = TimeOfDay::new(18, 45);
        let ics = single(&event);
        assert!(ics.contains("DTSTART:20250310T184500\r\n"), "ICS:\n{}", ics);
        assert!(ics.contains("DTEND:20250310T184500\r\n"), "ICS:\n{}", ics);
    }

    #[test]
    fn test_generate_ics_empty_title_uses_placeholder() {
        let ics = single(&make_test_event(""));
        assert!(ics.contains("SUMMARY:Événement\r\n"), "ICS:\n{}", ics);
    }

    #[test]
    fn test_escape_description() {
        let mut event = make_test_event("Courses");
        event.note = Some("a, b; c".to_string());
        let ics = single(&event);
        assert!(ics.contains("DESCRIPTION:a\\, b\\; c\r\n"), "ICS:\n{}", ics);
    }

    #[test]
    fn test_escape_text_newlines() {
        assert_eq!(escape_text("l1\nl2"), "l1\\nl2");
        assert_eq!(escape_text("l1\r\nl2\rl3"), "l1\\nl2\\nl3");
        assert_eq!(escape_text("déjà\\n"), "déjà\\n");
        assert_eq!(escape_text("x;y,z"), "x\\;y\\,z");
    }

    #[test]
    fn test_weekly_export_shares_uid() {
        let mut draft = EventDraft::new("Natation");
        draft.recur = Recurrence::Weekly;
        let mut event = Event::new(date(2025, 3, 10), draft);
        event.id = "swim".into();

        let march = YearMonth::new(2025, 3).unwrap();
        let ics = to_ics(&expand(&[event], march), &IcsOptions::default());

        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 5, "ICS:\n{}", ics);
        assert_eq!(ics.matches("UID:swim@secondbrain\r\n").count(), 5, "ICS:\n{}", ics);
        for day in ["03", "10", "17", "24", "31"] {
            assert!(ics.contains(&format!("DTSTAMP:202503{}T000000Z", day)), "ICS:\n{}", ics);
            assert!(ics.contains(&format!("DTSTART;VALUE=DATE:202503{}", day)), "ICS:\n{}", ics);
        }
    }

    #[test]
    fn test_uid_per_occurrence_option() {
        let mut draft = EventDraft::new("Natation");
        draft.recur = Recurrence::Weekly;
        let mut event = Event::new(date(2025, 3, 10), draft);
        event.id = "swim".into();

        let options = IcsOptions {
            uid_per_occurrence: true,
        };
        let export = export_month(&[event], YearMonth::new(2025, 3).unwrap(), &options);

        assert!(export.content.contains("UID:swim-20250303@secondbrain\r\n"));
        assert!(export.content.contains("UID:swim-20250331@secondbrain\r\n"));
        assert_eq!(export.file_name, "calendar-2025-03.ics");
        assert_eq!(export.mime_type, "text/calendar");
    }

    #[test]
    fn test_export_parses_as_icalendar() {
        let mut event = make_test_event("Réunion, équipe");
        event.start = TimeOfDay::new(14, 0);
        event.end = TimeOfDay::new(15, 0);
        event.note = Some("ordre du jour;\npoint 2".to_string());
        let ics = single(&event);

        let unfolded = icalendar::parser::unfold(&ics);
        let calendar = icalendar::parser::read_calendar(&unfolded).expect("valid ICS");
        let vevent = calendar
            .components
            .iter()
            .find(|c| c.name == "VEVENT")
            .expect("Should have a VEVENT");

        assert_eq!(
            vevent.find_prop("UID").map(|p| p.val.to_string()),
            Some("evt123@secondbrain".to_string())
        );
        assert_eq!(
            vevent.find_prop("DTSTART").map(|p| p.val.to_string()),
            Some("20250310T140000".to_string())
        );
    }
}
