//! Recurrence matching.
//!
//! Decides whether an event occurs on a given date, relative to its anchor
//! date. One periodic rule per event: no end date, no exception dates, no
//! intervals. An anchor on the 31st never matches a shorter month.

use chrono::{Datelike, NaiveDate};

use crate::event::{Event, Recurrence};

/// Whether `event` occurs on `target`.
pub fn occurs(event: &Event, target: NaiveDate) -> bool {
    if event.date == target {
        return true;
    }

    let anchor = event.date;
    match event.recur {
        Recurrence::None => false,
        Recurrence::Weekly => weekday_index(target) == weekday_index(anchor),
        Recurrence::Monthly => target.day() == anchor.day(),
        Recurrence::Yearly => target.day() == anchor.day() && target.month() == anchor.month(),
    }
}

/// Events occurring on `date`, in list order.
pub fn events_on(events: &[Event], date: NaiveDate) -> Vec<&Event> {
    events.iter().filter(|e| occurs(e, date)).collect()
}

/// Weekday with Monday = 0 … Sunday = 6.
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}
