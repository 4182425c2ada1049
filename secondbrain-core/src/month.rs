//! Month expansion and the month grid.
//!
//! Projects events onto the concrete days of one month. The output of
//! [`expand`] feeds both the per-day counts of the grid and the ICS export.

use std::fmt;

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use crate::constants::MAX_PREVIEW_DOTS;
use crate::error::{CoreError, CoreResult};
use crate::event::Event;
use crate::label::Label;
use crate::recurrence::{occurs, weekday_index};

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    /// `month` is 1..=12.
    pub fn new(year: i32, month: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| YearMonth { first })
            .ok_or_else(|| CoreError::InvalidDate(format!("{}-{:02}", year, month)))
    }

    pub fn from_date(date: NaiveDate) -> Self {
        YearMonth {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn days_in_month(&self) -> u32 {
        match self.first.checked_add_months(Months::new(1)) {
            Some(next) => (next - self.first).num_days() as u32,
            None => 31,
        }
    }

    /// Number of empty grid cells before the 1st (Monday = 0).
    pub fn leading_blanks(&self) -> u32 {
        weekday_index(self.first)
    }

    /// Date of day `day` (1-based) in this month.
    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        self.first.with_day(day)
    }

    /// All days of the month, ascending.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.first.iter_days().take(self.days_in_month() as usize)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    pub fn prev(&self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| YearMonth { first })
            .unwrap_or(*self)
    }

    pub fn next(&self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| YearMonth { first })
            .unwrap_or(*self)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{:02}", self.year(), self.month())
    }
}

/// An event projected onto one concrete date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    /// Copy of the event with `date` set to the occurrence date
    pub event: Event,
    /// The event's original anchor date
    pub anchor: NaiveDate,
}

impl Occurrence {
    pub fn project(event: &Event, date: NaiveDate) -> Self {
        let mut projected = event.clone();
        projected.date = date;
        Occurrence {
            event: projected,
            anchor: event.date,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.event.date
    }
}

/// Expand `events` over every day of `month`.
///
/// Output is grouped by day in ascending order and keeps list order
/// within a day.
pub fn expand(events: &[Event], month: YearMonth) -> Vec<Occurrence> {
    month
        .days()
        .flat_map(|day| {
            events
                .iter()
                .filter(move |e| occurs(e, day))
                .map(move |e| Occurrence::project(e, day))
        })
        .collect()
}

/// Keep `selected` if it is in `month`, otherwise select the 1st.
pub fn clamp_selection(selected: NaiveDate, month: YearMonth) -> NaiveDate {
    if month.contains(selected) {
        selected
    } else {
        month.first_day()
    }
}

/// One day of the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub count: usize,
    /// Label colors of the first occurring events
    pub dots: Vec<&'static str>,
}

/// Month grid: leading blanks followed by one cell per day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: YearMonth,
    pub leading_blanks: u32,
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    pub fn build(events: &[Event], month: YearMonth) -> Self {
        let cells = month
            .days()
            .map(|date| {
                let occurring: Vec<&Event> = events.iter().filter(|e| occurs(e, date)).collect();
                let dots = occurring
                    .iter()
                    .take(MAX_PREVIEW_DOTS)
                    .map(|e| Label::dot_for(e.label.as_deref()))
                    .collect();
                DayCell {
                    date,
                    count: occurring.len(),
                    dots,
                }
            })
            .collect();

        MonthGrid {
            month,
            leading_blanks: month.leading_blanks(),
            cells,
        }
    }

    /// Rows of seven optional cells, Monday first.
    pub fn weeks(&self) -> Vec<Vec<Option<&DayCell>>> {
        let slots: Vec<Option<&DayCell>> = (0..self.leading_blanks)
            .map(|_| None)
            .chain(self.cells.iter().map(Some))
            .collect();

        slots
            .chunks(7)
            .map(|week| {
                let mut week = week.to_vec();
                week.resize(7, None);
                week
            })
            .collect()
    }

    pub fn total(&self) -> usize {
        self.cells.iter().map(|c| c.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventDraft, Recurrence};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(anchor: NaiveDate, title: &str, recur: Recurrence) -> Event {
        let mut draft = EventDraft::new(title);
        draft.recur = recur;
        Event::new(anchor, draft)
    }

    #[test]
    fn test_year_month_basics() {
        let feb_leap = YearMonth::new(2024, 2).unwrap();
        assert_eq!(feb_leap.days_in_month(), 29);
        assert_eq!(YearMonth::new(2025, 2).unwrap().days_in_month(), 28);
        assert_eq!(YearMonth::new(2025, 4).unwrap().days_in_month(), 30);
        assert_eq!(YearMonth::new(2025, 12).unwrap().days_in_month(), 31);
        assert!(YearMonth::new(2025, 13).is_err());
        assert!(YearMonth::new(2025, 0).is_err());

        // 2025-09-01 is a Monday, 2025-06-01 a Sunday
        assert_eq!(YearMonth::new(2025, 9).unwrap().leading_blanks(), 0);
        assert_eq!(YearMonth::new(2025, 6).unwrap().leading_blanks(), 6);
    }

    #[test]
    fn test_navigation_wraps_years() {
        let jan = YearMonth::new(2025, 1).unwrap();
        assert_eq!(jan.prev(), YearMonth::new(2024, 12).unwrap());
        let dec = YearMonth::new(2025, 12).unwrap();
        assert_eq!(dec.next(), YearMonth::new(2026, 1).unwrap());
        assert_eq!(dec.to_string(), "2025-12");
    }

    #[test]
    fn test_expand_empty_month() {
        let april = YearMonth::new(2025, 4).unwrap();
        assert!(expand(&[], april).is_empty());
    }

    #[test]
    fn test_expand_single_event() {
        let april = YearMonth::new(2025, 4).unwrap();
        let events = vec![event(date(2025, 4, 17), "Dentiste", Recurrence::None)];

        let occurrences = expand(&events, april);
        assert_eq!(occurrences.len(), 1);
        assert_eq!(occurrences[0].date(), date(2025, 4, 17));
        assert_eq!(occurrences[0].event.title, "Dentiste");
    }

    #[test]
    fn test_expand_event_outside_month() {
        let april = YearMonth::new(2025, 4).unwrap();
        let events = vec![event(date(2025, 5, 17), "Plus tard", Recurrence::None)];
        assert!(expand(&events, april).is_empty());
    }

    #[test]
    fn test_expand_weekly_projects_each_monday() {
        let march = YearMonth::new(2025, 3).unwrap();
        let events = vec![event(date(2025, 3, 10), "Natation", Recurrence::Weekly)];

        let occurrences = expand(&events, march);
        let dates: Vec<NaiveDate> = occurrences.iter().map(|o| o.date()).collect();
        assert_eq!(
            dates,
            vec![
                date(2025, 3, 3),
                date(2025, 3, 10),
                date(2025, 3, 17),
                date(2025, 3, 24),
                date(2025, 3, 31)
            ]
        );
        assert!(occurrences.iter().all(|o| o.anchor == date(2025, 3, 10)));
        assert!(occurrences.iter().all(|o| o.event.id == events[0].id));
    }

    #[test]
    fn test_expand_orders_by_day_then_list() {
        let march = YearMonth::new(2025, 3).unwrap();
        let events = vec![
            event(date(2025, 3, 20), "B", Recurrence::None),
            event(date(2025, 3, 5), "A", Recurrence::None),
            event(date(2025, 2, 20), "C", Recurrence::Monthly),
        ];

        let titles: Vec<String> = expand(&events, march)
            .into_iter()
            .map(|o| o.event.title)
            .collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_clamp_selection() {
        let march = YearMonth::new(2025, 3).unwrap();
        assert_eq!(clamp_selection(date(2025, 3, 14), march), date(2025, 3, 14));
        assert_eq!(clamp_selection(date(2025, 4, 14), march), date(2025, 3, 1));
    }

    #[test]
    fn test_grid_counts_and_dots() {
        let march = YearMonth::new(2025, 3).unwrap();
        let mut labeled = EventDraft::new("Sport");
        labeled.label = Some("sport".to_string());
        let events = vec![
            Event::new(date(2025, 3, 10), labeled),
            event(date(2025, 3, 10), "b", Recurrence::None),
            event(date(2025, 3, 10), "c", Recurrence::None),
            event(date(2025, 3, 10), "d", Recurrence::None),
            event(date(2025, 3, 3), "hebdo", Recurrence::Weekly),
        ];

        let grid = MonthGrid::build(&events, march);
        assert_eq!(grid.cells.len(), 31);
        assert_eq!(grid.leading_blanks, 5);

        let tenth = &grid.cells[9];
        assert_eq!(tenth.count, 5);
        assert_eq!(tenth.dots, vec!["#f59e0b", "#a1a1aa", "#a1a1aa"]);

        assert_eq!(grid.total(), expand(&events, march).len());
    }

    #[test]
    fn test_grid_weeks_shape() {
        let march = YearMonth::new(2025, 3).unwrap();
        let grid = MonthGrid::build(&[], march);
        let weeks = grid.weeks();

        assert!(weeks.iter().all(|w| w.len() == 7));
        assert!(weeks[0][..5].iter().all(|c| c.is_none()));
        assert_eq!(weeks[0][5].map(|c| c.date), Some(date(2025, 3, 1)));
        assert_eq!(weeks.len(), 6);
    }
}
