//! TUI rendering traits for calendar types.
//!
//! Extension traits that add colored terminal rendering to
//! secondbrain-core types using owo_colors.

use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;
use secondbrain_core::label::Label;
use secondbrain_core::{Event, MonthGrid, YearMonth};

const WEEKDAYS_FR: [&str; 7] = ["Lun", "Mar", "Mer", "Jeu", "Ven", "Sam", "Dim"];

const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

const DAYS_FR: [&str; 7] = [
    "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
];

/// Width of one grid cell, in characters
const CELL_WIDTH: usize = 9;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// A colored dot for a hex color.
pub fn dot(hex: &str) -> String {
    match Label::rgb(hex) {
        Some((r, g, b)) => "●".truecolor(r, g, b).to_string(),
        None => "●".dimmed().to_string(),
    }
}

/// e.g. "mars 2025"
pub fn month_title(month: YearMonth) -> String {
    let name = MONTHS_FR[(month.month() - 1) as usize];
    format!("{} {}", name, month.year())
}

/// e.g. "lundi 10 mars"
pub fn day_title(date: NaiveDate) -> String {
    let weekday = DAYS_FR[date.weekday().num_days_from_monday() as usize];
    let month = MONTHS_FR[date.month0() as usize];
    format!("{} {:02} {}", weekday, date.day(), month)
}

impl Render for Event {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        let marker = match self.label.as_deref() {
            Some(label) => format!("{} ", dot(Label::dot_for(Some(label)))),
            None => String::new(),
        };
        lines.push(format!("{}{}", marker, self.display_title().bold()));

        let mut details = self
            .time_range()
            .unwrap_or_else(|| "Toute la journée".to_string());
        if let Some(recur) = self.recur.label() {
            details.push_str(&format!(" • Récurrence: {}", recur));
        }
        lines.push(format!("  {}", details.dimmed()));

        if let Some(ref note) = self.note {
            for line in note.lines() {
                lines.push(format!("  {}", line));
            }
        }

        lines.push(format!("  {}", format!("id: {}", self.id).dimmed()));
        lines.join("\n")
    }
}

impl Render for Label {
    fn render(&self) -> String {
        format!("{} {:<8} {}", dot(self.dot), self.id, self.name.dimmed())
    }
}

impl Render for MonthGrid {
    fn render(&self) -> String {
        let today = chrono::Local::now().date_naive();
        let mut lines = Vec::new();

        lines.push(month_title(self.month).bold().to_string());

        let header: Vec<String> = WEEKDAYS_FR
            .iter()
            .map(|d| format!("{:<width$}", d.to_uppercase(), width = CELL_WIDTH))
            .collect();
        lines.push(header.join("").dimmed().to_string());

        for week in self.weeks() {
            let mut row = String::new();
            for slot in week {
                let Some(cell) = slot else {
                    row.push_str(&" ".repeat(CELL_WIDTH));
                    continue;
                };

                let day = format!("{:>2}", cell.date.day());
                let day = if cell.date == today {
                    day.bold().underline().to_string()
                } else {
                    day
                };

                // "dd (n)●●●" padded to the cell width
                let mut visible = 2;
                let mut text = day;
                if cell.count > 0 {
                    let badge = format!(" ({})", cell.count);
                    visible += badge.chars().count();
                    text.push_str(&badge.cyan().to_string());
                }
                for color in &cell.dots {
                    text.push_str(&dot(color));
                    visible += 1;
                }
                text.push_str(&" ".repeat(CELL_WIDTH.saturating_sub(visible)));
                row.push_str(&text);
            }
            lines.push(row.trim_end().to_string());
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles() {
        let march = YearMonth::new(2025, 3).unwrap();
        assert_eq!(month_title(march), "mars 2025");

        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert_eq!(day_title(date), "lundi 10 mars");
    }
}
