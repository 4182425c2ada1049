use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use secondbrain_core::month::clamp_selection;
use secondbrain_core::{MonthGrid, YearMonth};

use super::{day, Context};
use crate::render::Render;

/// The month to show after applying `--prev` / `--next`.
pub fn navigate(month: YearMonth, prev: bool, next: bool) -> YearMonth {
    match (prev, next) {
        (true, false) => month.prev(),
        (false, true) => month.next(),
        _ => month,
    }
}

/// Month grid, followed by the detail of the selected day. A selection
/// outside the month falls back to the 1st.
pub fn run(ctx: &Context, month: YearMonth, selected: NaiveDate) -> Result<()> {
    let grid = MonthGrid::build(ctx.repo.events(), month);

    println!("{}", grid.render());
    println!();

    let summary = match grid.total() {
        0 => "Aucun événement ce mois-ci".to_string(),
        1 => "1 événement ce mois-ci".to_string(),
        n => format!("{} événements ce mois-ci", n),
    };
    println!("{}", summary.dimmed());
    println!();

    day::print_day(ctx, clamp_selection(selected, month));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_steps_across_years() {
        let january = YearMonth::new(2025, 1).unwrap();
        assert_eq!(navigate(january, true, false), YearMonth::new(2024, 12).unwrap());
        assert_eq!(navigate(january, false, true), YearMonth::new(2025, 2).unwrap());
        assert_eq!(navigate(january, false, false), january);

        let december = YearMonth::new(2025, 12).unwrap();
        assert_eq!(navigate(december, false, true), YearMonth::new(2026, 1).unwrap());
    }
}
