// Calendar grid engine
// Builds the month-view cell grid and folds selection and event counts
// into it. All operations are pure: each returns a new grid snapshot.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::calendar::{DayCell, MonthGrid, YearMonth};
use crate::models::event::GameEvent;

/// Build the grid of day cells for a month.
///
/// The grid starts on the Monday on or before the first of the month and
/// runs in whole weeks until the last day of the month is covered, so its
/// length is always a multiple of 7 (35 or 42 cells for real months).
/// Leading and trailing cells borrowed from the adjacent months are marked
/// `in_month = false`. The cell matching `today` starts out selected,
/// provided it falls inside the requested month.
///
/// Event counts start at zero; merge them in with [`merge_event_counts`].
pub fn build_month_grid(month: YearMonth, today: NaiveDate) -> MonthGrid {
    let first = month.first_day();
    let lead_days = first.weekday().num_days_from_monday() as i64;
    let grid_start = first - Duration::days(lead_days);
    let next_month_first = month.next().first_day();

    let mut cells = Vec::with_capacity(42);
    let mut day = grid_start;

    // Every day of the month, plus the leading slice of the previous one.
    while day < next_month_first {
        cells.push(make_cell(day, month, today));
        day += Duration::days(1);
    }

    // Trailing padding from the next month to finish the last week.
    while cells.len() % 7 != 0 {
        cells.push(make_cell(day, month, today));
        day += Duration::days(1);
    }

    MonthGrid::new(month, cells)
}

fn make_cell(day: NaiveDate, month: YearMonth, today: NaiveDate) -> DayCell {
    let in_month = month.contains(day);
    DayCell {
        day_of_month: day.day(),
        in_month,
        selected: in_month && day == today,
        event_count: 0,
    }
}

/// Return a new grid with the in-month cell for `target_day` selected and
/// every other cell deselected.
///
/// If no in-month cell carries that day number (out-of-range day, or a day
/// number that only appears on a padding cell), the selection is cleared
/// entirely. At most one cell is selected in the result.
pub fn select_day(grid: &MonthGrid, target_day: u32) -> MonthGrid {
    let cells = grid
        .cells()
        .iter()
        .map(|cell| DayCell {
            selected: cell.in_month && cell.day_of_month == target_day,
            ..*cell
        })
        .collect();
    MonthGrid::new(grid.month(), cells)
}

/// Return a new grid with each cell's event count recomputed from `events`.
///
/// An event counts toward an in-month cell when its start date has the same
/// day-of-month and the same month number as the grid. The year is not
/// compared, so events in another year but the same month and day are
/// counted too. Padding cells always get a count of zero.
pub fn merge_event_counts(grid: &MonthGrid, events: &[GameEvent]) -> MonthGrid {
    let month = grid.month();
    let cells = grid
        .cells()
        .iter()
        .map(|cell| {
            let event_count = if cell.in_month {
                events
                    .iter()
                    .filter(|event| {
                        let start = event.start.date_naive();
                        start.month() == month.month() && start.day() == cell.day_of_month
                    })
                    .count() as u32
            } else {
                0
            };
            DayCell {
                event_count,
                ..*cell
            }
        })
        .collect();
    MonthGrid::new(month, cells)
}
