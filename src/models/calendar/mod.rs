// Calendar grid model
// Month identity plus the cell list rendered by the month view

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A (year, month) pair identifying a calendar month, independent of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Create a year-month pair. Returns `None` for month outside 1-12 or
    /// a year chrono cannot represent.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if year < 1 {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(Self { year, month })
    }

    /// The month containing the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The following month, rolling the year at December.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The preceding month, rolling the year at January.
    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// First calendar day of the month.
    pub fn first_day(&self) -> NaiveDate {
        // Safe: validated in new()
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    /// Last calendar day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day() - Duration::days(1)
    }

    /// Number of days in the month.
    pub fn num_days(&self) -> u32 {
        self.last_day().day()
    }

    /// Whether the given date falls inside this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// One grid position in the month view: a single calendar day, or a
/// padding day borrowed from the adjacent month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    /// Day number (1-31) within the cell's own month.
    pub day_of_month: u32,
    /// True only for days belonging to the requested month.
    pub in_month: bool,
    /// True for the single user-chosen cell, if any.
    pub selected: bool,
    /// Number of events starting on this day.
    pub event_count: u32,
}

/// The full month view model: the requested month and its ordered cells,
/// Monday-first, always a whole number of weeks.
///
/// Grids are immutable snapshots. Every update (selection, event counts,
/// month change) produces a new grid rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    month: YearMonth,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    pub(crate) fn new(month: YearMonth, cells: Vec<DayCell>) -> Self {
        Self { month, cells }
    }

    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// Rows of seven cells, top to bottom.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }

    /// Day number of the selected in-month cell, if one is selected.
    pub fn selected_day(&self) -> Option<u32> {
        self.cells
            .iter()
            .find(|c| c.selected)
            .map(|c| c.day_of_month)
    }
}
