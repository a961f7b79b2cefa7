// Calendar view state
// The presentation layer owns one of these per calendar screen and drives
// all grid updates through it. The grid engine itself stays pure; this
// container threads the current month, selection, and event list through
// each call and keeps the resulting snapshot.

use chrono::NaiveDate;
use log::debug;

use crate::models::calendar::{MonthGrid, YearMonth};
use crate::models::event::GameEvent;
use crate::services::calendar::{build_month_grid, merge_event_counts, select_day};
use crate::services::event::events_on_day;

pub struct CalendarViewState {
    month: YearMonth,
    today: NaiveDate,
    events: Vec<GameEvent>,
    grid: MonthGrid,
}

impl CalendarViewState {
    /// Start a calendar view on the given month. `today` is the reference
    /// day used for the initial highlight; the host supplies it so state
    /// updates stay deterministic.
    pub fn new(month: YearMonth, today: NaiveDate) -> Self {
        Self {
            month,
            today,
            events: Vec::new(),
            grid: build_month_grid(month, today),
        }
    }

    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Move to the following month. Rebuilds the grid, which drops any
    /// manual selection back to the today highlight.
    pub fn next_month(&mut self) {
        self.month = self.month.next();
        self.rebuild();
    }

    /// Move to the preceding month. Same rebuild semantics as [`Self::next_month`].
    pub fn previous_month(&mut self) {
        self.month = self.month.prev();
        self.rebuild();
    }

    /// Select the tapped day. Tapping a padding day or an out-of-range day
    /// clears the selection.
    pub fn select_day(&mut self, day_of_month: u32) {
        self.grid = select_day(&self.grid, day_of_month);
    }

    /// Replace the event list (e.g. after a backend snapshot arrives) and
    /// refresh the per-day counts. Selection is preserved.
    pub fn set_events(&mut self, events: Vec<GameEvent>) {
        self.events = events;
        self.grid = merge_event_counts(&self.grid, &self.events);
        debug!(
            "refreshed {} with {} events",
            self.month,
            self.events.len()
        );
    }

    /// Day number of the selected cell, if any.
    pub fn selected_day(&self) -> Option<u32> {
        self.grid.selected_day()
    }

    /// Full date of the selected cell, if any.
    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_day()
            .and_then(|day| NaiveDate::from_ymd_opt(self.month.year(), self.month.month(), day))
    }

    /// Sessions starting on the selected day, for the list under the grid.
    pub fn selected_day_events(&self) -> Vec<&GameEvent> {
        match self.selected_date() {
            Some(date) => events_on_day(&self.events, date),
            None => Vec::new(),
        }
    }

    fn rebuild(&mut self) {
        let grid = build_month_grid(self.month, self.today);
        self.grid = merge_event_counts(&grid, &self.events);
        debug!("rebuilt grid for {}", self.month);
    }
}
