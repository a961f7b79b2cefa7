//! Event access for the calendar views.
//! The real app reads events from a managed document backend; the view
//! layer only sees the [`EventProvider`] seam defined here.

use anyhow::Result;
use chrono::NaiveDate;
use log::debug;
use uuid::Uuid;

use crate::models::calendar::YearMonth;
use crate::models::event::GameEvent;
use crate::utils::date::{end_of_day, start_of_day};

/// Source of game-session events for a group, scoped to one month at a time.
///
/// Implementations may hit the network, so every call can fail; the
/// in-process reference implementation below never does.
pub trait EventProvider {
    fn events_for_month(&self, group_id: Uuid, month: YearMonth) -> Result<Vec<GameEvent>>;
}

/// In-memory event source used by tests and backend-less hosts.
#[derive(Debug, Default)]
pub struct InMemoryEventProvider {
    events: Vec<GameEvent>,
}

impl InMemoryEventProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventProvider for InMemoryEventProvider {
    fn events_for_month(&self, group_id: Uuid, month: YearMonth) -> Result<Vec<GameEvent>> {
        let window_start = start_of_day(month.first_day());
        let window_end = end_of_day(month.last_day());

        let mut events: Vec<GameEvent> = self
            .events
            .iter()
            .filter(|e| e.group_id == group_id)
            .filter(|e| e.start >= window_start && e.start <= window_end)
            .cloned()
            .collect();
        events.sort_by_key(|e| e.start);

        debug!(
            "loaded {} events for group {} in {}",
            events.len(),
            group_id,
            month
        );
        Ok(events)
    }
}

/// Events starting on the given calendar day, in start order.
///
/// Backs the session list shown under the grid for the selected day.
pub fn events_on_day<'a>(events: &'a [GameEvent], day: NaiveDate) -> Vec<&'a GameEvent> {
    let mut on_day: Vec<&GameEvent> = events.iter().filter(|e| e.starts_on(day)).collect();
    on_day.sort_by_key(|e| e.start);
    on_day
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local, TimeZone};

    fn at(year: i32, month: u32, day: u32, hour: u32) -> chrono::DateTime<Local> {
        Local.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
    }

    fn session(group: Uuid, start: chrono::DateTime<Local>) -> GameEvent {
        GameEvent::new(group, "Session", start, start + Duration::hours(2)).unwrap()
    }

    #[test]
    fn test_events_for_month_filters_by_group() {
        let group_a = Uuid::new_v4();
        let group_b = Uuid::new_v4();
        let mut provider = InMemoryEventProvider::new();
        provider.insert(session(group_a, at(2025, 4, 6, 19)));
        provider.insert(session(group_b, at(2025, 4, 6, 20)));

        let month = YearMonth::new(2025, 4).unwrap();
        let events = provider.events_for_month(group_a, month).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].group_id, group_a);
    }

    #[test]
    fn test_events_for_month_filters_by_month() {
        let group = Uuid::new_v4();
        let mut provider = InMemoryEventProvider::new();
        provider.insert(session(group, at(2025, 3, 31, 19)));
        provider.insert(session(group, at(2025, 4, 1, 19)));
        provider.insert(session(group, at(2025, 4, 30, 23)));
        provider.insert(session(group, at(2025, 5, 1, 0)));

        let month = YearMonth::new(2025, 4).unwrap();
        let events = provider.events_for_month(group, month).unwrap();
        let days: Vec<u32> = events
            .iter()
            .map(|e| chrono::Datelike::day(&e.start.date_naive()))
            .collect();
        assert_eq!(days, vec![1, 30]);
    }

    #[test]
    fn test_events_for_month_sorted_by_start() {
        let group = Uuid::new_v4();
        let mut provider = InMemoryEventProvider::new();
        provider.insert(session(group, at(2025, 4, 20, 19)));
        provider.insert(session(group, at(2025, 4, 6, 19)));

        let month = YearMonth::new(2025, 4).unwrap();
        let events = provider.events_for_month(group, month).unwrap();
        assert!(events[0].start < events[1].start);
    }

    #[test]
    fn test_events_on_day_matches_start_date_only() {
        let group = Uuid::new_v4();
        let events = vec![
            session(group, at(2025, 4, 6, 9)),
            session(group, at(2025, 4, 6, 21)),
            session(group, at(2025, 4, 7, 19)),
        ];

        let day = NaiveDate::from_ymd_opt(2025, 4, 6).unwrap();
        let on_day = events_on_day(&events, day);
        assert_eq!(on_day.len(), 2);
        assert!(on_day[0].start < on_day[1].start);
    }

    #[test]
    fn test_events_on_day_empty_for_quiet_day() {
        let events = vec![session(Uuid::new_v4(), at(2025, 4, 6, 19))];
        let day = NaiveDate::from_ymd_opt(2025, 4, 8).unwrap();
        assert!(events_on_day(&events, day).is_empty());
    }
}
