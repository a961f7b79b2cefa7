// Event module
// Game-session event model shared with the backend sync layer

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Validation errors for game-session events.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventError {
    #[error("event title cannot be empty")]
    EmptyTitle,
    #[error("event end time must be after start time")]
    EndNotAfterStart,
    #[error("event {0} is required")]
    MissingField(&'static str),
}

/// A scheduled game session within a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Backend document id, absent until the event is first synced.
    #[serde(default)]
    pub id: Option<Uuid>,
    pub group_id: Uuid,
    pub title: String,
    /// Name of the game being played, if the organizer picked one.
    #[serde(default)]
    pub game: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    /// Display name of the member who scheduled the session.
    #[serde(default)]
    pub created_by: Option<String>,
    /// Member ids who confirmed attendance.
    #[serde(default)]
    pub attendees: Vec<Uuid>,
}

impl GameEvent {
    /// Create a new event with required fields
    ///
    /// # Arguments
    /// * `group_id` - Group the session belongs to
    /// * `title` - Event title (required, non-empty)
    /// * `start` - Session start time
    /// * `end` - Session end time
    ///
    /// # Examples
    /// ```
    /// use squadplay_core::models::event::GameEvent;
    /// use chrono::Local;
    /// use uuid::Uuid;
    ///
    /// let start = Local::now();
    /// let end = start + chrono::Duration::hours(2);
    /// let event = GameEvent::new(Uuid::new_v4(), "Raid night", start, end).unwrap();
    /// ```
    pub fn new(
        group_id: Uuid,
        title: impl Into<String>,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Result<Self, EventError> {
        let event = Self {
            id: None,
            group_id,
            title: title.into(),
            game: None,
            description: None,
            start,
            end,
            created_by: None,
            attendees: Vec::new(),
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> GameEventBuilder {
        GameEventBuilder::new()
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), EventError> {
        if self.title.trim().is_empty() {
            return Err(EventError::EmptyTitle);
        }
        if self.end <= self.start {
            return Err(EventError::EndNotAfterStart);
        }
        Ok(())
    }

    /// Get the duration of the session
    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }

    /// Whether the session starts on the given calendar day.
    pub fn starts_on(&self, day: NaiveDate) -> bool {
        self.start.date_naive() == day
    }

    /// Number of members who confirmed attendance.
    pub fn attendee_count(&self) -> usize {
        self.attendees.len()
    }
}

/// Builder for creating events with optional fields
pub struct GameEventBuilder {
    group_id: Option<Uuid>,
    title: Option<String>,
    game: Option<String>,
    description: Option<String>,
    start: Option<DateTime<Local>>,
    end: Option<DateTime<Local>>,
    created_by: Option<String>,
    attendees: Vec<Uuid>,
}

impl GameEventBuilder {
    pub fn new() -> Self {
        Self {
            group_id: None,
            title: None,
            game: None,
            description: None,
            start: None,
            end: None,
            created_by: None,
            attendees: Vec::new(),
        }
    }

    /// Set the owning group
    pub fn group_id(mut self, group_id: Uuid) -> Self {
        self.group_id = Some(group_id);
        self
    }

    /// Set the event title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the game being played
    pub fn game(mut self, game: impl Into<String>) -> Self {
        self.game = Some(game.into());
        self
    }

    /// Set the event description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the start time
    pub fn start(mut self, start: DateTime<Local>) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the end time
    pub fn end(mut self, end: DateTime<Local>) -> Self {
        self.end = Some(end);
        self
    }

    /// Set the organizer's display name
    pub fn created_by(mut self, name: impl Into<String>) -> Self {
        self.created_by = Some(name.into());
        self
    }

    /// Add a confirmed attendee
    pub fn attendee(mut self, member_id: Uuid) -> Self {
        self.attendees.push(member_id);
        self
    }

    /// Build the event
    pub fn build(self) -> Result<GameEvent, EventError> {
        let group_id = self.group_id.ok_or(EventError::MissingField("group id"))?;
        let title = self.title.ok_or(EventError::MissingField("title"))?;
        let start = self.start.ok_or(EventError::MissingField("start time"))?;
        let end = self.end.ok_or(EventError::MissingField("end time"))?;

        let event = GameEvent {
            id: None,
            group_id,
            title,
            game: self.game,
            description: self.description,
            start,
            end,
            created_by: self.created_by,
            attendees: self.attendees,
        };
        event.validate()?;
        Ok(event)
    }
}

impl Default for GameEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_start() -> DateTime<Local> {
        Local::now()
    }

    fn sample_end() -> DateTime<Local> {
        Local::now() + Duration::hours(2)
    }

    #[test]
    fn test_new_event_success() {
        let group = Uuid::new_v4();
        let start = sample_start();
        let end = sample_end();
        let event = GameEvent::new(group, "Raid night", start, end).unwrap();

        assert_eq!(event.title, "Raid night");
        assert_eq!(event.group_id, group);
        assert_eq!(event.start, start);
        assert_eq!(event.end, end);
        assert!(event.id.is_none());
        assert!(event.attendees.is_empty());
    }

    #[test]
    fn test_new_event_empty_title() {
        let result = GameEvent::new(Uuid::new_v4(), "", sample_start(), sample_end());
        assert_eq!(result.unwrap_err(), EventError::EmptyTitle);
    }

    #[test]
    fn test_new_event_whitespace_title() {
        let result = GameEvent::new(Uuid::new_v4(), "   ", sample_start(), sample_end());
        assert_eq!(result.unwrap_err(), EventError::EmptyTitle);
    }

    #[test]
    fn test_new_event_invalid_times() {
        let start = sample_start();
        let end = start - Duration::hours(1);
        let result = GameEvent::new(Uuid::new_v4(), "Raid night", start, end);
        assert_eq!(result.unwrap_err(), EventError::EndNotAfterStart);
    }

    #[test]
    fn test_new_event_equal_times() {
        let start = sample_start();
        let result = GameEvent::new(Uuid::new_v4(), "Raid night", start, start);
        assert_eq!(result.unwrap_err(), EventError::EndNotAfterStart);
    }

    #[test]
    fn test_builder_basic() {
        let group = Uuid::new_v4();
        let start = sample_start();
        let end = sample_end();

        let event = GameEvent::builder()
            .group_id(group)
            .title("Ranked queue")
            .start(start)
            .end(end)
            .build()
            .unwrap();

        assert_eq!(event.title, "Ranked queue");
        assert_eq!(event.group_id, group);
    }

    #[test]
    fn test_builder_with_optional_fields() {
        let member = Uuid::new_v4();
        let event = GameEvent::builder()
            .group_id(Uuid::new_v4())
            .title("Friday session")
            .game("Deep Rock Galactic")
            .description("Bring flares")
            .created_by("Alex")
            .attendee(member)
            .start(sample_start())
            .end(sample_end())
            .build()
            .unwrap();

        assert_eq!(event.game, Some("Deep Rock Galactic".to_string()));
        assert_eq!(event.description, Some("Bring flares".to_string()));
        assert_eq!(event.created_by, Some("Alex".to_string()));
        assert_eq!(event.attendees, vec![member]);
        assert_eq!(event.attendee_count(), 1);
    }

    #[test]
    fn test_builder_missing_group() {
        let result = GameEvent::builder()
            .title("Raid night")
            .start(sample_start())
            .end(sample_end())
            .build();
        assert_eq!(result.unwrap_err(), EventError::MissingField("group id"));
    }

    #[test]
    fn test_builder_missing_title() {
        let result = GameEvent::builder()
            .group_id(Uuid::new_v4())
            .start(sample_start())
            .end(sample_end())
            .build();
        assert_eq!(result.unwrap_err(), EventError::MissingField("title"));
    }

    #[test]
    fn test_builder_missing_start() {
        let result = GameEvent::builder()
            .group_id(Uuid::new_v4())
            .title("Raid night")
            .end(sample_end())
            .build();
        assert_eq!(result.unwrap_err(), EventError::MissingField("start time"));
    }

    #[test]
    fn test_duration() {
        let start = sample_start();
        let end = start + Duration::hours(3);
        let event = GameEvent::new(Uuid::new_v4(), "Raid night", start, end).unwrap();
        assert_eq!(event.duration(), Duration::hours(3));
    }

    #[test]
    fn test_starts_on() {
        let start = Local::now();
        let event = GameEvent::new(
            Uuid::new_v4(),
            "Raid night",
            start,
            start + Duration::hours(1),
        )
        .unwrap();

        assert!(event.starts_on(start.date_naive()));
        assert!(!event.starts_on(start.date_naive() + Duration::days(1)));
    }
}
