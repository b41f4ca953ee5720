// Event module
// Calendar event model, candidate drafts and partial updates

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

mod patch;

pub use patch::EventPatch;

/// Calendar event as held by the event store.
///
/// Times are local wall-clock values; no offset is carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "startDate")]
    pub start: NaiveDateTime,
    #[serde(rename = "endDate")]
    pub end: NaiveDateTime,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Event {
    /// Create a builder for constructing candidate events
    ///
    /// # Examples
    /// ```
    /// use rust_calendar_core::models::event::Event;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2026, 10, 19)
    ///     .unwrap()
    ///     .and_hms_opt(9, 0, 0)
    ///     .unwrap();
    /// let draft = Event::builder()
    ///     .title("Team Meeting")
    ///     .start(start)
    ///     .end(start + chrono::Duration::hours(1))
    ///     .build();
    /// assert_eq!(draft.title, "Team Meeting");
    /// ```
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Get the duration of the event
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Candidate view of this record, used to revalidate after a patch.
    pub fn to_draft(&self) -> EventDraft {
        EventDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            start: Some(self.start),
            end: Some(self.end),
            color: Some(self.color.clone()),
            category: self.category.clone(),
        }
    }
}

/// Candidate event data as entered by a user, before an id is assigned.
///
/// Dates are optional so that missing fields can be reported by the
/// validator rather than rejected by the type system.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub description: Option<String>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub color: Option<String>,
    pub category: Option<String>,
}

/// Builder for creating event drafts with optional fields
#[derive(Debug, Default)]
pub struct EventBuilder {
    draft: EventDraft,
}

impl EventBuilder {
    /// Create a new event builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the event title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.draft.title = title.into();
        self
    }

    /// Set the event description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.draft.description = Some(description.into());
        self
    }

    /// Set the start time
    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.draft.start = Some(start);
        self
    }

    /// Set the end time
    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.draft.end = Some(end);
        self
    }

    /// Set the event color (hex format)
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.draft.color = Some(color.into());
        self
    }

    /// Set the event category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.draft.category = Some(category.into());
        self
    }

    pub fn build(self) -> EventDraft {
        self.draft
    }
}
