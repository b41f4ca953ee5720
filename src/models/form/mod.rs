//! Event form state.
//!
//! Holds the raw text a user types into the event dialog and turns it into
//! an [`EventDraft`] on submit.

use chrono::{Duration, NaiveDateTime};

use crate::models::event::{Event, EventDraft, EventPatch};
use crate::services::event::validation::ValidationRules;
use crate::utils::date::{format_date_time, DATE_TIME_FORMAT};

const DATE_TIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// State for the event editing form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub title: String,
    pub description: String,
    pub start: String,
    pub end: String,
    pub color: String,
    pub category: String,
}

impl EventForm {
    /// Empty form with a preselected colour.
    pub fn blank(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            ..Self::default()
        }
    }

    /// Form prefilled for a new one-hour event starting at `initial`.
    ///
    /// The end is left blank when an hour later is not representable.
    pub fn for_date(initial: NaiveDateTime, color: impl Into<String>) -> Self {
        let end = initial
            .checked_add_signed(Duration::hours(1))
            .map(format_date_time)
            .unwrap_or_default();
        Self {
            start: format_date_time(initial),
            end,
            color: color.into(),
            ..Self::default()
        }
    }

    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            start: format_date_time(event.start),
            end: format_date_time(event.end),
            color: event.color.clone(),
            category: event.category.clone().unwrap_or_default(),
        }
    }

    /// Parse and validate the form.
    ///
    /// Unparseable dates are reported before any field rule runs; otherwise
    /// every rule violation is returned at once.
    pub fn submit(&self, rules: &ValidationRules) -> Result<EventDraft, Vec<String>> {
        let start = parse_field(&self.start, "Start date");
        let end = parse_field(&self.end, "End date");

        let (start, end) = match (start, end) {
            (Ok(start), Ok(end)) => (start, end),
            (start, end) => {
                let errors = [start.err(), end.err()].into_iter().flatten().collect();
                return Err(errors);
            }
        };

        // Length limits apply to the text as typed
        let raw = EventDraft {
            title: self.title.clone(),
            description: non_empty(&self.description),
            start,
            end,
            ..EventDraft::default()
        };
        let errors = rules.validate(&raw);
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(EventDraft {
            title: self.title.trim().to_string(),
            description: non_empty(self.description.trim()),
            start,
            end,
            color: non_empty(self.color.trim()),
            category: non_empty(self.category.trim()),
        })
    }

    /// Patch that rewrites every field of an existing event from this form.
    pub fn to_patch(&self, rules: &ValidationRules) -> Result<EventPatch, Vec<String>> {
        let draft = self.submit(rules)?;
        let mut patch = EventPatch::new()
            .title(draft.title)
            .description(draft.description)
            .category(draft.category);
        patch.start = draft.start;
        patch.end = draft.end;
        patch.color = draft.color;
        Ok(patch)
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_field(value: &str, label: &str) -> Result<Option<NaiveDateTime>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, DATE_TIME_LOCAL_FORMAT))
        .map(Some)
        .map_err(|_| format!("{label} must be a valid date and time (YYYY-MM-DD HH:MM)"))
}
