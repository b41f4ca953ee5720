use super::index;
use super::EventStore;
use crate::models::calendar::TimeSlot;
use crate::models::event::Event;
use chrono::{NaiveDate, NaiveDateTime};

impl EventStore {
    /// Events whose closed interval contains `at`.
    pub fn events_on_date(&self, at: NaiveDateTime) -> Vec<&Event> {
        index::events_on_date(&self.events, at)
    }

    /// Events overlapping the half-open window of `slot` on `date`.
    pub fn events_in_slot(&self, date: NaiveDate, slot: TimeSlot) -> Vec<&Event> {
        index::events_in_slot(&self.events, date, slot)
    }

    /// Events touching the closed range `[from, to]`.
    pub fn events_between(&self, from: NaiveDateTime, to: NaiveDateTime) -> Vec<&Event> {
        index::events_between(&self.events, from, to)
    }

    /// Search events by title, description, or category.
    pub fn search(&self, query: &str) -> Vec<&Event> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return vec![];
        }

        let matches = |text: Option<&str>| {
            text.map(|value| value.to_lowercase().contains(&query))
                .unwrap_or(false)
        };

        let found: Vec<&Event> = self
            .events
            .iter()
            .filter(|event| {
                matches(Some(event.title.as_str()))
                    || matches(event.description.as_deref())
                    || matches(event.category.as_deref())
            })
            .collect();

        log::debug!("Search for {:?} matched {} events", query, found.len());
        found
    }
}
