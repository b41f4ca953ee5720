use super::error::{StoreError, StoreResult, ValidationErrors};
use super::EventStore;
use crate::models::calendar::TimeSlot;
use crate::models::event::{Event, EventDraft, EventPatch};
use chrono::NaiveDate;
use uuid::Uuid;

impl EventStore {
    /// Validate a candidate and append it as a new event.
    ///
    /// A fresh id is assigned and, when the candidate has no colour, the next
    /// palette colour is used.
    pub fn add(&mut self, draft: EventDraft) -> StoreResult<Event> {
        let errors = self.rules.validate(&draft);
        let (start, end) = match (draft.start, draft.end) {
            (Some(start), Some(end)) if errors.is_empty() => (start, end),
            _ => return Err(StoreError::Validation(ValidationErrors::new(errors))),
        };

        let color = match draft.color {
            Some(color) if !color.trim().is_empty() => color,
            _ => self.colors.next_color(),
        };

        let event = Event {
            id: self.fresh_id(),
            title: draft.title,
            description: draft.description,
            start,
            end,
            color,
            category: draft.category,
        };

        log::info!("Added event {} ({})", event.id, event.title);
        self.events.push(event.clone());
        Ok(event)
    }

    /// Retrieve a copy of an event by ID.
    pub fn get(&self, id: &str) -> Option<Event> {
        self.find(id).cloned()
    }

    /// Borrow an event by ID.
    pub fn find(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Replace the supplied fields of an existing event.
    ///
    /// The patch is merged with the stored record before validation, so a
    /// lone `end` earlier than the stored `start` is rejected.
    pub fn update(&mut self, id: &str, patch: EventPatch) -> StoreResult<()> {
        let index = self
            .position_of(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let merged = patch.applied_to(&self.events[index]);
        let errors = self.rules.validate(&merged.to_draft());
        if !errors.is_empty() {
            return Err(StoreError::Validation(ValidationErrors::new(errors)));
        }

        log::info!("Updated event {}", id);
        self.events[index] = merged;
        Ok(())
    }

    /// Delete an event by ID. Unknown ids are ignored.
    pub fn remove(&mut self, id: &str) {
        match self.position_of(id) {
            Some(index) => {
                self.events.remove(index);
                log::info!("Removed event {}", id);
            }
            None => log::debug!("Ignoring removal of unknown event {}", id),
        }
    }

    /// Create an event spanning from `start_slot` to the start of `end_slot`.
    ///
    /// When the end does not come after the start the event lasts one slot.
    /// A slot with no representable end leaves the range empty, which the
    /// validator rejects.
    pub fn create_in_slots(
        &mut self,
        date: NaiveDate,
        start_slot: TimeSlot,
        end_slot: TimeSlot,
    ) -> StoreResult<Event> {
        let start = start_slot.start_on(date);
        let mut end = end_slot.start_on(date);
        if end <= start {
            end = start_slot.end_on(date).unwrap_or(start);
        }

        let draft = Event::builder()
            .title(self.new_event_title.clone())
            .start(start)
            .end(end)
            .build();
        self.add(draft)
    }

    /// Reschedule an event to begin at `slot` on `date`, keeping its duration.
    pub fn move_to_slot(&mut self, id: &str, date: NaiveDate, slot: TimeSlot) -> StoreResult<()> {
        let duration = self
            .find(id)
            .map(Event::duration)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let start = slot.start_on(date);
        let end = start.checked_add_signed(duration).ok_or_else(|| {
            StoreError::Validation(ValidationErrors::new(vec![
                "End date is out of range".to_string(),
            ]))
        })?;
        self.update(id, EventPatch::new().start(start).end(end))
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().simple().to_string();
            if self.position_of(&id).is_none() {
                return id;
            }
        }
    }
}
