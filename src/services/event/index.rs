//! Overlap queries over a sequence of events.
//!
//! Day-level lookups treat an event as the closed interval `[start, end]`;
//! slot lookups use half-open `[start, end)` windows. The two rules differ on
//! purpose, so pick the query that matches the granularity being drawn.
//! Every query preserves the order of its input.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::models::calendar::{SlotPosition, TimeSlot, SLOT_MINUTES};
use crate::models::event::Event;

/// Smallest visual height of an event, in slots.
pub const MIN_DURATION_SLOTS: f64 = 1.0;

/// Events whose closed `[start, end]` interval contains `at`.
pub fn events_on_date(events: &[Event], at: NaiveDateTime) -> Vec<&Event> {
    events
        .iter()
        .filter(|event| event.start <= at && event.end >= at)
        .collect()
}

/// Events overlapping the half-open window of `slot` on `date`.
///
/// An event ending exactly when the slot starts, or starting exactly when it
/// ends, is not included. The 23:30 slot of the last representable date is
/// open-ended.
pub fn events_in_slot(events: &[Event], date: NaiveDate, slot: TimeSlot) -> Vec<&Event> {
    let slot_start = slot.start_on(date);
    let slot_end = slot.end_on(date);
    events
        .iter()
        .filter(|event| {
            event.end > slot_start && slot_end.map_or(true, |end| event.start < end)
        })
        .collect()
}

/// Events touching the closed range `[from, to]`.
pub fn events_between(events: &[Event], from: NaiveDateTime, to: NaiveDateTime) -> Vec<&Event> {
    events
        .iter()
        .filter(|event| event.start <= to && event.end >= from)
        .collect()
}

/// Project an event's wall-clock start and end onto the day's slot grid.
pub fn position(event: &Event) -> SlotPosition {
    let start_minutes = minutes_since_midnight(event.start);
    let end_minutes = minutes_since_midnight(event.end);
    let slot = SLOT_MINUTES as f64;

    SlotPosition {
        offset_slots: start_minutes / slot,
        duration_slots: ((end_minutes - start_minutes) / slot).max(MIN_DURATION_SLOTS),
    }
}

fn minutes_since_midnight(at: NaiveDateTime) -> f64 {
    (at.hour() * 60 + at.minute()) as f64
}
