// Property-based tests for grid generation, overlap queries and validation

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use proptest::prelude::*;
use rust_calendar_core::models::calendar::TimeSlot;
use rust_calendar_core::models::event::{Event, EventDraft};
use rust_calendar_core::utils::date::add_months;
use rust_calendar_core::{build_month_grid, events_in_slot, events_on_date, validate, EventStore};

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1900..2200i32, 1..=12u32, 1..=28u32)
        .prop_map(|(year, month, day)| NaiveDate::from_ymd_opt(year, month, day).unwrap())
}

fn date_time_strategy() -> impl Strategy<Value = NaiveDateTime> {
    (date_strategy(), 0..24u32, 0..60u32)
        .prop_map(|(date, hour, minute)| date.and_hms_opt(hour, minute, 0).unwrap())
}

fn event(start: NaiveDateTime, end: NaiveDateTime) -> Event {
    Event {
        id: "e".to_string(),
        title: "Event".to_string(),
        description: None,
        start,
        end,
        color: "#3b82f6".to_string(),
        category: None,
    }
}

proptest! {
    /// Property: the grid has 42 ascending, gap-free days starting on a Sunday
    #[test]
    fn prop_month_grid_shape(reference in date_strategy()) {
        let grid = build_month_grid(reference).unwrap();

        prop_assert_eq!(grid.len(), 42);
        prop_assert_eq!(grid[0].weekday(), Weekday::Sun);
        prop_assert!(grid.windows(2).all(|pair| pair[1] - pair[0] == Duration::days(1)));
        prop_assert!(grid[0] <= reference.with_day(1).unwrap());
        prop_assert!(reference.with_day(1).unwrap() - grid[0] < Duration::days(7));
    }

    /// Property: the grid depends only on the year and month
    #[test]
    fn prop_month_grid_ignores_day(reference in date_strategy(), other_day in 1..=28u32) {
        let same_month = reference.with_day(other_day).unwrap();
        prop_assert_eq!(build_month_grid(reference), build_month_grid(same_month));
    }

    /// Property: an event is found exactly on the instants inside [start, end]
    #[test]
    fn prop_on_date_matches_closed_interval(
        start in date_time_strategy(),
        length in 1..5_000i64,
        shift in -6_000..6_000i64,
    ) {
        let end = start + Duration::minutes(length);
        let events = vec![event(start, end)];
        let at = start + Duration::minutes(shift);

        let found = !events_on_date(&events, at).is_empty();
        prop_assert_eq!(found, start <= at && at <= end);
    }

    /// Property: an event ending at a slot's start is never in that slot
    #[test]
    fn prop_slot_excludes_event_ending_at_slot_start(
        date in date_strategy(),
        index in 0..48usize,
        length in 1..600i64,
    ) {
        let slot = TimeSlot::from_index(index).unwrap();
        let slot_start = slot.start_on(date);
        let events = vec![event(slot_start - Duration::minutes(length), slot_start)];

        prop_assert!(events_in_slot(&events, date, slot).is_empty());
    }

    /// Property: month stepping never panics, and succeeds inside the range
    #[test]
    fn prop_add_months_is_total(reference in date_strategy(), months in -12_000..12_000i32) {
        prop_assert!(add_months(reference, months).is_some());
        prop_assert!(add_months(NaiveDate::MAX, months.abs().max(1)).is_none());
        prop_assert!(add_months(NaiveDate::MIN, -months.abs().max(1)).is_none());
    }

    /// Property: validation is a pure function of the candidate
    #[test]
    fn prop_validate_is_idempotent(
        title in ".{0,120}",
        start in proptest::option::of(date_time_strategy()),
        end in proptest::option::of(date_time_strategy()),
    ) {
        let draft = EventDraft { title, start, end, ..EventDraft::default() };
        prop_assert_eq!(validate(&draft), validate(&draft));
    }

    /// Property: accepted events always satisfy start < end
    #[test]
    fn prop_store_only_holds_ordered_events(
        start in date_time_strategy(),
        offset in -600..600i64,
    ) {
        let mut store = EventStore::new();
        let draft = Event::builder()
            .title("Standup")
            .start(start)
            .end(start + Duration::minutes(offset))
            .build();

        let accepted = store.add(draft).is_ok();
        prop_assert_eq!(accepted, offset > 0);
        prop_assert!(store.events().iter().all(|e| e.start < e.end));
    }
}
