// Date utility functions
// Month grid and day slot generation plus small date helpers
//
// Grid and week helpers return `None` when the requested cells would fall
// outside chrono's representable date range.

use chrono::{Datelike, Days, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::calendar::{DayCell, TimeSlot, SLOTS_PER_DAY};

/// Six weeks of seven days.
pub const GRID_CELLS: usize = 42;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    // The 1st of a representable date's month is itself representable.
    date - Days::new(u64::from(date.day0()))
}

/// Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_sunday())))
}

/// Build the 42 consecutive dates shown by a month view.
///
/// The first cell is the Sunday on or before the 1st of `reference`'s month,
/// so leading and trailing days of the adjacent months fill the grid. The
/// result depends only on the year and month of `reference`. Returns `None`
/// for the first and last months of chrono's range, whose grids would need
/// unrepresentable days.
pub fn build_month_grid(reference: NaiveDate) -> Option<Vec<NaiveDate>> {
    let start = week_start(first_of_month(reference))?;
    (0..GRID_CELLS as u64)
        .map(|offset| start.checked_add_days(Days::new(offset)))
        .collect()
}

/// Month grid with each date classified against `reference`'s month and `today`.
pub fn month_cells(reference: NaiveDate, today: NaiveDate) -> Option<Vec<DayCell>> {
    let cells = build_month_grid(reference)?
        .into_iter()
        .map(|date| DayCell {
            date,
            is_current_month: is_same_month(date, reference),
            is_today: date == today,
        })
        .collect();
    Some(cells)
}

/// The 48 half-hour slots of a day, 00:00 through 23:30.
pub fn build_day_slots() -> Vec<TimeSlot> {
    (0..SLOTS_PER_DAY).filter_map(TimeSlot::from_index).collect()
}

pub fn slot_index(hour: u32, minute: u32) -> Option<usize> {
    TimeSlot::new(hour, minute).map(|slot| slot.index())
}

pub fn slot_time(index: usize) -> Option<TimeSlot> {
    TimeSlot::from_index(index)
}

/// The Sunday-first week containing `date`.
pub fn week_days(date: NaiveDate) -> Option<[NaiveDate; 7]> {
    let start = week_start(date)?;
    let end = start.checked_add_days(Days::new(6))?;
    let mut days = [end; 7];
    for (offset, day) in days.iter_mut().enumerate() {
        *day = start + Days::new(offset as u64);
    }
    Some(days)
}

pub fn weekday_labels() -> [&'static str; 7] {
    WEEKDAY_LABELS
}

/// Whole days from `start` to `end`, truncated toward zero.
pub fn days_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_days()
}

pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = first_of_month(date);
    match first.checked_add_months(Months::new(1)) {
        Some(next) => (next - first).num_days() as u32,
        // Only December of the last representable year has no successor
        None => 31,
    }
}

/// Shift by whole months, clamping the day to the end of the target month.
///
/// Returns `None` when the result falls outside chrono's date range.
pub fn add_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    if months >= 0 {
        date.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    }
}

pub fn is_same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

pub fn is_same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

pub fn start_of_day(date: NaiveDateTime) -> NaiveDateTime {
    date.date().and_time(NaiveTime::MIN)
}

pub fn end_of_day(date: NaiveDateTime) -> NaiveDateTime {
    // Stays within the same day, so it cannot leave the date range
    start_of_day(date) + (Duration::days(1) - Duration::seconds(1))
}

pub fn format_time(date: NaiveDateTime) -> String {
    date.format(TIME_FORMAT).to_string()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_date_time(date: NaiveDateTime) -> String {
    date.format(DATE_TIME_FORMAT).to_string()
}

/// Heading for a month view, e.g. "October 2026".
pub fn month_title(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}
