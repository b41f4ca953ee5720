// Calendar grid models
// Day cells for the month view, half-hour slots for the week view

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Number of half-hour slots in one day.
pub const SLOTS_PER_DAY: usize = 48;

/// Length of a single slot in minutes.
pub const SLOT_MINUTES: i64 = 30;

/// Which grid the calendar is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarView {
    #[default]
    Month,
    Week,
}

/// One cell of the 42-day month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub is_today: bool,
}

/// A half-hour bucket of a day, `hour` in `0..24` and `minute` in `{0, 30}`.
///
/// Only [`TimeSlot::new`] and [`TimeSlot::from_index`] build one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeSlot {
    hour: u32,
    minute: u32,
}

impl TimeSlot {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && (minute == 0 || minute == 30)).then_some(Self { hour, minute })
    }

    /// Inverse of [`TimeSlot::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= SLOTS_PER_DAY {
            return None;
        }
        Some(Self {
            hour: (index / 2) as u32,
            minute: if index % 2 == 0 { 0 } else { 30 },
        })
    }

    /// Position of the slot within the day: `hour * 2 + (minute == 30)`.
    pub fn index(&self) -> usize {
        self.hour as usize * 2 + usize::from(self.minute == 30)
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn start_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or(NaiveTime::MIN)
    }

    pub fn start_on(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.start_time())
    }

    /// Exclusive end of this slot on `date`.
    ///
    /// The last slot of the day ends at midnight of the following day, which
    /// does not exist for the 23:30 slot of `NaiveDate::MAX`.
    pub fn end_on(&self, date: NaiveDate) -> Option<NaiveDateTime> {
        self.start_on(date).checked_add_signed(Duration::minutes(SLOT_MINUTES))
    }

    /// Half-open `[start, end)` window of this slot on `date`.
    pub fn window(&self, date: NaiveDate) -> Option<(NaiveDateTime, NaiveDateTime)> {
        Some((self.start_on(date), self.end_on(date)?))
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Placement of an event on the slot grid, in slot units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotPosition {
    pub offset_slots: f64,
    pub duration_slots: f64,
}

impl SlotPosition {
    /// Scale to pixel offsets for a grid whose slots are `slot_height` tall.
    pub fn scaled(&self, slot_height: f64) -> (f64, f64) {
        (self.offset_slots * slot_height, self.duration_slots * slot_height)
    }
}
