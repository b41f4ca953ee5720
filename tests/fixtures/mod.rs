// Test fixtures - reusable test data
// Provides consistent dates and event drafts across integration tests
#![allow(dead_code)]

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_calendar_core::models::event::{Event, EventDraft};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Jan 1, 2025 at midnight
    pub fn jan_1_2025() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    /// Returns Feb 14, 2025 at 14:00 (Valentine's Day)
    pub fn valentine_2025() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 2, 14)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap()
    }

    /// Returns Dec 31, 2025 at 23:30, the last slot of the year
    pub fn new_years_eve_2025() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 12, 31)
            .unwrap()
            .and_hms_opt(23, 30, 0)
            .unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    /// Monday 19 October 2026 at the given wall-clock time
    pub fn monday(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }
}

/// Sample event drafts for testing
pub mod drafts {
    use super::*;

    /// One-hour meeting at 10:00 on the Monday fixture
    pub fn meeting() -> EventDraft {
        Event::builder()
            .title("Meeting")
            .start(dates::monday(10, 0))
            .end(dates::monday(11, 0))
            .category("Meeting")
            .build()
    }

    pub fn spanning(title: &str, start: NaiveDateTime, minutes: i64) -> EventDraft {
        Event::builder()
            .title(title)
            .start(start)
            .end(start + Duration::minutes(minutes))
            .build()
    }
}
