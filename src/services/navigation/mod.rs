// Navigation state
// Tracks the displayed month/week, the active view and the selected day

use chrono::NaiveDate;

use crate::models::calendar::{CalendarView, DayCell};
use crate::utils::date::{add_months, first_of_month, month_cells, month_title, week_days};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarState {
    pub current_date: NaiveDate,
    pub view: CalendarView,
    pub selected_date: Option<NaiveDate>,
}

impl CalendarState {
    pub fn new(initial_date: NaiveDate, view: CalendarView) -> Self {
        Self {
            current_date: initial_date,
            view,
            selected_date: None,
        }
    }

    /// Step forward one month. Returns `false`, leaving the state
    /// untouched, when the step would leave the representable date range.
    pub fn next_month(&mut self) -> bool {
        self.shift_months(1)
    }

    pub fn previous_month(&mut self) -> bool {
        self.shift_months(-1)
    }

    fn shift_months(&mut self, months: i32) -> bool {
        match add_months(self.current_date, months) {
            Some(date) => {
                self.current_date = date;
                true
            }
            None => {
                log::debug!("Cannot move {} months from {}", months, self.current_date);
                false
            }
        }
    }

    /// Jump to `today` and select it.
    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.current_date = today;
        self.selected_date = Some(today);
    }

    pub fn set_view(&mut self, view: CalendarView) {
        self.view = view;
    }

    pub fn select_date(&mut self, date: Option<NaiveDate>) {
        self.selected_date = date;
    }

    pub fn set_current_date(&mut self, date: NaiveDate) {
        self.current_date = date;
    }

    /// Show the month containing `date` and select `date`.
    pub fn go_to_date(&mut self, date: NaiveDate) {
        self.current_date = first_of_month(date);
        self.selected_date = Some(date);
    }

    /// Month grid for the displayed month, `None` at the ends of the date range.
    pub fn grid(&self, today: NaiveDate) -> Option<Vec<DayCell>> {
        month_cells(self.current_date, today)
    }

    /// Sunday-first week containing the displayed date.
    pub fn week(&self) -> Option<[NaiveDate; 7]> {
        week_days(self.current_date)
    }

    pub fn title(&self) -> String {
        month_title(self.current_date)
    }
}
