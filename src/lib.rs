// Rust Calendar Core Library
// Month/week grid computation, event overlap queries and the in-memory event store

pub mod models;
pub mod services;
pub mod utils;

pub use models::calendar::{CalendarView, DayCell, SlotPosition, TimeSlot};
pub use models::event::{Event, EventDraft, EventPatch};
pub use services::event::index::{events_in_slot, events_on_date, position};
pub use services::event::validation::validate;
pub use services::event::{EventStore, StoreError};
pub use utils::date::{build_day_slots, build_month_grid};
