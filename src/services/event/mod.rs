//! Calendar event store entry point.
//! Keeps events in memory in insertion order and organizes validation,
//! overlap queries and colour assignment across focused submodules.

use crate::models::event::Event;
use crate::models::settings::Settings;

pub mod crud;
pub mod error;
pub mod index;
pub mod palette;
pub mod queries;
pub mod validation;

pub use error::{StoreError, StoreResult, ValidationErrors};

use palette::ColorCycle;
use validation::ValidationRules;

/// In-memory collection of calendar events.
///
/// The store owns its records: lookups hand out clones or shared borrows,
/// and every mutation goes through `add`, `update` or `remove`.
#[derive(Debug, Clone)]
pub struct EventStore {
    pub(crate) events: Vec<Event>,
    pub(crate) rules: ValidationRules,
    pub(crate) colors: ColorCycle,
    pub(crate) new_event_title: String,
}

impl EventStore {
    /// Create an empty store with default settings
    pub fn new() -> Self {
        Self::with_settings(&Settings::default())
    }

    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            events: Vec::new(),
            rules: ValidationRules::from(settings),
            colors: ColorCycle::new(settings.palette.clone()),
            new_event_title: settings.new_event_title.clone(),
        }
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Every event, in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub(crate) fn position_of(&self, id: &str) -> Option<usize> {
        self.events.iter().position(|event| event.id == id)
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}
