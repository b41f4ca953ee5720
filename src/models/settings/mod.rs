// Settings module
// User-tunable defaults for the event store and form

use serde::{Deserialize, Serialize};

use crate::services::event::palette::{DEFAULT_CATEGORIES, DEFAULT_PALETTE};
use crate::services::event::validation::{MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Colours handed out to events created without one
    pub palette: Vec<String>,
    pub categories: Vec<String>,
    pub max_title_length: usize,
    pub max_description_length: usize,
    /// Title given to events created by selecting a slot range
    pub new_event_title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            max_title_length: MAX_TITLE_LENGTH,
            max_description_length: MAX_DESCRIPTION_LENGTH,
            new_event_title: "New Event".to_string(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.palette.is_empty() {
            return Err("Palette must contain at least one colour".to_string());
        }
        if self.max_title_length == 0 {
            return Err("Maximum title length must be positive".to_string());
        }
        if self.max_description_length == 0 {
            return Err("Maximum description length must be positive".to_string());
        }
        if self.new_event_title.trim().is_empty()
            || self.new_event_title.chars().count() > self.max_title_length
        {
            return Err("New event title must fit the title length limit".to_string());
        }
        Ok(())
    }
}
