//! Field and ordering checks for candidate events.

use crate::models::event::EventDraft;
use crate::models::settings::Settings;

pub const MAX_TITLE_LENGTH: usize = 100;
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Length limits applied by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub max_title_length: usize,
    pub max_description_length: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            max_title_length: MAX_TITLE_LENGTH,
            max_description_length: MAX_DESCRIPTION_LENGTH,
        }
    }
}

impl From<&Settings> for ValidationRules {
    fn from(settings: &Settings) -> Self {
        Self {
            max_title_length: settings.max_title_length,
            max_description_length: settings.max_description_length,
        }
    }
}

impl ValidationRules {
    /// Check every rule and return the messages of all that fail, in a fixed
    /// order. An empty result means the candidate is valid.
    pub fn validate(&self, candidate: &EventDraft) -> Vec<String> {
        let mut errors = Vec::new();

        if candidate.title.trim().is_empty() {
            errors.push("Title is required".to_string());
        }

        if candidate.title.chars().count() > self.max_title_length {
            errors.push(format!(
                "Title must be {} characters or less",
                self.max_title_length
            ));
        }

        if let Some(description) = &candidate.description {
            if description.chars().count() > self.max_description_length {
                errors.push(format!(
                    "Description must be {} characters or less",
                    self.max_description_length
                ));
            }
        }

        if candidate.start.is_none() {
            errors.push("Start date is required".to_string());
        }

        if candidate.end.is_none() {
            errors.push("End date is required".to_string());
        }

        if let (Some(start), Some(end)) = (candidate.start, candidate.end) {
            if start >= end {
                errors.push("End date must be after start date".to_string());
            }
        }

        errors
    }
}

/// Validate with the default limits.
pub fn validate(candidate: &EventDraft) -> Vec<String> {
    ValidationRules::default().validate(candidate)
}
