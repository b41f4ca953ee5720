use std::fmt;

use thiserror::Error;

/// Ordered list of rule violations for one candidate event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    pub fn new(messages: Vec<String>) -> Self {
        Self(messages)
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn into_messages(self) -> Vec<String> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

/// Errors returned by event store operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Invalid event: {0}")]
    Validation(ValidationErrors),

    #[error("Event with id {0} not found")]
    NotFound(String),
}

impl StoreError {
    /// Validation messages, empty for other kinds.
    pub fn messages(&self) -> &[String] {
        match self {
            StoreError::Validation(errors) => errors.messages(),
            StoreError::NotFound(_) => &[],
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
