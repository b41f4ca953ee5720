// Module exports for models

pub mod calendar;
pub mod event;
pub mod form;
pub mod settings;
