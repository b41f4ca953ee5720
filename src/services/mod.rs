// Service module exports

pub mod event;
pub mod navigation;
pub mod settings;
