// Service module exports

pub mod availability;
pub mod settings;
