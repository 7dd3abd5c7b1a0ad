// Module exports for models

pub mod booking;
pub mod settings;
pub mod tour_request;
