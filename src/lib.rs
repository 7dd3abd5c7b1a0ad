// Tour Calendar Library
// Availability calendar, booking models and services for property tour requests

pub mod models;
pub mod services;
pub mod ui_egui;
pub mod utils;
