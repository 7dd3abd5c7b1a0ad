mod app;
pub mod availability_calendar;
pub mod theme;

pub use app::TourRequestApp;
pub use availability_calendar::AvailabilityCalendar;
