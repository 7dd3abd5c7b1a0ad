// Test fixtures - reusable test data
// Provides consistent booking data across all test files
#![allow(dead_code)]

use chrono::NaiveDate;
use tour_calendar::models::booking::{BookedEntry, Period};
use tour_calendar::ui_egui::AvailabilityCalendar;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns July 1, 2025
    pub fn july_1_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
    }

    /// Returns July 30, 2025
    pub fn july_30_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 30).unwrap()
    }
}

/// Booked tour slots for July 2025 (month 6)
pub mod bookings {
    use super::*;

    /// Day 5 fully booked, day 20 morning only, day 22 afternoon only
    pub fn july_2025() -> Vec<BookedEntry> {
        vec![
            BookedEntry::new(5, 6, 2025, Period::Morning),
            BookedEntry::new(5, 6, 2025, Period::Afternoon),
            BookedEntry::new(20, 6, 2025, Period::Morning),
            BookedEntry::new(22, 6, 2025, Period::Afternoon),
        ]
    }

    pub fn as_json() -> &'static str {
        r#"[
            {"day": 5, "month": 6, "year": 2025, "period": "morning"},
            {"day": 5, "month": 6, "year": 2025, "period": "afternoon"},
            {"day": 20, "month": 6, "year": 2025, "period": "morning"},
            {"day": 22, "month": 6, "year": 2025, "period": "afternoon"},
            {"day": 23, "month": 6, "year": 2025, "period": "late night"}
        ]"#
    }
}

/// Calendar viewing July 2025 with today on July 1
pub fn july_calendar() -> AvailabilityCalendar {
    AvailabilityCalendar::with_today(bookings::july_2025(), dates::july_1_2025())
}
