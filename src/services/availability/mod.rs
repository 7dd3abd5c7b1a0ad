//! Booked-slot lookup for the tour calendar.
//!
//! The ledger is built once from the booking feed and never mutated; the
//! calendar only ever asks whether a given (date, period) is taken.

mod loader;

pub use loader::load_booked_entries;

use crate::models::booking::{BookedEntry, Period};
use std::collections::HashSet;

/// Booked status of both periods on one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayBookings {
    pub morning: bool,
    pub afternoon: bool,
}

impl DayBookings {
    pub fn is_fully_booked(&self) -> bool {
        self.morning && self.afternoon
    }

    pub fn is_booked(&self, period: Period) -> bool {
        match period {
            Period::Morning => self.morning,
            Period::Afternoon => self.afternoon,
            Period::Unknown => false,
        }
    }
}

/// Immutable set of booked (day, month, year, period) entries.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityLedger {
    booked: HashSet<BookedEntry>,
}

impl AvailabilityLedger {
    /// Collect entries; duplicates collapse and unknown periods are dropped.
    pub fn new(entries: impl IntoIterator<Item = BookedEntry>) -> Self {
        let booked = entries
            .into_iter()
            .filter(|entry| entry.period.is_known())
            .collect();
        Self { booked }
    }

    pub fn is_slot_booked(&self, day: u32, month: u32, year: i32, period: Period) -> bool {
        period.is_known()
            && self
                .booked
                .contains(&BookedEntry::new(day, month, year, period))
    }

    pub fn is_fully_booked(&self, day: u32, month: u32, year: i32) -> bool {
        self.booked_periods(day, month, year).is_fully_booked()
    }

    pub fn booked_periods(&self, day: u32, month: u32, year: i32) -> DayBookings {
        DayBookings {
            morning: self.is_slot_booked(day, month, year, Period::Morning),
            afternoon: self.is_slot_booked(day, month, year, Period::Afternoon),
        }
    }

    /// Number of distinct booked slots.
    pub fn len(&self) -> usize {
        self.booked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.booked.is_empty()
    }
}
