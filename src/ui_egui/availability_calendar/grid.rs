//! Month grid model for the availability calendar.
//!
//! Kept free of egui so the cell precedence rules can be unit tested.

use super::state::CalendarState;
use crate::utils::date::{days_in_month, first_weekday_of_month};

/// Which single period is already taken on an otherwise open day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartialBooking {
    None,
    MorningBooked,
    AfternoonBooked,
}

/// How a day cell renders, by precedence: booked/past, pending, selected, open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStatus {
    /// Fully booked or in the past; not clickable
    Booked,
    Pending,
    Selected,
    Open(PartialBooking),
}

impl CellStatus {
    pub fn is_interactive(&self) -> bool {
        !matches!(self, CellStatus::Booked)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    /// Leading filler before the first of the month
    Blank,
    Day { day: u32, status: CellStatus },
}

impl CalendarState {
    /// Cells for the viewed month: one blank per weekday before the 1st
    /// (Sunday first), then every day of the month.
    pub fn month_grid(&self) -> Vec<GridCell> {
        let (month, year) = (self.viewing_month(), self.viewing_year());
        let leading = first_weekday_of_month(year, month) as usize;
        let days = days_in_month(year, month);

        let mut cells = Vec::with_capacity(leading + days as usize);
        cells.extend(std::iter::repeat(GridCell::Blank).take(leading));
        cells.extend((1..=days).map(|day| GridCell::Day {
            day,
            status: self.cell_status(day),
        }));
        cells
    }

    /// Status of `day` in the viewed month.
    pub fn cell_status(&self, day: u32) -> CellStatus {
        let (month, year) = (self.viewing_month(), self.viewing_year());
        let bookings = self.ledger().booked_periods(day, month, year);

        if bookings.is_fully_booked() || self.is_past_date(day, month, year) {
            return CellStatus::Booked;
        }
        if self.pending_day() == Some(day) {
            return CellStatus::Pending;
        }
        if self.selection().is_some_and(|s| s.is_on(day, month, year)) {
            return CellStatus::Selected;
        }
        let partial = match (bookings.morning, bookings.afternoon) {
            (true, false) => PartialBooking::MorningBooked,
            (false, true) => PartialBooking::AfternoonBooked,
            _ => PartialBooking::None,
        };
        CellStatus::Open(partial)
    }
}
