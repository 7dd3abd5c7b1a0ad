//! Embeddable tour availability calendar.
//!
//! The widget shows a navigable month grid, lets the visitor open a day and
//! then confirm a morning or afternoon period. Every confirmed period is
//! reported once through the optional `on_select` callback and as the return
//! value of [`AvailabilityCalendar::show`].

mod grid;
mod render;
mod state;

pub use grid::{CellStatus, GridCell, PartialBooking};
pub use state::{CalendarState, PeriodOption, PeriodPanel};

use crate::models::booking::{BookedEntry, Period, Selection};
use crate::services::availability::AvailabilityLedger;
use chrono::{Local, NaiveDate};

type SelectCallback = Box<dyn FnMut(&Selection)>;

/// A click resolved during rendering, applied once the frame's UI is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarInteraction {
    PreviousMonth,
    NextMonth,
    Day(u32),
    Period {
        day: u32,
        month: u32,
        year: i32,
        period: Period,
    },
}

pub struct AvailabilityCalendar {
    state: CalendarState,
    on_select: Option<SelectCallback>,
    /// Re-read the local date every frame; off when `today` was injected
    follow_local_clock: bool,
}

impl AvailabilityCalendar {
    /// Calendar anchored on the local current date.
    pub fn new(booked_entries: impl IntoIterator<Item = BookedEntry>) -> Self {
        Self {
            follow_local_clock: true,
            ..Self::with_today(booked_entries, Local::now().date_naive())
        }
    }

    pub fn with_today(booked_entries: impl IntoIterator<Item = BookedEntry>, today: NaiveDate) -> Self {
        Self {
            state: CalendarState::new(AvailabilityLedger::new(booked_entries), today),
            on_select: None,
            follow_local_clock: false,
        }
    }

    /// Pre-highlight a previously confirmed slot. Does not fire `on_select`.
    pub fn initial_selection(mut self, selection: Selection) -> Self {
        self.state = self.state.with_selection(selection);
        self
    }

    /// Register the parent's selection callback.
    pub fn on_select(mut self, callback: impl FnMut(&Selection) + 'static) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    pub fn state(&self) -> &CalendarState {
        &self.state
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.state.selection()
    }

    pub fn go_to_previous_month(&mut self) -> bool {
        self.state.go_to_previous_month()
    }

    pub fn go_to_next_month(&mut self) {
        self.state.go_to_next_month();
    }

    pub fn on_day_click(&mut self, day: u32) -> bool {
        self.state.on_day_click(day)
    }

    /// Confirm a period and notify the parent; ignored clicks return `None`.
    pub fn on_period_click(
        &mut self,
        day: u32,
        month: u32,
        year: i32,
        period: Period,
    ) -> Option<Selection> {
        let selection = self.state.on_period_click(day, month, year, period)?;
        log::debug!("Tour slot confirmed: {}", selection);
        if let Some(callback) = self.on_select.as_mut() {
            callback(&selection);
        }
        Some(selection)
    }

    pub fn clear_selection(&mut self) {
        self.state.clear_selection();
    }

    /// Advance the calendar's notion of today; earlier dates never move it back.
    pub fn refresh_today(&mut self, today: NaiveDate) {
        if today > self.state.today() {
            log::debug!("Calendar date rolled over to {}", today);
            self.state.set_today(today);
        }
    }

    fn follows_local_clock(&self) -> bool {
        self.follow_local_clock
    }

    /// Apply a click collected by the renderer.
    pub fn apply(&mut self, interaction: CalendarInteraction) -> Option<Selection> {
        match interaction {
            CalendarInteraction::PreviousMonth => {
                self.go_to_previous_month();
                None
            }
            CalendarInteraction::NextMonth => {
                self.go_to_next_month();
                None
            }
            CalendarInteraction::Day(day) => {
                self.on_day_click(day);
                None
            }
            CalendarInteraction::Period {
                day,
                month,
                year,
                period,
            } => self.on_period_click(day, month, year, period),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_callback_fires_once_per_confirmed_period() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let mut calendar = AvailabilityCalendar::with_today(
            vec![BookedEntry::new(20, 6, 2025, Period::Morning)],
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        )
        .on_select(move |selection| sink.borrow_mut().push(*selection));

        calendar.apply(CalendarInteraction::Day(20));
        calendar.apply(CalendarInteraction::Period {
            day: 20,
            month: 6,
            year: 2025,
            period: Period::Morning,
        });
        assert!(calls.borrow().is_empty());

        let confirmed = calendar.apply(CalendarInteraction::Period {
            day: 20,
            month: 6,
            year: 2025,
            period: Period::Afternoon,
        });
        assert_eq!(confirmed, Some(Selection::new(20, 6, 2025, Period::Afternoon)));
        assert_eq!(*calls.borrow(), vec![Selection::new(20, 6, 2025, Period::Afternoon)]);
    }

    #[test]
    fn test_initial_selection_does_not_notify() {
        let calls = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&calls);
        let initial = Selection::new(12, 6, 2025, Period::Morning);
        let calendar = AvailabilityCalendar::with_today(
            Vec::new(),
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        )
        .initial_selection(initial)
        .on_select(move |_| *sink.borrow_mut() += 1);

        assert_eq!(calendar.selection(), Some(&initial));
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_refresh_today_only_moves_forward() {
        let mut calendar = AvailabilityCalendar::with_today(
            Vec::new(),
            NaiveDate::from_ymd_opt(2025, 7, 10).unwrap(),
        );
        calendar.on_day_click(10);

        calendar.refresh_today(NaiveDate::from_ymd_opt(2025, 7, 9).unwrap());
        assert_eq!(calendar.state().today(), NaiveDate::from_ymd_opt(2025, 7, 10).unwrap());
        assert_eq!(calendar.state().pending_day(), Some(10));

        calendar.refresh_today(NaiveDate::from_ymd_opt(2025, 7, 11).unwrap());
        assert_eq!(calendar.state().today(), NaiveDate::from_ymd_opt(2025, 7, 11).unwrap());
        assert_eq!(calendar.state().pending_day(), None);
        assert!(!calendar.follows_local_clock());
    }

    #[test]
    fn test_navigation_interactions() {
        let mut calendar = AvailabilityCalendar::with_today(
            Vec::new(),
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        );
        assert_eq!(calendar.apply(CalendarInteraction::PreviousMonth), None);
        assert_eq!(calendar.state().viewing_month(), 6);
        calendar.apply(CalendarInteraction::NextMonth);
        assert_eq!(calendar.state().viewing_month(), 7);
    }
}
