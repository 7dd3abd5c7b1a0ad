use chrono::{Datelike, NaiveDate};

use crate::models::booking::{slot_date, Period, Selection};
use crate::services::availability::AvailabilityLedger;
use crate::utils::date::{days_in_month, is_before, shift_month};

/// View, pending day and confirmed selection of the availability calendar.
///
/// The pending day and the confirmed selection are independent: picking a
/// new day only reopens the period picker, the selection changes on a
/// period click alone.
#[derive(Debug, Clone)]
pub struct CalendarState {
    ledger: AvailabilityLedger,
    today: NaiveDate,
    viewing_month: u32,
    viewing_year: i32,
    pending_day: Option<u32>,
    selection: Option<Selection>,
}

impl CalendarState {
    /// Start on `today`'s month with nothing picked.
    pub fn new(ledger: AvailabilityLedger, today: NaiveDate) -> Self {
        Self {
            ledger,
            today,
            viewing_month: today.month0(),
            viewing_year: today.year(),
            pending_day: None,
            selection: None,
        }
    }

    /// Pre-highlight a previously confirmed slot. Slots with an unknown
    /// period or a date that does not exist are dropped.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        if selection.period.is_known() && selection.date().is_some() {
            self.selection = Some(selection);
        }
        self
    }

    pub fn ledger(&self) -> &AvailabilityLedger {
        &self.ledger
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Move the clock forward, e.g. when the widget stays open past midnight.
    ///
    /// A view left behind the new current month jumps to it, and a pending
    /// day that is now in the past is closed. The confirmed selection is kept.
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
        if (self.viewing_year, self.viewing_month) < (today.year(), today.month0()) {
            self.set_view(today.year(), today.month0());
        }
        if let Some(day) = self.pending_day {
            if !self.is_day_selectable(day) {
                self.pending_day = None;
            }
        }
    }

    /// Zero-based month currently displayed.
    pub fn viewing_month(&self) -> u32 {
        self.viewing_month
    }

    pub fn viewing_year(&self) -> i32 {
        self.viewing_year
    }

    pub fn pending_day(&self) -> Option<u32> {
        self.pending_day
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// "Previous" is disabled once the view reaches today's month.
    pub fn can_go_to_previous_month(&self) -> bool {
        let target = shift_month(self.viewing_year, self.viewing_month, -1);
        target >= (self.today.year(), self.today.month0())
    }

    /// Returns `false` when navigation is blocked.
    pub fn go_to_previous_month(&mut self) -> bool {
        if !self.can_go_to_previous_month() {
            return false;
        }
        let (year, month) = shift_month(self.viewing_year, self.viewing_month, -1);
        self.set_view(year, month);
        true
    }

    pub fn go_to_next_month(&mut self) {
        let (year, month) = shift_month(self.viewing_year, self.viewing_month, 1);
        self.set_view(year, month);
    }

    fn set_view(&mut self, year: i32, month: u32) {
        self.viewing_year = year;
        self.viewing_month = month;
        self.pending_day = None;
    }

    pub fn is_slot_booked(&self, day: u32, month: u32, year: i32, period: Period) -> bool {
        self.ledger.is_slot_booked(day, month, year, period)
    }

    pub fn is_fully_booked(&self, day: u32, month: u32, year: i32) -> bool {
        self.ledger.is_fully_booked(day, month, year)
    }

    pub fn is_past_date(&self, day: u32, month: u32, year: i32) -> bool {
        is_before(day, month, year, self.today)
    }

    /// Whether a day of the viewed month may be opened in the period picker.
    pub fn is_day_selectable(&self, day: u32) -> bool {
        let (month, year) = (self.viewing_month, self.viewing_year);
        (1..=days_in_month(year, month)).contains(&day)
            && !self.is_fully_booked(day, month, year)
            && !self.is_past_date(day, month, year)
    }

    /// Open the period picker for `day` of the viewed month.
    ///
    /// Fully booked and past days are ignored. Returns whether the pending
    /// day was set.
    pub fn on_day_click(&mut self, day: u32) -> bool {
        if !self.is_day_selectable(day) {
            return false;
        }
        self.pending_day = Some(day);
        true
    }

    /// Confirm a period. Booked slots, past or nonexistent dates and unknown
    /// periods are ignored; on success the new selection is returned for the
    /// parent.
    pub fn on_period_click(
        &mut self,
        day: u32,
        month: u32,
        year: i32,
        period: Period,
    ) -> Option<Selection> {
        if !period.is_known()
            || slot_date(day, month, year).is_none()
            || self.is_slot_booked(day, month, year, period)
            || self.is_past_date(day, month, year)
        {
            return None;
        }
        let selection = Selection::new(day, month, year, period);
        self.selection = Some(selection);
        Some(selection)
    }

    /// Drop the confirmed slot, e.g. after the parent form submitted it.
    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.pending_day = None;
    }

    /// Period picker contents for the pending day, if one is open.
    pub fn period_panel(&self) -> Option<PeriodPanel> {
        let day = self.pending_day?;
        let (month, year) = (self.viewing_month, self.viewing_year);
        let bookings = self.ledger.booked_periods(day, month, year);
        let options = Period::ALL.map(|period| PeriodOption {
            period,
            booked: bookings.is_booked(period),
            selected: self
                .selection
                .is_some_and(|s| s.is_on(day, month, year) && s.period == period),
        });
        Some(PeriodPanel {
            day,
            month,
            year,
            options,
        })
    }
}

/// The two periods of the pending day with their booked/selected flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodPanel {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub options: [PeriodOption; 2],
}

impl PeriodPanel {
    pub fn date(&self) -> Option<NaiveDate> {
        slot_date(self.day, self.month, self.year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodOption {
    pub period: Period,
    pub booked: bool,
    pub selected: bool,
}
