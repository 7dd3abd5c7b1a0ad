// Booking module
// Tour slots, booked entries and confirmed selections shared by every layer

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One of the two fixed daily tour windows.
///
/// Booking data is parsed leniently: labels other than `morning` and
/// `afternoon` become [`Period::Unknown`], which never matches a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Morning,
    Afternoon,
    Unknown,
}

impl Period {
    /// The periods offered for every day, in display order.
    pub const ALL: [Period; 2] = [Period::Morning, Period::Afternoon];

    /// Parse a booking label, case-insensitively.
    ///
    /// # Examples
    /// ```
    /// use tour_calendar::models::booking::Period;
    ///
    /// assert_eq!(Period::from_label("Morning"), Period::Morning);
    /// assert_eq!(Period::from_label("evening"), Period::Unknown);
    /// ```
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "morning" => Period::Morning,
            "afternoon" => Period::Afternoon,
            _ => Period::Unknown,
        }
    }

    /// Wire label used in booking data and callbacks.
    pub fn label(&self) -> &'static str {
        match self {
            Period::Morning => "morning",
            Period::Afternoon => "afternoon",
            Period::Unknown => "unknown",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Period::Morning => "Morning",
            Period::Afternoon => "Afternoon",
            Period::Unknown => "Unknown",
        }
    }

    /// Start and end of the tour window (08:00-11:00 or 13:00-17:00).
    pub fn time_window(&self) -> Option<(NaiveTime, NaiveTime)> {
        let (start, end) = match self {
            Period::Morning => (8, 11),
            Period::Afternoon => (13, 17),
            Period::Unknown => return None,
        };
        Some((
            NaiveTime::from_hms_opt(start, 0, 0)?,
            NaiveTime::from_hms_opt(end, 0, 0)?,
        ))
    }

    /// Human readable window such as `8:00 AM - 11:00 AM`.
    pub fn window_label(&self) -> String {
        match self.time_window() {
            Some((start, end)) => format!("{} - {}", start.format("%-I:%M %p"), end.format("%-I:%M %p")),
            None => String::new(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Period::Unknown)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Period::from_label(&raw))
    }
}

/// Date named by a (day, zero-based month, year) triple, if it exists.
pub fn slot_date(day: u32, month: u32, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month.checked_add(1)?, day)
}

/// A booked (date, period) pair supplied by the listing backend.
///
/// `month` is zero-based (0 = January) to match the booking feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookedEntry {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub period: Period,
}

impl BookedEntry {
    pub fn new(day: u32, month: u32, year: i32, period: Period) -> Self {
        Self {
            day,
            month,
            year,
            period,
        }
    }
}

/// A confirmed tour slot. Only the period picker produces these, so a
/// selection always carries a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub day: u32,
    /// Zero-based month (0 = January)
    pub month: u32,
    pub year: i32,
    pub period: Period,
}

impl Selection {
    pub fn new(day: u32, month: u32, year: i32, period: Period) -> Self {
        Self {
            day,
            month,
            year,
            period,
        }
    }

    /// Whether this selection falls on the given day.
    pub fn is_on(&self, day: u32, month: u32, year: i32) -> bool {
        self.day == day && self.month == month && self.year == year
    }

    /// Calendar date of the selection, if the triple names a real day.
    pub fn date(&self) -> Option<NaiveDate> {
        slot_date(self.day, self.month, self.year)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.date() {
            Some(date) => write!(f, "{} ({})", date.format("%A, %B %-d, %Y"), self.period),
            None => write!(
                f,
                "{}/{}/{} ({})",
                self.month.saturating_add(1),
                self.day,
                self.year,
                self.period
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("morning", Period::Morning ; "lowercase morning")]
    #[test_case("AFTERNOON", Period::Afternoon ; "uppercase afternoon")]
    #[test_case(" morning ", Period::Morning ; "padded label")]
    #[test_case("evening", Period::Unknown ; "unsupported label")]
    #[test_case("", Period::Unknown ; "empty label")]
    fn test_period_from_label(label: &str, expected: Period) {
        assert_eq!(Period::from_label(label), expected);
    }

    #[test]
    fn test_period_time_windows() {
        let (start, end) = Period::Morning.time_window().unwrap();
        assert_eq!(start, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert_eq!(end, NaiveTime::from_hms_opt(11, 0, 0).unwrap());

        let (start, end) = Period::Afternoon.time_window().unwrap();
        assert_eq!(start, NaiveTime::from_hms_opt(13, 0, 0).unwrap());
        assert_eq!(end, NaiveTime::from_hms_opt(17, 0, 0).unwrap());

        assert!(Period::Unknown.time_window().is_none());
    }

    #[test]
    fn test_window_label() {
        assert_eq!(Period::Morning.window_label(), "8:00 AM - 11:00 AM");
        assert_eq!(Period::Afternoon.window_label(), "1:00 PM - 5:00 PM");
    }

    #[test]
    fn test_booked_entry_tolerates_unknown_period() {
        let json = r#"{"day": 3, "month": 1, "year": 2026, "period": "evening"}"#;
        let entry: BookedEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.period, Period::Unknown);
        assert_eq!(entry.month, 1);
    }

    #[test]
    fn test_selection_date_uses_zero_based_month() {
        let selection = Selection::new(20, 6, 2025, Period::Afternoon);
        assert_eq!(selection.date(), NaiveDate::from_ymd_opt(2025, 7, 20));
        assert!(selection.is_on(20, 6, 2025));
        assert!(!selection.is_on(20, 7, 2025));
    }

    #[test]
    fn test_slot_date_rejects_missing_days() {
        assert_eq!(slot_date(30, 8, 2025), NaiveDate::from_ymd_opt(2025, 9, 30));
        assert_eq!(slot_date(31, 8, 2025), None);
        assert_eq!(slot_date(0, 7, 2025), None);
        assert_eq!(slot_date(1, 12, 2025), None);
        assert_eq!(slot_date(1, u32::MAX, 2025), None);
        assert_eq!(slot_date(29, 1, 2024), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(slot_date(29, 1, 2025), None);
    }

    #[test]
    fn test_selection_with_overflowing_month_formats() {
        let selection = Selection::new(1, u32::MAX, 2025, Period::Morning);
        assert_eq!(selection.date(), None);
        assert_eq!(selection.to_string(), format!("{}/1/2025 (morning)", u32::MAX));
    }

    #[test]
    fn test_selection_display() {
        let selection = Selection::new(20, 6, 2025, Period::Afternoon);
        assert_eq!(selection.to_string(), "Sunday, July 20, 2025 (afternoon)");

        let invalid = Selection::new(31, 1, 2025, Period::Morning);
        assert_eq!(invalid.to_string(), "2/31/2025 (morning)");
    }
}
