// Date utility functions
// Month arithmetic on zero-based months (0 = January)

use chrono::{Datelike, NaiveDate};

/// Number of days in a month, following the Gregorian leap-year rule.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    let (next_year, next_month) = if month0 >= 11 {
        (year + 1, 1)
    } else {
        (year, month0 + 2)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

/// Weekday of the first of the month, 0 = Sunday .. 6 = Saturday.
pub fn first_weekday_of_month(year: i32, month0: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Shift a (year, month) pair by the given number of months.
pub fn shift_month(year: i32, month0: u32, delta: i32) -> (i32, u32) {
    let total_months = year * 12 + month0 as i32 + delta;
    (total_months.div_euclid(12), total_months.rem_euclid(12) as u32)
}

/// Whether (year, month, day) is strictly before `today`.
///
/// Compares year, then month, then day without requiring the triple to
/// be a valid date.
pub fn is_before(day: u32, month0: u32, year: i32, today: NaiveDate) -> bool {
    (year, month0, day) < (today.year(), today.month0(), today.day())
}

/// Header title such as "July 2025".
pub fn month_title(year: i32, month0: u32) -> String {
    match NaiveDate::from_ymd_opt(year, month0 + 1, 1) {
        Some(first) => first.format("%B %Y").to_string(),
        None => format!("{}/{}", month0 + 1, year),
    }
}
