//! Calendar helpers for hire, departure and birth date arithmetic.
//!
//! This module provides:
//! - Year boundaries (`year_start`) and weekday snapping (`monday_on_or_before`,
//!   `monday_on_or_after`, `first_monday_of_year`)
//! - Business-day anchoring (`last_business_day_before`)
//! - Fractional-year offsets using the 365.25-day Julian year (`offset_by_years`,
//!   `years_between`)
//!
//! # Examples
//!
//! ```
//! use chrono::{Datelike, NaiveDate, Weekday};
//! use workforce_core::types::time::first_monday_of_year;
//!
//! let monday = first_monday_of_year(2024).unwrap();
//! assert_eq!(monday, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
//! assert_eq!(monday.weekday(), Weekday::Mon);
//! ```

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use super::error::WorkforceError;

/// Days per year used to convert fractional tenures and ages into days.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Returns January 1 of `year`.
///
/// # Errors
/// `WorkforceError::InvalidRequest` if the year is outside chrono's range.
pub fn year_start(year: i32) -> Result<NaiveDate, WorkforceError> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| WorkforceError::invalid_request(format!("year {} is out of range", year)))
}

/// Returns the Monday on or before `date`.
///
/// ```
/// use chrono::NaiveDate;
/// use workforce_core::types::time::monday_on_or_before;
///
/// // 2023-12-31 is a Sunday
/// let sunday = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
/// assert_eq!(monday_on_or_before(sunday), NaiveDate::from_ymd_opt(2023, 12, 25).unwrap());
/// ```
pub fn monday_on_or_before(date: NaiveDate) -> NaiveDate {
    let back = date.weekday().num_days_from_monday() as i64;
    date - Duration::days(back)
}

/// Returns the Monday on or after `date`.
pub fn monday_on_or_after(date: NaiveDate) -> NaiveDate {
    let forward = (7 - date.weekday().num_days_from_monday() as i64) % 7;
    date + Duration::days(forward)
}

/// Returns the first Monday on or after January 1 of `year`.
///
/// # Errors
/// `WorkforceError::InvalidRequest` if the year is outside chrono's range.
pub fn first_monday_of_year(year: i32) -> Result<NaiveDate, WorkforceError> {
    year_start(year).map(monday_on_or_after)
}

/// Returns true for Monday through Friday.
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns the last business day strictly before `date`.
///
/// ```
/// use chrono::NaiveDate;
/// use workforce_core::types::time::last_business_day_before;
///
/// // 2000-01-01 is a Saturday; 1999-12-31 is a Friday
/// let jan1 = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
/// assert_eq!(last_business_day_before(jan1), NaiveDate::from_ymd_opt(1999, 12, 31).unwrap());
/// ```
pub fn last_business_day_before(date: NaiveDate) -> NaiveDate {
    let mut day = date - Duration::days(1);
    while !is_business_day(day) {
        day = day - Duration::days(1);
    }
    day
}

/// Converts fractional years to whole days, rounding half away from zero.
pub fn years_to_days(years: f64) -> i64 {
    (years * DAYS_PER_YEAR).round() as i64
}

/// Shifts `date` by `years` (may be negative), rounded to whole days.
///
/// Returns `None` if the result leaves chrono's representable range.
pub fn offset_by_years(date: NaiveDate, years: f64) -> Option<NaiveDate> {
    Duration::try_days(years_to_days(years)).and_then(|offset| date.checked_add_signed(offset))
}

/// Fractional years from `start` to `end` (negative if `end` precedes `start`).
pub fn years_between(start: NaiveDate, end: NaiveDate) -> f64 {
    (end - start).num_days() as f64 / DAYS_PER_YEAR
}
