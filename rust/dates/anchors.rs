use chrono::prelude::*;
use chrono::{Days, Months};
use pyo3::exceptions::PyValueError;
use pyo3::PyErr;

/// Create a `NaiveDateTime` with default null time.
///
/// Panics if date values are invalid.
pub fn ndt(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("`year`, `month` `day` are invalid.")
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Midnight of the calendar day of `date`.
pub fn day_start(date: &NaiveDateTime) -> NaiveDateTime {
    date.date().and_time(NaiveTime::MIN)
}

/// Midnight on the 1st of the month of `date`.
pub fn month_start(date: &NaiveDateTime) -> NaiveDateTime {
    ndt(date.year(), date.month(), 1)
}

/// Midnight on the 1st of the calendar quarter of `date`.
pub fn quarter_start(date: &NaiveDateTime) -> NaiveDateTime {
    ndt(date.year(), 3 * quarter(date) - 2, 1)
}

/// Midnight on the 1st of January of the year of `date`.
pub fn year_start(date: &NaiveDateTime) -> NaiveDateTime {
    ndt(date.year(), 1, 1)
}

/// Midnight on the Monday of the week of `date`.
pub fn week_start(date: &NaiveDateTime) -> NaiveDateTime {
    let offset = date.weekday().num_days_from_monday();
    day_start(date) - Days::new(offset.into())
}

/// Midnight on the Saturday of the weekend containing `date`, or of the most recent weekend if
/// `date` is a working day.
pub fn weekend_start(date: &NaiveDateTime) -> NaiveDateTime {
    let offset = (date.weekday().num_days_from_monday() + 2) % 7;
    day_start(date) - Days::new(offset.into())
}

/// Calendar quarter of `date`, 1 to 4.
pub fn quarter(date: &NaiveDateTime) -> u32 {
    (date.month() - 1) / 3 + 1
}

/// Add a signed number of calendar months to a date.
///
/// Days beyond the end of the target month are clipped to its last day. Raises if the result is
/// outside the representable date range.
pub fn add_months(date: &NaiveDateTime, months: i32) -> Result<NaiveDateTime, PyErr> {
    let result = if months < 0 {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    } else {
        date.checked_add_months(Months::new(months.unsigned_abs()))
    };
    result.ok_or_else(|| {
        PyValueError::new_err(format!("Adding {} months to {} is out of range.", months, date))
    })
}

/// Add a signed number of calendar days to a date.
///
/// Raises if the result is outside the representable date range.
pub fn add_days(date: &NaiveDateTime, days: i64) -> Result<NaiveDateTime, PyErr> {
    let result = if days < 0 {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    };
    result.ok_or_else(|| {
        PyValueError::new_err(format!("Adding {} days to {} is out of range.", days, date))
    })
}

/// Return an integer code counting months since January 1900, with January 1900 as 1.
///
/// # Examples
/// ```rust
/// # use detquantlib::dates::{datetime_to_month_code, ndt};
/// assert_eq!(datetime_to_month_code(&ndt(2025, 10, 22)), 1510);
/// ```
pub fn datetime_to_month_code(date: &NaiveDateTime) -> i32 {
    (date.year() - 1900) * 12 + date.month() as i32
}
