use chrono::prelude::*;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::dates::anchors::month_start;

/// Specifier for the policy used to count the months between two dates.
#[pyclass(module = "detquantlib.rs", eq, eq_int, hash, frozen)]
#[derive(Debug, Hash, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum MonthsDiffMethod {
    /// Plain calendar month difference, ignoring the day of the month.
    Month = 0,
    /// Calendar month difference where the last month is only credited once its
    /// day-of-month has been reached.
    Time = 1,
    /// Number of complete calendar months contained in the period.
    FullMonthsOnly = 2,
}

impl FromStr for MonthsDiffMethod {
    type Err = PyErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "month" => Ok(MonthsDiffMethod::Month),
            "time" => Ok(MonthsDiffMethod::Time),
            "full_months_only" => Ok(MonthsDiffMethod::FullMonthsOnly),
            _ => Err(PyValueError::new_err(format!(
                "`diff_method` '{}' is not recognised. Use one of 'month', 'time' or 'full_months_only'.",
                s
            ))),
        }
    }
}

impl fmt::Display for MonthsDiffMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MonthsDiffMethod::Month => "month",
            MonthsDiffMethod::Time => "time",
            MonthsDiffMethod::FullMonthsOnly => "full_months_only",
        };
        write!(f, "{}", s)
    }
}

impl MonthsDiffMethod {
    /// Return the number of months between `start` and `end` under this policy.
    ///
    /// Every policy is antisymmetric: swapping the dates negates the result.
    pub fn months_between(&self, start: &NaiveDateTime, end: &NaiveDateTime) -> i32 {
        match self {
            MonthsDiffMethod::Month => calendar_months(start, end),
            MonthsDiffMethod::Time => {
                if end < start {
                    -months_time(end, start)
                } else {
                    months_time(start, end)
                }
            }
            MonthsDiffMethod::FullMonthsOnly => {
                if end < start {
                    -months_full(end, start)
                } else {
                    months_full(start, end)
                }
            }
        }
    }
}

/// Calculate the number of months between two dates using the named policy.
///
/// # Examples
/// ```rust
/// # use detquantlib::dates::{calc_months_diff, ndt};
/// let start = ndt(2025, 4, 20);
/// let end = ndt(2026, 9, 10);
/// assert_eq!(calc_months_diff(&start, &end, "month").unwrap(), 17);
/// assert_eq!(calc_months_diff(&start, &end, "time").unwrap(), 16);
/// assert!(calc_months_diff(&start, &end, "weeks").is_err());
/// ```
pub fn calc_months_diff(
    start: &NaiveDateTime,
    end: &NaiveDateTime,
    diff_method: &str,
) -> Result<i32, PyErr> {
    let method = MonthsDiffMethod::from_str(diff_method)?;
    Ok(method.months_between(start, end))
}

fn calendar_months(start: &NaiveDateTime, end: &NaiveDateTime) -> i32 {
    (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32)
}

// requires start <= end
fn months_time(start: &NaiveDateTime, end: &NaiveDateTime) -> i32 {
    let months = calendar_months(start, end);
    if end.day() < start.day() {
        months - 1
    } else {
        months
    }
}

// requires start <= end
fn months_full(start: &NaiveDateTime, end: &NaiveDateTime) -> i32 {
    // the month of `start` only counts if the period covers it from midnight on the 1st
    let partial = i32::from(*start != month_start(start));
    i32::max(0, calendar_months(start, end) - partial)
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::ndt;

    fn fixture_pairs() -> Vec<(NaiveDateTime, NaiveDateTime)> {
        vec![
            (ndt(2025, 4, 1), ndt(2026, 9, 1)),
            (ndt(2025, 4, 1), ndt(2026, 9, 30)),
            (ndt(2025, 4, 30), ndt(2026, 9, 30)),
            (ndt(2025, 4, 10), ndt(2026, 9, 20)),
            (ndt(2025, 4, 20), ndt(2026, 9, 10)),
        ]
    }

    #[test]
    fn test_months_diff_month() {
        for (start, end) in fixture_pairs().iter() {
            assert_eq!(calc_months_diff(start, end, "month").unwrap(), 17);
        }
    }

    #[test]
    fn test_months_diff_time() {
        let expected = vec![17, 17, 17, 17, 16];
        for (option, exp) in fixture_pairs().iter().zip(expected) {
            assert_eq!(calc_months_diff(&option.0, &option.1, "time").unwrap(), exp);
        }

        let options: Vec<(NaiveDateTime, NaiveDateTime, i32)> = vec![
            (ndt(2025, 4, 14), ndt(2026, 9, 15), 17),
            (ndt(2025, 4, 15), ndt(2026, 9, 15), 17),
            (ndt(2025, 4, 15), ndt(2026, 9, 14), 16),
        ];
        for option in options.iter() {
            assert_eq!(
                calc_months_diff(&option.0, &option.1, "time").unwrap(),
                option.2
            );
        }
    }

    #[test]
    fn test_months_diff_full_months_only() {
        let expected = vec![17, 17, 16, 16, 16];
        for (option, exp) in fixture_pairs().iter().zip(expected) {
            assert_eq!(
                calc_months_diff(&option.0, &option.1, "full_months_only").unwrap(),
                exp
            );
        }
    }

    #[test]
    fn test_months_diff_full_months_only_short_period() {
        // no complete calendar month inside the period
        let result = calc_months_diff(&ndt(2025, 4, 20), &ndt(2025, 5, 10), "full_months_only");
        assert_eq!(result.unwrap(), 0);
        // intraday start on the 1st does not cover the full month
        let start = ndt(2025, 4, 1) + chrono::Duration::hours(6);
        let result = calc_months_diff(&start, &ndt(2025, 6, 1), "full_months_only");
        assert_eq!(result.unwrap(), 1);
    }

    #[test]
    fn test_months_diff_same_date_is_zero() {
        let dates = vec![ndt(2024, 2, 29), ndt(2025, 4, 20), ndt(2025, 12, 1)];
        for method in ["month", "time", "full_months_only"] {
            for d in dates.iter() {
                assert_eq!(calc_months_diff(d, d, method).unwrap(), 0);
            }
        }
    }

    #[test]
    fn test_months_diff_antisymmetric() {
        for method in ["month", "time", "full_months_only"] {
            for (start, end) in fixture_pairs().iter() {
                let forward = calc_months_diff(start, end, method).unwrap();
                let backward = calc_months_diff(end, start, method).unwrap();
                assert_eq!(forward, -backward);
            }
        }
    }

    #[test]
    fn test_months_diff_method_case_insensitive() {
        assert_eq!(
            MonthsDiffMethod::from_str("Full_Months_Only").unwrap(),
            MonthsDiffMethod::FullMonthsOnly
        );
        assert_eq!(MonthsDiffMethod::Time.to_string(), "time");
    }

    #[test]
    fn test_months_diff_invalid_method() {
        match calc_months_diff(&ndt(2025, 1, 1), &ndt(2025, 2, 1), "days") {
            Ok(_) => assert!(false),
            Err(_) => assert!(true),
        }
    }
}
