use chrono::prelude::*;
use chrono::{Days, TimeDelta};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

use crate::dates::timestamp::{localize, parse_timezone, Timestamp};

const SECONDS_PER_DAY: i64 = 86_400;

/// Unit of time from which a [DeliveryFrequency] is built.
#[pyclass(module = "detquantlib.rs", eq, eq_int, hash, frozen)]
#[derive(Debug, Hash, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum FrequencyUnit {
    Second = 0,
    Minute = 1,
    Hour = 2,
    /// A local calendar day. Spans 23 or 25 hours across daylight saving transitions.
    Day = 3,
}

impl FrequencyUnit {
    fn seconds(&self) -> i64 {
        match self {
            FrequencyUnit::Second => 1,
            FrequencyUnit::Minute => 60,
            FrequencyUnit::Hour => 3_600,
            FrequencyUnit::Day => SECONDS_PER_DAY,
        }
    }

    fn alias(&self) -> &'static str {
        match self {
            FrequencyUnit::Second => "s",
            FrequencyUnit::Minute => "min",
            FrequencyUnit::Hour => "h",
            FrequencyUnit::Day => "D",
        }
    }
}

/// A regular delivery period, e.g. quarter-hours or days.
///
/// Parsed from pandas style offset aliases: an optional multiple followed by one of `s`, `min`
/// (or `T`), `h` and `D`.
///
/// # Examples
/// ```rust
/// # use detquantlib::dates::{DeliveryFrequency, FrequencyUnit};
/// # use std::str::FromStr;
/// let f = DeliveryFrequency::from_str("15min").unwrap();
/// assert_eq!(f, DeliveryFrequency::new(15, FrequencyUnit::Minute));
/// assert_eq!(f.to_string(), "15min");
/// ```
#[pyclass(module = "detquantlib.rs", eq, hash, frozen)]
#[derive(Debug, Hash, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveryFrequency {
    #[pyo3(get)]
    pub number: u32,
    #[pyo3(get)]
    pub unit: FrequencyUnit,
}

impl FromStr for DeliveryFrequency {
    type Err = PyErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s_ = s.trim();
        let idx = s_.find(|c: char| !c.is_ascii_digit()).unwrap_or(s_.len());
        let (digits, alias) = s_.split_at(idx);
        let number: u32 = if digits.is_empty() {
            1
        } else {
            digits.parse::<u32>().map_err(|_| {
                PyValueError::new_err(format!("`freq` '{}' has an invalid multiple.", s))
            })?
        };
        if number == 0 {
            return Err(PyValueError::new_err(format!(
                "`freq` '{}' must have a positive multiple.",
                s
            )));
        }
        let unit = match alias {
            "s" | "S" => FrequencyUnit::Second,
            "min" | "T" => FrequencyUnit::Minute,
            "h" | "H" => FrequencyUnit::Hour,
            "D" | "d" => FrequencyUnit::Day,
            _ => {
                return Err(PyValueError::new_err(format!(
                    "`freq` '{}' is not a recognised frequency. Use e.g. 'D', 'h', '15min' or '30s'.",
                    s
                )))
            }
        };
        Ok(DeliveryFrequency { number, unit })
    }
}

impl fmt::Display for DeliveryFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.number == 1 {
            write!(f, "{}", self.unit.alias())
        } else {
            write!(f, "{}{}", self.number, self.unit.alias())
        }
    }
}

impl DeliveryFrequency {
    pub fn new(number: u32, unit: FrequencyUnit) -> Self {
        DeliveryFrequency { number, unit }
    }

    /// Nominal length of one period in seconds.
    pub fn seconds(&self) -> i64 {
        i64::from(self.number) * self.unit.seconds()
    }

    /// Whether periods are measured in local calendar days rather than elapsed time.
    pub fn is_calendar_days(&self) -> bool {
        self.unit == FrequencyUnit::Day
    }

    /// Floor a wall clock time to the period grid, anchored at the Unix epoch.
    pub fn floor(&self, wall: &NaiveDateTime) -> NaiveDateTime {
        let rem = wall.and_utc().timestamp().rem_euclid(self.seconds());
        *wall - TimeDelta::seconds(rem) - TimeDelta::nanoseconds(wall.nanosecond().into())
    }

    /// Whether a wall clock time falls exactly on the period grid.
    pub fn is_aligned(&self, wall: &NaiveDateTime) -> bool {
        self.floor(wall) == *wall
    }

    /// Count the periods on the grid anchored at the start, lying before the end, with
    /// sub-daily periods measured in the elapsed time of `zone`.
    pub(crate) fn count_in_zone<Z: TimeZone>(
        &self,
        zone: &Z,
        start: &NaiveDateTime,
        end: &NaiveDateTime,
        exclude_first_period: bool,
    ) -> Result<i64, PyErr> {
        let floored = self.floor(start);
        let skip_first = exclude_first_period && floored != *start;
        let count = if self.is_calendar_days() {
            let anchor = if skip_first {
                floored + Days::new(self.number.into())
            } else {
                floored
            };
            periods_in(*end - anchor, self.seconds())
        } else {
            // the floored wall time may fall in a forward transition gap, so the anchor is
            // taken in elapsed time back from the start instant
            let mut anchor = localize(zone, start)? - (*start - floored);
            if skip_first {
                anchor = anchor + TimeDelta::seconds(self.seconds());
            }
            let end_ = localize(zone, end)?;
            periods_in(end_ - anchor, self.seconds())
        };
        trace!(freq = %self, anchor = %floored, skip_first, count, "counted delivery periods");
        Ok(count)
    }
}

/// Number of whole or partial periods in a positive time span.
fn periods_in(span: TimeDelta, period_seconds: i64) -> i64 {
    if span <= TimeDelta::zero() {
        return 0;
    }
    let secs = span.num_seconds();
    let n = secs / period_seconds;
    if secs % period_seconds != 0 || span.subsec_nanos() != 0 {
        n + 1
    } else {
        n
    }
}

/// Count the delivery periods of a given frequency between two timestamps.
///
/// The period grid is anchored at the start timestamp floored to the frequency, and every period
/// starting before `end` is counted. If `exclude_first_period` is set and `start` does not fall on
/// a period boundary, the partial first period is dropped.
///
/// When a `timezone` is given naive timestamps are localised to it and aware timestamps are
/// converted to it. Sub-daily periods then follow elapsed time so that daylight saving
/// transitions remove or add periods, whilst daily periods follow the local calendar.
///
/// # Examples
/// ```rust
/// # use detquantlib::dates::{count_delivery_periods, ndt, Timestamp};
/// # use chrono::Duration;
/// let start = Timestamp::from(ndt(2025, 2, 1) + Duration::minutes(15 * 60 + 10));
/// let end = Timestamp::from(ndt(2025, 4, 1));
/// assert_eq!(count_delivery_periods(&start, &end, "15min", false, None).unwrap(), 5604);
/// let local = count_delivery_periods(&start, &end, "15min", false, Some("Europe/Amsterdam"));
/// assert_eq!(local.unwrap(), 5600);
/// ```
pub fn count_delivery_periods(
    start: &Timestamp,
    end: &Timestamp,
    freq: &str,
    exclude_first_period: bool,
    timezone: Option<&str>,
) -> Result<i64, PyErr> {
    let frequency = DeliveryFrequency::from_str(freq)?;
    match timezone {
        Some(name) => {
            let tz = parse_timezone(name)?;
            let start_ = wall_clock_in(start, &tz);
            let end_ = wall_clock_in(end, &tz);
            frequency.count_in_zone(&tz, &start_, &end_, exclude_first_period)
        }
        None => match (start, end) {
            (Timestamp::Naive(s), Timestamp::Naive(e)) => {
                frequency.count_in_zone(&Utc, s, e, exclude_first_period)
            }
            (Timestamp::Aware(s), Timestamp::Aware(e)) => {
                let offset = *s.offset();
                let end_ = e.with_timezone(&offset).naive_local();
                frequency.count_in_zone(&offset, &s.naive_local(), &end_, exclude_first_period)
            }
            _ => Err(PyValueError::new_err(
                "Cannot mix timezone-naive and timezone-aware `start_date` and `end_date` without a `timezone`.",
            )),
        },
    }
}

fn wall_clock_in<Z: TimeZone>(timestamp: &Timestamp, zone: &Z) -> NaiveDateTime {
    match timestamp {
        Timestamp::Naive(d) => *d,
        Timestamp::Aware(d) => d.with_timezone(zone).naive_local(),
    }
}
