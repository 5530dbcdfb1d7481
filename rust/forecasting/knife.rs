use chrono::prelude::*;
use indexmap::IndexMap;
use itertools::Itertools;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

/// Classification of a date used to group comparable historical observations.
#[pyclass(module = "detquantlib.rs", eq, eq_int, hash, frozen)]
#[derive(Debug, Hash, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DayType {
    /// Monday to Friday.
    Weekday = 1,
    Saturday = 2,
    Sunday = 3,
}

impl DayType {
    /// Classify the calendar day of a date.
    pub fn from_date<D: Datelike>(date: &D) -> Self {
        match date.weekday() {
            Weekday::Sat => DayType::Saturday,
            Weekday::Sun => DayType::Sunday,
            _ => DayType::Weekday,
        }
    }
}

/// Bucket of an observation: its day type and wall clock time of day in whole seconds.
type Bucket = (DayType, u32);

/// Forecast a series with the knife strategy.
///
/// Every value is forecast by the most recent earlier value observed at the same time of day on
/// the same [DayType]. The first observation of each bucket has no history and is forecast by
/// itself. Dates are read on their own wall clock, so timezone-aware and naive dates with equal
/// local times produce identical forecasts.
///
/// # Notes
/// `dates` are expected in chronological order; "earlier" refers to position in the input.
///
/// # Examples
/// ```rust
/// # use detquantlib::dates::ndt;
/// # use detquantlib::forecasting::forecast_knife_strategy;
/// // Friday, Saturday, Sunday, Monday
/// let dates = vec![ndt(2025, 10, 24), ndt(2025, 10, 25), ndt(2025, 10, 26), ndt(2025, 10, 27)];
/// let values = vec![1.0, 2.0, 3.0, 4.0];
/// let forecast = forecast_knife_strategy(&dates, &values).unwrap();
/// assert_eq!(forecast, vec![1.0, 2.0, 3.0, 1.0]);
/// ```
pub fn forecast_knife_strategy<D, T>(dates: &[D], values: &[T]) -> Result<Vec<T>, PyErr>
where
    D: Datelike + Timelike,
    T: Copy,
{
    if dates.len() != values.len() {
        return Err(PyValueError::new_err(format!(
            "`dates` and `values` must have the same length, got {} and {}.",
            dates.len(),
            values.len()
        )));
    }
    let timer = Instant::now();
    let mut previous: IndexMap<Bucket, T> = IndexMap::new();
    let forecast: Vec<T> = dates
        .iter()
        .zip_eq(values.iter())
        .map(|(date, value)| {
            let bucket = (DayType::from_date(date), date.num_seconds_from_midnight());
            previous.insert(bucket, *value).unwrap_or(*value)
        })
        .collect();
    debug!(
        observations = forecast.len(),
        buckets = previous.len(),
        elapsed = ?timer.elapsed(),
        "knife strategy forecast"
    );
    Ok(forecast)
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::{localize, ndt, parse_timezone};
    use chrono::Duration;

    #[test]
    fn test_day_type() {
        let options: Vec<(NaiveDateTime, DayType)> = vec![
            (ndt(2025, 10, 20), DayType::Weekday),
            (ndt(2025, 10, 24), DayType::Weekday),
            (ndt(2025, 10, 25), DayType::Saturday),
            (ndt(2025, 10, 26), DayType::Sunday),
        ];
        for option in options.iter() {
            assert_eq!(DayType::from_date(&option.0), option.1);
        }
    }

    #[test]
    fn test_knife_two_week_daily_constant_weekdays() {
        // Monday 6th October 2025 for two weeks
        let dates: Vec<NaiveDateTime> = (0..14).map(|i| ndt(2025, 10, 6) + Duration::days(i)).collect();
        let values: Vec<f64> = dates
            .iter()
            .map(|d| match DayType::from_date(d) {
                DayType::Weekday => 5.0,
                DayType::Saturday => 2.0,
                DayType::Sunday => 1.0,
            })
            .collect();
        let forecast = forecast_knife_strategy(&dates, &values).unwrap();
        assert_eq!(forecast.len(), values.len());
        assert_eq!(forecast[0], values[0]);
        let mut last_weekday = 0;
        for i in 1..14 {
            if DayType::from_date(&dates[i]) == DayType::Weekday {
                assert_eq!(forecast[i], values[last_weekday]);
                last_weekday = i;
            }
        }
        // weekend days are each first in their bucket during the first week
        assert_eq!(forecast[5], values[5]);
        assert_eq!(forecast[6], values[6]);
        assert_eq!(forecast[12], values[5]);
    }

    #[test]
    fn test_knife_uses_previous_in_bucket() {
        // Monday to the following Monday, daily
        let dates: Vec<NaiveDateTime> = (0..8).map(|i| ndt(2025, 10, 6) + Duration::days(i)).collect();
        let values: Vec<i64> = (10..18).collect();
        let forecast = forecast_knife_strategy(&dates, &values).unwrap();
        // Sat and Sun start new buckets, the second Monday uses Friday
        assert_eq!(forecast, vec![10, 10, 11, 12, 13, 15, 16, 14]);
    }

    #[test]
    fn test_knife_separates_time_of_day() {
        let mut dates: Vec<NaiveDateTime> = vec![];
        for day in 0..3 {
            for hour in [0, 12] {
                dates.push(ndt(2025, 10, 7) + Duration::days(day) + Duration::hours(hour));
            }
        }
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let forecast = forecast_knife_strategy(&dates, &values).unwrap();
        assert_eq!(forecast, vec![1.0, 2.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_knife_timezone_aware_matches_naive() {
        let tz = parse_timezone("Europe/Amsterdam").unwrap();
        let start = localize(&tz, &ndt(2025, 10, 20)).unwrap();
        // hourly for two weeks in elapsed time, across the autumn transition
        let aware: Vec<DateTime<chrono_tz::Tz>> =
            (0..(14 * 24)).map(|h| start + Duration::hours(h)).collect();
        let naive: Vec<NaiveDateTime> = aware.iter().map(|d| d.naive_local()).collect();
        let values: Vec<f64> = (0..aware.len()).map(|i| (i % 17) as f64).collect();

        let from_aware = forecast_knife_strategy(&aware, &values).unwrap();
        let from_naive = forecast_knife_strategy(&naive, &values).unwrap();
        assert_eq!(from_aware, from_naive);
    }

    #[test]
    fn test_knife_empty_and_mismatched() {
        let dates: Vec<NaiveDateTime> = vec![];
        let values: Vec<f64> = vec![];
        assert_eq!(forecast_knife_strategy(&dates, &values).unwrap(), values);

        let dates = vec![ndt(2025, 10, 6)];
        assert!(forecast_knife_strategy(&dates, &[1.0, 2.0]).is_err());
    }
}
