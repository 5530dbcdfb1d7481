//! Wrapper module to export to Python using pyo3 bindings.

use crate::dates::{
    calc_months_diff, count_delivery_periods, datetime_to_month_code, DeliveryFrequency,
    FrequencyUnit, MonthsDiffMethod, Timestamp,
};
use crate::json::json_py::DeserializedObj;
use crate::json::JSON;
use chrono::NaiveDateTime;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::str::FromStr;

/// Calculate the number of months between two dates.
///
/// Parameters
/// ----------
/// start_date: datetime
///     Start date of the period.
/// end_date: datetime
///     End date of the period.
/// diff_method: str
///     One of *"month"*, *"time"* or *"full_months_only"*.
///
/// Returns
/// -------
/// int
#[pyfunction]
#[pyo3(name = "calc_months_diff", signature = (start_date, end_date, diff_method = "month"))]
pub(crate) fn calc_months_diff_py(
    start_date: Timestamp,
    end_date: Timestamp,
    diff_method: &str,
) -> PyResult<i32> {
    calc_months_diff(&start_date.wall_clock(), &end_date.wall_clock(), diff_method)
}

/// Count the number of delivery periods between two dates.
///
/// Parameters
/// ----------
/// start_date: datetime
///     Delivery start. The first period is the one containing this timestamp.
/// end_date: datetime
///     Delivery end, exclusive.
/// freq: str
///     Period length as a pandas offset alias, e.g. *"D"*, *"h"* or *"15min"*.
/// exclude_first_period: bool
///     Drop the first period if ``start_date`` is not on a period boundary.
/// timezone: str, optional
///     IANA timezone in which to localise the dates, e.g. *"Europe/Amsterdam"*.
///
/// Returns
/// -------
/// int
#[pyfunction]
#[pyo3(name = "count_delivery_periods", signature = (start_date, end_date, freq, exclude_first_period = false, timezone = None))]
pub(crate) fn count_delivery_periods_py(
    start_date: Timestamp,
    end_date: Timestamp,
    freq: &str,
    exclude_first_period: bool,
    timezone: Option<&str>,
) -> PyResult<i64> {
    count_delivery_periods(
        &start_date,
        &end_date,
        freq,
        exclude_first_period,
        timezone,
    )
}

/// Convert a date to an integer month code, counting months since January 1900.
///
/// Parameters
/// ----------
/// date: datetime
///
/// Returns
/// -------
/// int
#[pyfunction]
#[pyo3(name = "datetime_to_month_code")]
pub(crate) fn datetime_to_month_code_py(date: Timestamp) -> i32 {
    datetime_to_month_code(&date.wall_clock())
}

#[pymethods]
impl MonthsDiffMethod {
    // Pickling
    #[new]
    fn new_py(variant: u8) -> PyResult<MonthsDiffMethod> {
        match variant {
            0_u8 => Ok(MonthsDiffMethod::Month),
            1_u8 => Ok(MonthsDiffMethod::Time),
            2_u8 => Ok(MonthsDiffMethod::FullMonthsOnly),
            _ => Err(PyValueError::new_err(
                "unreachable code on MonthsDiffMethod pickle.",
            )),
        }
    }

    /// Create a *MonthsDiffMethod* from its string name.
    #[staticmethod]
    #[pyo3(name = "from_name")]
    fn from_name_py(name: &str) -> PyResult<MonthsDiffMethod> {
        MonthsDiffMethod::from_str(name)
    }

    /// Return the number of months between two dates under this policy.
    ///
    /// Parameters
    /// ----------
    /// start_date: datetime
    /// end_date: datetime
    ///
    /// Returns
    /// -------
    /// int
    #[pyo3(name = "months_between")]
    fn months_between_py(&self, start_date: Timestamp, end_date: Timestamp) -> i32 {
        self.months_between(&start_date.wall_clock(), &end_date.wall_clock())
    }

    fn __getnewargs__(&self) -> PyResult<(usize,)> {
        Ok((*self as usize,))
    }

    fn __str__(&self) -> String {
        self.to_string()
    }

    /// Return a JSON representation of the object.
    ///
    /// Returns
    /// -------
    /// str
    #[pyo3(name = "to_json")]
    fn to_json_py(&self) -> PyResult<String> {
        match DeserializedObj::MonthsDiffMethod(*self).to_json() {
            Ok(v) => Ok(v),
            Err(_) => Err(PyValueError::new_err(
                "Failed to serialize `MonthsDiffMethod` to JSON.",
            )),
        }
    }
}

#[pymethods]
impl DeliveryFrequency {
    /// Create a *DeliveryFrequency* from a pandas style offset alias.
    ///
    /// Parameters
    /// ----------
    /// freq: str
    ///     E.g. *"D"*, *"h"* or *"15min"*.
    #[new]
    fn new_py(freq: &str) -> PyResult<Self> {
        DeliveryFrequency::from_str(freq)
    }

    /// Nominal length of one period in seconds.
    #[pyo3(name = "seconds")]
    fn seconds_py(&self) -> i64 {
        self.seconds()
    }

    /// Floor a datetime to the period grid.
    ///
    /// Parameters
    /// ----------
    /// date: datetime
    ///
    /// Returns
    /// -------
    /// datetime
    #[pyo3(name = "floor")]
    fn floor_py(&self, date: NaiveDateTime) -> NaiveDateTime {
        self.floor(&date)
    }

    fn __getnewargs__(&self) -> PyResult<(String,)> {
        Ok((self.to_string(),))
    }

    fn __str__(&self) -> String {
        self.to_string()
    }

    fn __repr__(&self) -> String {
        format!("<dql.DeliveryFrequency:{} at {:p}>", self, self)
    }

    /// Return a JSON representation of the object.
    ///
    /// Returns
    /// -------
    /// str
    #[pyo3(name = "to_json")]
    fn to_json_py(&self) -> PyResult<String> {
        match DeserializedObj::DeliveryFrequency(*self).to_json() {
            Ok(v) => Ok(v),
            Err(_) => Err(PyValueError::new_err(
                "Failed to serialize `DeliveryFrequency` to JSON.",
            )),
        }
    }
}

#[pymethods]
impl FrequencyUnit {
    // Pickling
    #[new]
    fn new_py(variant: u8) -> PyResult<FrequencyUnit> {
        match variant {
            0_u8 => Ok(FrequencyUnit::Second),
            1_u8 => Ok(FrequencyUnit::Minute),
            2_u8 => Ok(FrequencyUnit::Hour),
            3_u8 => Ok(FrequencyUnit::Day),
            _ => Err(PyValueError::new_err(
                "unreachable code on FrequencyUnit pickle.",
            )),
        }
    }

    fn __getnewargs__(&self) -> PyResult<(usize,)> {
        Ok((*self as usize,))
    }
}
