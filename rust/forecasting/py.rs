//! Wrapper module to export to Python using pyo3 bindings.

use crate::dates::Timestamp;
use crate::forecasting::{forecast_knife_strategy, DayType};
use chrono::NaiveDateTime;
use numpy::{Element, IntoPyArray, PyReadonlyArray1};
use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyList, PyTuple};

/// Numeric series accepted from Python, preserving the element type.
///
/// Lists follow NumPy's default promotion: all integers give `int64`, otherwise `float64`.
pub(crate) enum SeriesValues<'py> {
    F64(PyReadonlyArray1<'py, f64>),
    F32(PyReadonlyArray1<'py, f32>),
    I64(PyReadonlyArray1<'py, i64>),
    I32(PyReadonlyArray1<'py, i32>),
    IntList(Vec<i64>),
    FloatList(Vec<f64>),
}

impl<'py> FromPyObject<'py> for SeriesValues<'py> {
    fn extract_bound(ob: &Bound<'py, PyAny>) -> PyResult<Self> {
        if ob.is_instance_of::<PyList>() || ob.is_instance_of::<PyTuple>() {
            return match ob.extract::<Vec<i64>>() {
                Ok(v) => Ok(SeriesValues::IntList(v)),
                Err(_) => Ok(SeriesValues::FloatList(ob.extract()?)),
            };
        }
        if let Ok(a) = ob.extract() {
            return Ok(SeriesValues::F64(a));
        }
        if let Ok(a) = ob.extract() {
            return Ok(SeriesValues::F32(a));
        }
        if let Ok(a) = ob.extract() {
            return Ok(SeriesValues::I64(a));
        }
        if let Ok(a) = ob.extract() {
            return Ok(SeriesValues::I32(a));
        }
        Err(PyTypeError::new_err(
            "`values` must be a list or a 1-d array of float64, float32, int64 or int32.",
        ))
    }
}

fn forecast_array<'py, T: Element + Copy>(
    py: Python<'py>,
    dates: &[NaiveDateTime],
    values: &PyReadonlyArray1<'py, T>,
) -> PyResult<Bound<'py, PyAny>> {
    let v: Vec<T> = values.as_array().iter().copied().collect();
    Ok(forecast_knife_strategy(dates, &v)?.into_pyarray(py).into_any())
}

/// Forecast a series with the knife strategy.
///
/// Parameters
/// ----------
/// dates: list[datetime]
///     Chronologically ordered dates, either all naive or all timezone-aware.
/// values: ndarray, list[int], list[float]
///     Observed values, of the same length as ``dates``. Arrays of ``float64``, ``float32``,
///     ``int64`` and ``int32`` are supported.
///
/// Returns
/// -------
/// ndarray
///     Forecast values with the same dtype as ``values``.
#[pyfunction]
#[pyo3(name = "forecast_knife_strategy")]
pub(crate) fn forecast_knife_strategy_py<'py>(
    py: Python<'py>,
    dates: Vec<Timestamp>,
    values: SeriesValues<'py>,
) -> PyResult<Bound<'py, PyAny>> {
    let wall: Vec<NaiveDateTime> = dates.iter().map(|d| d.wall_clock()).collect();
    match values {
        SeriesValues::F64(arr) => forecast_array(py, &wall, &arr),
        SeriesValues::F32(arr) => forecast_array(py, &wall, &arr),
        SeriesValues::I64(arr) => forecast_array(py, &wall, &arr),
        SeriesValues::I32(arr) => forecast_array(py, &wall, &arr),
        SeriesValues::IntList(v) => {
            Ok(forecast_knife_strategy(&wall, &v)?.into_pyarray(py).into_any())
        }
        SeriesValues::FloatList(v) => {
            Ok(forecast_knife_strategy(&wall, &v)?.into_pyarray(py).into_any())
        }
    }
}

#[pymethods]
impl DayType {
    // Pickling
    #[new]
    fn new_py(variant: u8) -> PyResult<DayType> {
        match variant {
            1_u8 => Ok(DayType::Weekday),
            2_u8 => Ok(DayType::Saturday),
            3_u8 => Ok(DayType::Sunday),
            _ => Err(PyValueError::new_err("unreachable code on DayType pickle.")),
        }
    }

    /// Classify a date as a weekday, Saturday or Sunday.
    ///
    /// Parameters
    /// ----------
    /// date: datetime
    ///
    /// Returns
    /// -------
    /// DayType
    #[staticmethod]
    #[pyo3(name = "from_date")]
    fn from_date_py(date: Timestamp) -> DayType {
        DayType::from_date(&date.wall_clock())
    }

    fn __getnewargs__(&self) -> PyResult<(usize,)> {
        Ok((*self as usize,))
    }
}
