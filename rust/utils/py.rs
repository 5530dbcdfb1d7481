//! Wrapper module to export to Python using pyo3 bindings.

use crate::utils::divide_with_nan;
use ndarray::Array1;
use numpy::{IntoPyArray, PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

/// Float array accepted from Python, with a fallback for any sequence of numbers.
#[derive(FromPyObject)]
pub(crate) enum FloatArray<'py> {
    Array(PyReadonlyArray1<'py, f64>),
    List(Vec<f64>),
}

impl FloatArray<'_> {
    fn to_owned_array(&self) -> Array1<f64> {
        match self {
            FloatArray::Array(a) => a.as_array().to_owned(),
            FloatArray::List(v) => Array1::from_vec(v.clone()),
        }
    }
}

/// Divide two arrays element-wise, replacing NaN and infinite results.
///
/// Parameters
/// ----------
/// numerator: ndarray
/// denominator: ndarray
/// nan: float, optional
///     Replacement for ``0 / 0`` results.
/// posinf: float, optional
///     Replacement for positive infinite results.
/// neginf: float, optional
///     Replacement for negative infinite results.
///
/// Returns
/// -------
/// ndarray
#[pyfunction]
#[pyo3(name = "divide_with_nan", signature = (numerator, denominator, nan = f64::NAN, posinf = f64::NAN, neginf = f64::NAN))]
pub(crate) fn divide_with_nan_py<'py>(
    py: Python<'py>,
    numerator: FloatArray<'py>,
    denominator: FloatArray<'py>,
    nan: f64,
    posinf: f64,
    neginf: f64,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let n = numerator.to_owned_array();
    let d = denominator.to_owned_array();
    let result = divide_with_nan(&n.view(), &d.view(), nan, posinf, neginf)?;
    Ok(result.into_pyarray(py))
}
