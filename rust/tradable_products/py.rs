//! Wrapper module to export to Python using pyo3 bindings.

use crate::dates::Timestamp;
use crate::json::json_py::DeserializedObj;
use crate::json::JSON;
use crate::tradable_products::{
    convert_delivery_start_date_to_maturity, convert_maturity_to_delivery_start_date, Product,
};
use chrono::NaiveDateTime;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::str::FromStr;

/// Calculate the number of maturities between a trading date and a delivery start date.
///
/// Parameters
/// ----------
/// trading_date: datetime
///     Trading date. Timezone-aware dates are read on their own wall clock.
/// delivery_start_date: datetime
///     Delivery start date. Cannot be before ``trading_date``.
/// product: str
///     Product type, one of *"day"*, *"week"*, *"weekend"*, *"month"*, *"quarter"* or *"year"*.
///
/// Returns
/// -------
/// int
#[pyfunction]
#[pyo3(name = "convert_delivery_start_date_to_maturity")]
pub(crate) fn convert_delivery_start_date_to_maturity_py(
    trading_date: Timestamp,
    delivery_start_date: Timestamp,
    product: &str,
) -> PyResult<i32> {
    convert_delivery_start_date_to_maturity(
        &trading_date.wall_clock(),
        &delivery_start_date.wall_clock(),
        product,
    )
}

/// Calculate the delivery start date of a product from a trading date and maturity.
///
/// Parameters
/// ----------
/// trading_date: datetime
///     Trading date. Timezone-aware dates are read on their own wall clock.
/// maturity: int
///     Product maturity.
/// product: str
///     Product type, one of *"day"*, *"week"*, *"weekend"*, *"month"*, *"quarter"* or *"year"*.
///
/// Returns
/// -------
/// datetime
#[pyfunction]
#[pyo3(name = "convert_maturity_to_delivery_start_date")]
pub(crate) fn convert_maturity_to_delivery_start_date_py(
    trading_date: Timestamp,
    maturity: i32,
    product: &str,
) -> PyResult<NaiveDateTime> {
    convert_maturity_to_delivery_start_date(&trading_date.wall_clock(), maturity, product)
}

#[pymethods]
impl Product {
    // Pickling
    #[new]
    fn new_py(variant: u8) -> PyResult<Product> {
        match variant {
            0_u8 => Ok(Product::Day),
            1_u8 => Ok(Product::Week),
            2_u8 => Ok(Product::Weekend),
            3_u8 => Ok(Product::Month),
            4_u8 => Ok(Product::Quarter),
            5_u8 => Ok(Product::Year),
            _ => Err(PyValueError::new_err("unreachable code on Product pickle.")),
        }
    }

    /// Create a *Product* from its string name.
    #[staticmethod]
    #[pyo3(name = "from_name")]
    fn from_name_py(name: &str) -> PyResult<Product> {
        Product::from_str(name)
    }

    /// Return the start of the delivery period containing a date.
    ///
    /// Parameters
    /// ----------
    /// date: datetime
    ///
    /// Returns
    /// -------
    /// datetime
    #[pyo3(name = "period_start")]
    fn period_start_py(&self, date: Timestamp) -> NaiveDateTime {
        self.period_start(&date.wall_clock())
    }

    /// Return the maturity of a delivery start date relative to a trading date.
    ///
    /// Parameters
    /// ----------
    /// trading_date: datetime
    /// delivery_start_date: datetime
    ///
    /// Returns
    /// -------
    /// int
    #[pyo3(name = "maturity")]
    fn maturity_py(
        &self,
        trading_date: Timestamp,
        delivery_start_date: Timestamp,
    ) -> PyResult<i32> {
        self.maturity(&trading_date.wall_clock(), &delivery_start_date.wall_clock())
    }

    /// Return the delivery start date of a maturity relative to a trading date.
    ///
    /// Parameters
    /// ----------
    /// trading_date: datetime
    /// maturity: int
    ///
    /// Returns
    /// -------
    /// datetime
    #[pyo3(name = "delivery_start_date")]
    fn delivery_start_date_py(
        &self,
        trading_date: Timestamp,
        maturity: i32,
    ) -> PyResult<NaiveDateTime> {
        self.delivery_start_date(&trading_date.wall_clock(), maturity)
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
        match DeserializedObj::Product(*self).to_json() {
            Ok(v) => Ok(v),
            Err(_) => Err(PyValueError::new_err(
                "Failed to serialize `Product` to JSON.",
            )),
        }
    }
}
