//! This is the documentation for detquantlib-rs.
//!
//! Date arithmetic, delivery period counting and forecasting helpers for energy trading
//! analytics, exposed to Python as the `detquantlib.rs` extension module.


pub mod json;
use crate::json::json_py::from_json_py;

use pyo3::prelude::*;

pub mod dates;
use dates::py::{calc_months_diff_py, count_delivery_periods_py, datetime_to_month_code_py};
use dates::{DeliveryFrequency, FrequencyUnit, MonthsDiffMethod};

pub mod tradable_products;
use tradable_products::py::{
    convert_delivery_start_date_to_maturity_py, convert_maturity_to_delivery_start_date_py,
};
use tradable_products::Product;

pub mod forecasting;
use forecasting::py::forecast_knife_strategy_py;
use forecasting::DayType;

pub mod utils;
use utils::py::divide_with_nan_py;

#[pymodule]
fn rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // JSON
    m.add_function(wrap_pyfunction!(from_json_py, m)?)?;

    // Dates
    m.add_class::<MonthsDiffMethod>()?;
    m.add_class::<FrequencyUnit>()?;
    m.add_class::<DeliveryFrequency>()?;
    m.add_function(wrap_pyfunction!(calc_months_diff_py, m)?)?;
    m.add_function(wrap_pyfunction!(count_delivery_periods_py, m)?)?;
    m.add_function(wrap_pyfunction!(datetime_to_month_code_py, m)?)?;

    // Tradable Products
    m.add_class::<Product>()?;
    m.add_function(wrap_pyfunction!(
        convert_delivery_start_date_to_maturity_py,
        m
    )?)?;
    m.add_function(wrap_pyfunction!(
        convert_maturity_to_delivery_start_date_py,
        m
    )?)?;

    // Forecasting
    m.add_class::<DayType>()?;
    m.add_function(wrap_pyfunction!(forecast_knife_strategy_py, m)?)?;

    // Utils
    m.add_function(wrap_pyfunction!(divide_with_nan_py, m)?)?;

    Ok(())
}
