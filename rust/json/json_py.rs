//! Wrapper to allow de/serializable parameter objects in Rust to be passed to/from Python using
//! pyo3 bindings.
//!
//! Every serializable pyclass is a variant of [DeserializedObj] so that a single `from_json`
//! function can detect the type of any JSON produced by a `to_json` method.

use crate::dates::{DeliveryFrequency, FrequencyUnit, MonthsDiffMethod};
use crate::forecasting::DayType;
use crate::json::JSON;
use crate::tradable_products::Product;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

/// Container for all of the Python exposed Rust objects which are deserializable.
#[derive(Debug, PartialEq, Serialize, Deserialize, FromPyObject, IntoPyObject)]
pub(crate) enum DeserializedObj {
    MonthsDiffMethod(MonthsDiffMethod),
    FrequencyUnit(FrequencyUnit),
    DeliveryFrequency(DeliveryFrequency),
    Product(Product),
    DayType(DayType),
}

impl JSON for DeserializedObj {}

#[pyfunction]
#[pyo3(name = "from_json")]
pub(crate) fn from_json_py(_py: Python<'_>, json: &str) -> PyResult<DeserializedObj> {
    match DeserializedObj::from_json(json) {
        Ok(v) => Ok(v),
        Err(e) => Err(PyValueError::new_err(format!(
            "Could not create Class or Struct from given JSON.\n{}",
            e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_serialized_object() {
        let f = DeliveryFrequency::from_str("4h").unwrap();
        let json = DeserializedObj::DeliveryFrequency(f).to_json().unwrap();
        assert_eq!(
            json,
            "{\"DeliveryFrequency\":{\"number\":4,\"unit\":\"Hour\"}}"
        );

        let y = DeserializedObj::from_json(&json).unwrap();
        match y {
            DeserializedObj::DeliveryFrequency(d) => assert_eq!(f, d),
            _ => assert!(false),
        }
    }

    #[test]
    fn test_serialized_object_pretty() {
        let obj = DeserializedObj::Product(Product::Quarter);
        let json = obj.to_json_pretty().unwrap();
        assert_eq!(json, "{\n  \"Product\": \"Quarter\"\n}");
        assert_eq!(DeserializedObj::from_json(&json).unwrap(), obj);
    }

    #[test]
    fn test_serialized_object_unknown() {
        assert!(DeserializedObj::from_json("{\"Curve\":{}}").is_err());
    }
}
