//! Serialization of parameter types to and from JSON, with the ``serde`` crate.

pub mod json_py;

use serde::{Deserialize, Serialize};
use serde_json;

/// Handles the `to` and `from` JSON conversion of parameter types.
pub trait JSON: Serialize + for<'de> Deserialize<'de> {
    /// Return a compact JSON string representing the object.
    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Return an indented JSON string, suitable for configuration files.
    fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Create an object from a JSON string representation.
    fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
