use chrono::prelude::*;
use chrono::LocalResult;
use chrono_tz::Tz;
use pyo3::exceptions::PyValueError;
use pyo3::{FromPyObject, PyErr};
use std::str::FromStr;

/// A timestamp which may or may not carry timezone information.
///
/// Python `datetime` objects are extracted into the `Naive` variant when `tzinfo` is `None` and
/// into the `Aware` variant otherwise.
#[derive(Debug, Copy, Clone, PartialEq, FromPyObject)]
pub enum Timestamp {
    Naive(NaiveDateTime),
    Aware(DateTime<FixedOffset>),
}

impl From<NaiveDateTime> for Timestamp {
    fn from(item: NaiveDateTime) -> Self {
        Timestamp::Naive(item)
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(item: DateTime<FixedOffset>) -> Self {
        Timestamp::Aware(item)
    }
}

impl From<DateTime<Tz>> for Timestamp {
    fn from(item: DateTime<Tz>) -> Self {
        Timestamp::Aware(item.fixed_offset())
    }
}

impl Timestamp {
    /// The local wall clock time of the timestamp.
    pub fn wall_clock(&self) -> NaiveDateTime {
        match self {
            Timestamp::Naive(d) => *d,
            Timestamp::Aware(d) => d.naive_local(),
        }
    }

    pub fn is_aware(&self) -> bool {
        matches!(self, Timestamp::Aware(_))
    }
}

/// Parse an IANA timezone name, e.g. "Europe/Amsterdam".
pub fn parse_timezone(name: &str) -> Result<Tz, PyErr> {
    Tz::from_str(name).map_err(|_| {
        PyValueError::new_err(format!("`timezone` '{}' is not a recognised IANA name.", name))
    })
}

/// Attach a timezone to a wall clock time.
///
/// Ambiguous times during a backward transition resolve to the earliest instant. Times falling
/// into the gap of a forward transition do not exist and will raise.
pub(crate) fn localize<Z: TimeZone>(zone: &Z, wall: &NaiveDateTime) -> Result<DateTime<Z>, PyErr> {
    match zone.from_local_datetime(wall) {
        LocalResult::Single(d) => Ok(d),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => Err(PyValueError::new_err(format!(
            "Wall clock time {} does not exist in the given timezone.",
            wall
        ))),
    }
}
