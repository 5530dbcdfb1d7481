//! Naive forecasting strategies for time series of energy volumes and prices.
//!
//! The *knife strategy* predicts each observation by the most recent observation at the same
//! time of day on a comparable [`DayType`], i.e. weekdays are forecast from weekdays whilst
//! Saturdays and Sundays are only forecast from Saturdays and Sundays respectively.

mod knife;

mod serde;

pub(crate) mod py;

pub use crate::forecasting::knife::{forecast_knife_strategy, DayType};
