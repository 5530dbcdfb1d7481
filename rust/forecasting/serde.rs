use crate::forecasting::DayType;
use crate::json::JSON;

impl JSON for DayType {}
