use crate::dates::{DeliveryFrequency, FrequencyUnit, MonthsDiffMethod};
use crate::json::JSON;

impl JSON for MonthsDiffMethod {}
impl JSON for FrequencyUnit {}
impl JSON for DeliveryFrequency {}
