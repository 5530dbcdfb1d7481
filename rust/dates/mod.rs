//! Calendar arithmetic for energy trading dates.
//!
//! # Month differences
//!
//! The number of months between two dates is calculated under one of three
//! [`MonthsDiffMethod`] policies:
//! - *month*: the plain calendar month difference, ignoring the day of the month.
//! - *time*: the final month is only credited once its day-of-month has been reached.
//! - *full_months_only*: only complete calendar months inside the period are counted.
//!
//! ```rust
//! # use detquantlib::dates::{calc_months_diff, ndt};
//! let start = ndt(2025, 4, 30);
//! let end = ndt(2026, 9, 30);
//! assert_eq!(calc_months_diff(&start, &end, "month").unwrap(), 17);
//! assert_eq!(calc_months_diff(&start, &end, "time").unwrap(), 17);
//! assert_eq!(calc_months_diff(&start, &end, "full_months_only").unwrap(), 16);
//! ```
//!
//! # Delivery periods
//!
//! [`count_delivery_periods`] counts the periods of a [`DeliveryFrequency`] spanning a delivery
//! window. With a timezone, quarter-hourly or hourly products lose periods on the spring
//! daylight saving transition and gain periods in the autumn, whilst daily products follow the
//! local calendar.
//!
//! ```rust
//! # use detquantlib::dates::{count_delivery_periods, ndt, Timestamp};
//! # use chrono::Duration;
//! let start = Timestamp::from(ndt(2025, 10, 1) + Duration::minutes(15 * 60 + 10));
//! let end = Timestamp::from(ndt(2026, 1, 1));
//! let naive = count_delivery_periods(&start, &end, "15min", false, None).unwrap();
//! let local = count_delivery_periods(&start, &end, "15min", false, Some("Europe/Amsterdam")).unwrap();
//! assert_eq!(local - naive, 4);
//! ```

mod anchors;
mod delivery;
mod months_diff;
mod timestamp;

mod serde;

pub(crate) mod py;

pub use crate::dates::{
    anchors::{
        add_days, add_months, datetime_to_month_code, day_start, month_start, ndt, quarter,
        quarter_start, week_start, weekend_start, year_start,
    },
    delivery::{count_delivery_periods, DeliveryFrequency, FrequencyUnit},
    months_diff::{calc_months_diff, MonthsDiffMethod},
    timestamp::{parse_timezone, Timestamp},
};
pub(crate) use crate::dates::timestamp::localize;
