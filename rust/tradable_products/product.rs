use chrono::prelude::*;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::dates::{
    add_days, add_months, day_start, month_start, quarter_start, week_start, weekend_start,
    year_start, MonthsDiffMethod,
};

/// Delivery period of a tradable energy product.
#[pyclass(module = "detquantlib.rs", eq, eq_int, hash, frozen)]
#[derive(Debug, Hash, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Product {
    /// Day-ahead style delivery over a single calendar day.
    Day = 0,
    /// Delivery from Monday to Sunday.
    Week = 1,
    /// Delivery over Saturday and Sunday.
    Weekend = 2,
    /// Delivery over a calendar month.
    Month = 3,
    /// Delivery over a calendar quarter starting in January, April, July or October.
    Quarter = 4,
    /// Delivery over a calendar year.
    Year = 5,
}

impl FromStr for Product {
    type Err = PyErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" => Ok(Product::Day),
            "week" => Ok(Product::Week),
            "weekend" => Ok(Product::Weekend),
            "month" => Ok(Product::Month),
            "quarter" => Ok(Product::Quarter),
            "year" => Ok(Product::Year),
            _ => Err(PyValueError::new_err(format!(
                "`product` '{}' is not a recognised product type.",
                s
            ))),
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Product::Day => "day",
            Product::Week => "week",
            Product::Weekend => "weekend",
            Product::Month => "month",
            Product::Quarter => "quarter",
            Product::Year => "year",
        };
        write!(f, "{}", s)
    }
}

impl Product {
    /// Return the start of the delivery period of this product which contains `date`.
    ///
    /// For a [Product::Weekend] a working day maps to the most recent weekend.
    pub fn period_start(&self, date: &NaiveDateTime) -> NaiveDateTime {
        match self {
            Product::Day => day_start(date),
            Product::Week => week_start(date),
            Product::Weekend => weekend_start(date),
            Product::Month => month_start(date),
            Product::Quarter => quarter_start(date),
            Product::Year => year_start(date),
        }
    }

    /// Return the number of product periods between a trading date and a delivery start date.
    ///
    /// Week and weekend maturities count started weeks of calendar days from the trading date,
    /// so any delivery within the next seven days is maturity *1*.
    ///
    /// Raises if the delivery start date is before the trading date.
    pub fn maturity(
        &self,
        trading_date: &NaiveDateTime,
        delivery_start_date: &NaiveDateTime,
    ) -> Result<i32, PyErr> {
        if delivery_start_date < trading_date {
            return Err(PyValueError::new_err(
                "`delivery_start_date` cannot be before `trading_date`.",
            ));
        }
        let maturity = match self {
            Product::Day => days_between(trading_date, delivery_start_date),
            Product::Week | Product::Weekend => {
                (days_between(trading_date, delivery_start_date) + 6) / 7
            }
            Product::Month => {
                MonthsDiffMethod::Month.months_between(trading_date, delivery_start_date)
            }
            Product::Quarter => {
                MonthsDiffMethod::Month.months_between(
                    &quarter_start(trading_date),
                    &quarter_start(delivery_start_date),
                ) / 3
            }
            Product::Year => delivery_start_date.year() - trading_date.year(),
        };
        Ok(maturity)
    }

    /// Return the delivery start date of the product with the given maturity.
    ///
    /// Raises if the delivery start date is outside the representable date range.
    pub fn delivery_start_date(
        &self,
        trading_date: &NaiveDateTime,
        maturity: i32,
    ) -> Result<NaiveDateTime, PyErr> {
        let base = self.period_start(trading_date);
        match self {
            Product::Day => add_days(&base, maturity.into()),
            Product::Week | Product::Weekend => add_days(&base, 7 * i64::from(maturity)),
            Product::Month => add_months(&base, maturity),
            Product::Quarter => add_months(&base, checked_months(maturity, 3)?),
            Product::Year => add_months(&base, checked_months(maturity, 12)?),
        }
    }
}

fn checked_months(maturity: i32, months_per_period: i32) -> Result<i32, PyErr> {
    maturity.checked_mul(months_per_period).ok_or_else(|| {
        PyValueError::new_err(format!("`maturity` {} is out of range.", maturity))
    })
}

fn days_between(start: &NaiveDateTime, end: &NaiveDateTime) -> i32 {
    (end.date() - start.date()).num_days() as i32
}

/// Calculate the maturity of a product from its delivery start date.
///
/// # Examples
/// ```rust
/// # use detquantlib::dates::ndt;
/// # use detquantlib::tradable_products::convert_delivery_start_date_to_maturity;
/// let m = convert_delivery_start_date_to_maturity(&ndt(2025, 10, 22), &ndt(2027, 1, 1), "quarter");
/// assert_eq!(m.unwrap(), 5);
/// ```
pub fn convert_delivery_start_date_to_maturity(
    trading_date: &NaiveDateTime,
    delivery_start_date: &NaiveDateTime,
    product: &str,
) -> Result<i32, PyErr> {
    Product::from_str(product)?.maturity(trading_date, delivery_start_date)
}

/// Calculate the delivery start date of a product from its maturity.
///
/// # Examples
/// ```rust
/// # use detquantlib::dates::ndt;
/// # use detquantlib::tradable_products::convert_maturity_to_delivery_start_date;
/// let d = convert_maturity_to_delivery_start_date(&ndt(2025, 10, 22), 15, "month");
/// assert_eq!(d.unwrap(), ndt(2027, 1, 1));
/// ```
pub fn convert_maturity_to_delivery_start_date(
    trading_date: &NaiveDateTime,
    maturity: i32,
    product: &str,
) -> Result<NaiveDateTime, PyErr> {
    Product::from_str(product)?.delivery_start_date(trading_date, maturity)
}
