//! Convert between delivery start dates and maturities of tradable energy products.
//!
//! A [`Product`] defines the length of a delivery period. The *maturity* of a product is the
//! number of such periods between the period containing the trading date and the delivery
//! period itself, so that the front month traded in October 2025 is `month` maturity *1*,
//! and the current month is maturity *0*.
//!
//! ```rust
//! # use detquantlib::dates::ndt;
//! # use detquantlib::tradable_products::{
//! #     convert_delivery_start_date_to_maturity, convert_maturity_to_delivery_start_date,
//! # };
//! let trading_date = ndt(2025, 10, 22);
//! let maturity = convert_delivery_start_date_to_maturity(&trading_date, &ndt(2026, 1, 1), "quarter");
//! assert_eq!(maturity.unwrap(), 1);
//! let delivery = convert_maturity_to_delivery_start_date(&trading_date, 1, "quarter");
//! assert_eq!(delivery.unwrap(), ndt(2026, 1, 1));
//! ```

mod product;

mod serde;

pub(crate) mod py;

pub use crate::tradable_products::product::{
    convert_delivery_start_date_to_maturity, convert_maturity_to_delivery_start_date, Product,
};
