use crate::json::JSON;
use crate::tradable_products::Product;

impl JSON for Product {}
