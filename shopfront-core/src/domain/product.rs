//! Product — the unit the catalog page lists.

use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// Prices are plain dollar amounts. `previous_price` is the pre-discount
/// price shown struck through on the page, when one exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub description: String,
    pub current_price: f64,
    pub previous_price: Option<f64>,
    pub in_stock: bool,
    pub stock_quantity: u32,
    pub flash_sale: bool,
    pub category: String,
}

impl Product {
    /// Whole-percent discount off `previous_price`.
    ///
    /// `None` when there is no previous price, or it does not exceed the
    /// current price.
    pub fn discount_pct(&self) -> Option<u32> {
        let previous = self.previous_price?;
        if previous <= self.current_price || previous <= 0.0 {
            return None;
        }
        let pct = (1.0 - self.current_price / previous) * 100.0;
        Some(pct.round() as u32)
    }

    /// Stock status as shown on the page.
    pub fn availability(&self) -> Availability {
        if self.in_stock && self.stock_quantity > 0 {
            Availability::InStock(self.stock_quantity)
        } else {
            Availability::OutOfStock
        }
    }
}

/// Whether a product can currently be bought.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    InStock(u32),
    OutOfStock,
}
