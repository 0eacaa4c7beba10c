use serde::{Deserialize, Serialize};

use crate::coerce;

/// One line item as persisted in the cart blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "coerce::price")]
    pub price: u64,
    #[serde(default)]
    pub img: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default = "default_qty", deserialize_with = "coerce::qty")]
    pub qty: u32,
}

fn default_qty() -> u32 {
    1
}

impl CartItem {
    /// `price * qty`, saturating rather than wrapping.
    pub fn line_total(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.qty))
    }
}

pub fn item_count(items: &[CartItem]) -> u64 {
    items.iter().map(|it| u64::from(it.qty)).sum()
}

pub fn total_price(items: &[CartItem]) -> u64 {
    items
        .iter()
        .fold(0u64, |acc, it| acc.saturating_add(it.line_total()))
}
