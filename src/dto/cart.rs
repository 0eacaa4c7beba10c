use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use crate::coerce::parse_int_prefix;
use crate::{coerce, models::CartItem};

const FALLBACK_TITLE: &str = "Utazás";

/// Candidate line item handed to `CartStore::add`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewCartItem {
    pub id: String,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_int")]
    pub price: Option<i64>,
    pub img: Option<String>,
    pub desc: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_int")]
    pub qty: Option<i64>,
}

impl NewCartItem {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Quantity to add or store, defaulted to 1 and clamped up to 1.
    pub fn effective_qty(&self) -> u32 {
        clamp_qty(self.qty.unwrap_or(1))
    }

    pub fn into_cart_item(self) -> CartItem {
        let qty = self.effective_qty();
        CartItem {
            id: self.id,
            title: self.title.unwrap_or_default(),
            price: self.price.unwrap_or(0).max(0) as u64,
            img: self.img.unwrap_or_default(),
            desc: self.desc.unwrap_or_default(),
            qty,
        }
    }
}

/// Raw attributes of an "add to cart" trigger on a product card, plus the
/// card's quantity input if it has one. Values are kept as the page hands them over.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCard {
    pub id: Option<String>,
    pub title: Option<String>,
    pub name: Option<String>,
    pub price: Option<String>,
    pub img: Option<String>,
    pub desc: Option<String>,
    pub button_text: Option<String>,
    pub qty_input: Option<String>,
}

impl ProductCard {
    /// Builds the cart candidate. A card without an id gets `trip-<epoch millis>`.
    pub fn into_new_item(self, now: DateTime<Utc>) -> NewCartItem {
        let id = non_empty(self.id).unwrap_or_else(|| format!("trip-{}", now.timestamp_millis()));
        let title = non_empty(self.title)
            .or_else(|| non_empty(self.name))
            .or_else(|| non_empty(self.button_text))
            .unwrap_or_else(|| FALLBACK_TITLE.to_string());
        let price = self
            .price
            .as_deref()
            .and_then(parse_int_prefix)
            .unwrap_or(0)
            .max(0);
        let qty = self.qty_input.as_deref().map(parse_quantity).unwrap_or(1);

        NewCartItem {
            id,
            title: Some(title),
            price: Some(price),
            img: Some(self.img.unwrap_or_default()),
            desc: Some(self.desc.unwrap_or_default()),
            qty: Some(i64::from(qty)),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub fn clamp_qty(qty: i64) -> u32 {
    qty.clamp(1, i64::from(u32::MAX)) as u32
}

/// Parses a quantity typed into a number input: empty or non-numeric text
/// counts as 1, anything below 1 is raised to 1.
pub fn parse_quantity(raw: &str) -> u32 {
    if raw.is_empty() {
        return 1;
    }
    parse_int_prefix(raw).map(clamp_qty).unwrap_or(1)
}
