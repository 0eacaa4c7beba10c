use std::{cell::RefCell, rc::Rc};

use crate::{
    config::CartConfig,
    dto::cart::{NewCartItem, clamp_qty},
    error::{CartError, CartResult},
    models::{self, CartItem},
    storage::KeyValueStorage,
};

/// Views that re-render whenever the cart changes.
pub trait CartListener {
    fn cart_changed(&mut self, items: &[CartItem]);
}

/// Lets callers keep a handle on a registered view and inspect it later.
impl<L: CartListener> CartListener for Rc<RefCell<L>> {
    fn cart_changed(&mut self, items: &[CartItem]) {
        self.borrow_mut().cart_changed(items);
    }
}

/// Change notification for the persisted key, raised when another browsing
/// context writes to the same storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEvent {
    /// `None` when the whole storage area was cleared.
    pub key: Option<String>,
    pub new_value: Option<String>,
}

/// Single source of truth for the cart. Each operation reads the persisted
/// blob, applies its change, writes the whole list back and notifies every
/// listener.
pub struct CartStore<S> {
    storage: S,
    key: String,
    listeners: Vec<Box<dyn CartListener>>,
    last_write_failed: bool,
}

impl<S: KeyValueStorage> CartStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            listeners: Vec::new(),
            last_write_failed: false,
        }
    }

    pub fn from_config(storage: S, config: &CartConfig) -> Self {
        Self::new(storage, config.storage_key.clone())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn subscribe<L: CartListener + 'static>(&mut self, listener: L) {
        self.listeners.push(Box::new(listener));
    }

    /// Whether the most recent persist attempt failed.
    pub fn last_write_failed(&self) -> bool {
        self.last_write_failed
    }

    /// Current items in insertion order. Missing or unreadable storage reads
    /// as an empty cart; the failure is logged, not returned.
    pub fn read(&self) -> Vec<CartItem> {
        match self.load() {
            Ok(items) => items,
            Err(err) => {
                tracing::error!(error = %err, key = %self.key, "cart load failed");
                Vec::new()
            }
        }
    }

    pub fn add(&mut self, candidate: NewCartItem) {
        if candidate.id.is_empty() {
            tracing::debug!("ignoring cart item without id");
            return;
        }
        let mut items = self.read();
        let added = candidate.effective_qty();
        match items.iter_mut().find(|it| it.id == candidate.id) {
            Some(existing) => {
                existing.qty = existing.qty.saturating_add(added);
                tracing::debug!(id = %existing.id, qty = existing.qty, "cart item merged");
            }
            None => {
                let item = candidate.into_cart_item();
                tracing::debug!(id = %item.id, qty = item.qty, "cart item added");
                items.push(item);
            }
        }
        self.commit(&items);
    }

    pub fn update_quantity(&mut self, id: &str, qty: i64) {
        let mut items = self.read();
        let Some(item) = items.iter_mut().find(|it| it.id == id) else {
            return;
        };
        item.qty = clamp_qty(qty);
        tracing::debug!(id = %id, qty = item.qty, "cart quantity updated");
        self.commit(&items);
    }

    pub fn remove(&mut self, id: &str) {
        let mut items = self.read();
        items.retain(|it| it.id != id);
        tracing::debug!(id = %id, "cart item removed");
        self.commit(&items);
    }

    pub fn clear(&mut self) {
        tracing::debug!("cart cleared");
        self.commit(&[]);
    }

    pub fn item_count(&self) -> u64 {
        models::item_count(&self.read())
    }

    pub fn total_price(&self) -> u64 {
        models::total_price(&self.read())
    }

    /// Re-reads and re-renders when another context changed our key.
    /// Returns whether the event was relevant.
    pub fn handle_storage_event(&mut self, event: &StorageEvent) -> bool {
        if event.key.as_deref() != Some(self.key.as_str()) {
            return false;
        }
        tracing::debug!(key = %self.key, "cart changed in another context");
        self.refresh();
        true
    }

    /// Pushes the persisted state to every listener without mutating it.
    pub fn refresh(&mut self) {
        let items = self.read();
        self.notify(&items);
    }

    fn load(&self) -> CartResult<Vec<CartItem>> {
        let Some(raw) = self.storage.get_item(&self.key)? else {
            return Ok(Vec::new());
        };
        let records: Vec<serde_json::Value> = serde_json::from_str(&raw)?;
        let stored = records
            .into_iter()
            .filter_map(|record| match serde_json::from_value::<CartItem>(record) {
                Ok(item) => Some(item),
                Err(err) => {
                    tracing::warn!(error = %err, key = %self.key, "skipping unreadable cart record");
                    None
                }
            })
            .collect();
        Ok(normalize(stored))
    }

    fn persist(&mut self, items: &[CartItem]) -> CartResult<()> {
        let raw = serde_json::to_string(items)?;
        self.storage
            .set_item(&self.key, &raw)
            .map_err(CartError::from)
    }

    fn commit(&mut self, items: &[CartItem]) {
        self.last_write_failed = match self.persist(items) {
            Ok(()) => false,
            Err(err) => {
                tracing::error!(error = %err, key = %self.key, "cart save failed");
                true
            }
        };
        self.notify(items);
    }

    fn notify(&mut self, items: &[CartItem]) {
        for listener in &mut self.listeners {
            listener.cart_changed(items);
        }
    }
}

/// Restores the invariants on data written by someone else: quantities of
/// at least 1, one entry per id (first position wins, quantities summed).
fn normalize(stored: Vec<CartItem>) -> Vec<CartItem> {
    let mut items: Vec<CartItem> = Vec::with_capacity(stored.len());
    for mut item in stored {
        item.qty = item.qty.max(1);
        match items.iter_mut().find(|it| it.id == item.id) {
            Some(existing) => existing.qty = existing.qty.saturating_add(item.qty),
            None => items.push(item),
        }
    }
    items
}
