use chrono::Utc;

use crate::{
    dialog::Dialogs,
    dto::cart::{ProductCard, parse_quantity},
    services::{
        cart_service::{CartStore, StorageEvent},
        checkout_service::{self, CheckoutOutcome},
    },
    storage::KeyValueStorage,
};

pub const CLEAR_CONFIRMATION: &str = "Biztosan törlöd a kosár tartalmát?";

/// Page interactions the cart reacts to.
#[derive(Debug, Clone)]
pub enum UiEvent {
    PageLoaded,
    AddToCart(ProductCard),
    QuantityChanged { id: String, raw: String },
    RemoveClicked { id: String },
    ClearClicked,
    PayClicked,
    PanelOpened,
    StorageChanged(StorageEvent),
}

#[derive(Debug, Clone)]
pub enum EventOutcome {
    Handled,
    Ignored,
    Checkout(CheckoutOutcome),
}

/// Wires page events to the store. The slide-out panel is optional; when
/// the page has one it is opened after every add.
pub struct CartWidget<S, D> {
    store: CartStore<S>,
    dialogs: D,
    has_panel: bool,
    panel_open: bool,
}

impl<S: KeyValueStorage, D: Dialogs> CartWidget<S, D> {
    pub fn new(store: CartStore<S>, dialogs: D) -> Self {
        Self {
            store,
            dialogs,
            has_panel: false,
            panel_open: false,
        }
    }

    pub fn with_panel(mut self) -> Self {
        self.has_panel = true;
        self
    }

    pub fn store(&self) -> &CartStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut CartStore<S> {
        &mut self.store
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn close_panel(&mut self) {
        self.panel_open = false;
    }

    pub fn handle(&mut self, event: UiEvent) -> EventOutcome {
        match event {
            UiEvent::PageLoaded => {
                self.store.refresh();
                EventOutcome::Handled
            }
            UiEvent::AddToCart(card) => {
                self.store.add(card.into_new_item(Utc::now()));
                if self.has_panel {
                    self.open_panel();
                }
                EventOutcome::Handled
            }
            UiEvent::QuantityChanged { id, raw } => {
                let qty = parse_quantity(raw.trim());
                self.store.update_quantity(&id, i64::from(qty));
                EventOutcome::Handled
            }
            UiEvent::RemoveClicked { id } => {
                self.store.remove(&id);
                EventOutcome::Handled
            }
            UiEvent::ClearClicked => {
                if self.dialogs.confirm(CLEAR_CONFIRMATION) {
                    self.store.clear();
                }
                EventOutcome::Handled
            }
            UiEvent::PayClicked => EventOutcome::Checkout(checkout_service::checkout(
                &mut self.store,
                &mut self.dialogs,
            )),
            UiEvent::PanelOpened => {
                if !self.has_panel {
                    return EventOutcome::Ignored;
                }
                self.open_panel();
                EventOutcome::Handled
            }
            UiEvent::StorageChanged(event) => {
                if self.store.handle_storage_event(&event) {
                    EventOutcome::Handled
                } else {
                    EventOutcome::Ignored
                }
            }
        }
    }

    fn open_panel(&mut self) {
        self.panel_open = true;
        self.store.refresh();
    }
}
