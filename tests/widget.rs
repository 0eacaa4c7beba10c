use std::{cell::RefCell, rc::Rc};

use adamstravel_cart::{
    config::DEFAULT_STORAGE_KEY,
    dialog::ScriptedDialogs,
    dto::cart::ProductCard,
    models::CartItem,
    services::{
        cart_service::{CartListener, CartStore, StorageEvent},
        checkout_service::CheckoutOutcome,
    },
    storage::{KeyValueStorage, MemoryStorage},
    views::{BadgeView, CartListView, EMPTY_CART_NOTICE},
    widget::{CLEAR_CONFIRMATION, CartWidget, EventOutcome, UiEvent},
};

type Views = (Rc<RefCell<BadgeView>>, Rc<RefCell<CartListView>>);

#[derive(Default)]
struct RenderCounter {
    renders: usize,
}

impl CartListener for RenderCounter {
    fn cart_changed(&mut self, _items: &[CartItem]) {
        self.renders += 1;
    }
}

fn widget_with_views<S: KeyValueStorage>(
    storage: S,
    dialogs: ScriptedDialogs,
) -> (CartWidget<S, ScriptedDialogs>, Views) {
    let mut store = CartStore::new(storage, DEFAULT_STORAGE_KEY);
    let badge = Rc::new(RefCell::new(BadgeView::new()));
    let list = Rc::new(RefCell::new(CartListView::new()));
    store.subscribe(badge.clone());
    store.subscribe(list.clone());
    (CartWidget::new(store, dialogs).with_panel(), (badge, list))
}

fn balaton_card(qty: &str) -> ProductCard {
    ProductCard {
        id: Some("trip-1".into()),
        title: Some("Balaton".into()),
        price: Some("25000".into()),
        img: Some("img/balaton.jpg".into()),
        desc: Some("Hétvége".into()),
        qty_input: Some(qty.into()),
        ..Default::default()
    }
}

#[test]
fn page_load_renders_persisted_cart() -> anyhow::Result<()> {
    let mut storage = MemoryStorage::new();
    storage.set_item(
        DEFAULT_STORAGE_KEY,
        r#"[{"id":"trip-1","title":"Balaton","price":25000,"img":"","desc":"","qty":2}]"#,
    )?;
    let (mut widget, (badge, list)) = widget_with_views(storage, ScriptedDialogs::accepting());

    widget.handle(UiEvent::PageLoaded);

    assert_eq!(badge.borrow().text, "2");
    assert_eq!(list.borrow().total_text, "50\u{a0}000 Ft");
    Ok(())
}

#[test]
fn add_to_cart_opens_panel_and_renders() {
    let (mut widget, (badge, list)) =
        widget_with_views(MemoryStorage::new(), ScriptedDialogs::accepting());
    let counter = Rc::new(RefCell::new(RenderCounter::default()));
    widget.store_mut().subscribe(counter.clone());

    widget.handle(UiEvent::AddToCart(balaton_card("2")));

    assert!(widget.panel_open());
    assert_eq!(widget.store().item_count(), 2);
    assert_eq!(badge.borrow().text, "2");
    // Once for the mutation, once for the panel opening.
    assert_eq!(counter.borrow().renders, 2);
    assert!(list.borrow().html.contains("Balaton"));
}

#[test]
fn add_to_cart_without_panel_keeps_it_closed() {
    let store = CartStore::new(MemoryStorage::new(), DEFAULT_STORAGE_KEY);
    let mut widget = CartWidget::new(store, ScriptedDialogs::accepting());

    widget.handle(UiEvent::AddToCart(balaton_card("1")));

    assert!(!widget.panel_open());
    assert!(matches!(
        widget.handle(UiEvent::PanelOpened),
        EventOutcome::Ignored
    ));
    assert_eq!(widget.store().item_count(), 1);
}

#[test]
fn quantity_input_is_parsed_and_clamped() {
    let (mut widget, (badge, _)) =
        widget_with_views(MemoryStorage::new(), ScriptedDialogs::accepting());
    widget.handle(UiEvent::AddToCart(balaton_card("1")));

    widget.handle(UiEvent::QuantityChanged {
        id: "trip-1".into(),
        raw: "4".into(),
    });
    assert_eq!(widget.store().read()[0].qty, 4);

    widget.handle(UiEvent::QuantityChanged {
        id: "trip-1".into(),
        raw: "0".into(),
    });
    assert_eq!(widget.store().read()[0].qty, 1);

    widget.handle(UiEvent::QuantityChanged {
        id: "trip-1".into(),
        raw: "".into(),
    });
    assert_eq!(widget.store().read()[0].qty, 1);

    widget.handle(UiEvent::QuantityChanged {
        id: "trip-1".into(),
        raw: "abc".into(),
    });
    assert_eq!(widget.store().read()[0].qty, 1);
    assert_eq!(badge.borrow().text, "1");
}

#[test]
fn remove_button_removes_row() {
    let (mut widget, (_, list)) =
        widget_with_views(MemoryStorage::new(), ScriptedDialogs::accepting());
    widget.handle(UiEvent::AddToCart(balaton_card("1")));

    widget.handle(UiEvent::RemoveClicked {
        id: "trip-1".into(),
    });

    assert!(widget.store().read().is_empty());
    assert!(list.borrow().html.contains(EMPTY_CART_NOTICE));
}

#[test]
fn clear_requires_confirmation() {
    let (mut widget, _) = widget_with_views(MemoryStorage::new(), ScriptedDialogs::declining());
    widget.handle(UiEvent::AddToCart(balaton_card("2")));

    widget.handle(UiEvent::ClearClicked);
    assert_eq!(widget.store().item_count(), 2);
    assert_eq!(widget.dialogs().confirms, vec![CLEAR_CONFIRMATION.to_string()]);

    let (mut widget, (badge, _)) =
        widget_with_views(MemoryStorage::new(), ScriptedDialogs::accepting());
    widget.handle(UiEvent::AddToCart(balaton_card("2")));
    widget.handle(UiEvent::ClearClicked);
    assert_eq!(widget.store().item_count(), 0);
    assert!(badge.borrow().hidden);
}

#[test]
fn pay_button_runs_checkout_and_empties_views() {
    let (mut widget, (badge, list)) =
        widget_with_views(MemoryStorage::new(), ScriptedDialogs::accepting());
    widget.handle(UiEvent::AddToCart(balaton_card("3")));

    let outcome = widget.handle(UiEvent::PayClicked);

    let EventOutcome::Checkout(CheckoutOutcome::Completed(receipt)) = outcome else {
        panic!("expected completed checkout");
    };
    assert_eq!(receipt.total, 75000);
    assert!(widget.store().read().is_empty());
    assert!(badge.borrow().hidden);
    assert_eq!(list.borrow().total_text, "0 Ft");

    let again = widget.handle(UiEvent::PayClicked);
    assert!(matches!(
        again,
        EventOutcome::Checkout(CheckoutOutcome::EmptyCart)
    ));
    assert_eq!(
        widget.dialogs().alerts.last().map(String::as_str),
        Some(EMPTY_CART_NOTICE)
    );
}

#[test]
fn other_tab_changes_are_picked_up() {
    let shared = Rc::new(RefCell::new(MemoryStorage::new()));
    let (mut tab_a, _) = widget_with_views(shared.clone(), ScriptedDialogs::accepting());
    let (mut tab_b, (badge_b, _)) = widget_with_views(shared.clone(), ScriptedDialogs::accepting());

    tab_a.handle(UiEvent::AddToCart(balaton_card("2")));
    assert_eq!(badge_b.borrow().text, "0");

    let outcome = tab_b.handle(UiEvent::StorageChanged(StorageEvent {
        key: Some(DEFAULT_STORAGE_KEY.into()),
        new_value: None,
    }));
    assert!(matches!(outcome, EventOutcome::Handled));
    assert_eq!(badge_b.borrow().text, "2");

    let ignored = tab_b.handle(UiEvent::StorageChanged(StorageEvent {
        key: Some("unrelated".into()),
        new_value: None,
    }));
    assert!(matches!(ignored, EventOutcome::Ignored));
}
