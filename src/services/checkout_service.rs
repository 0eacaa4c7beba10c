use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    dialog::Dialogs,
    models::{CartItem, total_price},
    services::cart_service::CartStore,
    storage::KeyValueStorage,
    views::{EMPTY_CART_NOTICE, format_ft},
};

const SIMULATION_NOTE: &str = "Fizetés szimulálása — a kosár törlődik.";

/// What the simulated payment showed before the cart was emptied.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutReceipt {
    pub reference: String,
    pub total: u64,
    pub lines: Vec<String>,
    pub message: String,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub enum CheckoutOutcome {
    EmptyCart,
    Completed(CheckoutReceipt),
}

/// `"<title> — <qty> fő — <line total>"`
pub fn summary_line(item: &CartItem) -> String {
    format!(
        "{} — {} fő — {}",
        item.title,
        item.qty,
        format_ft(item.line_total())
    )
}

pub fn checkout_message(total: u64, lines: &[String]) -> String {
    format!(
        "Fizetés összeg: {}\n\n{}\n\n{}",
        format_ft(total),
        lines.join("\n"),
        SIMULATION_NOTE
    )
}

/// Simulated payment. An empty cart only gets the notice; otherwise the
/// summary is shown and the cart is cleared.
pub fn checkout<S: KeyValueStorage>(
    store: &mut CartStore<S>,
    dialogs: &mut dyn Dialogs,
) -> CheckoutOutcome {
    let items = store.read();
    if items.is_empty() {
        dialogs.alert(EMPTY_CART_NOTICE);
        return CheckoutOutcome::EmptyCart;
    }

    let total = total_price(&items);
    let lines: Vec<String> = items.iter().map(summary_line).collect();
    let message = checkout_message(total, &lines);
    let completed_at = Utc::now();
    let receipt = CheckoutReceipt {
        reference: build_reference(Uuid::new_v4(), completed_at),
        total,
        lines,
        message,
        completed_at,
    };

    dialogs.alert(&receipt.message);
    store.clear();

    tracing::info!(
        reference = %receipt.reference,
        total = receipt.total,
        items = items.len(),
        "checkout simulated"
    );
    CheckoutOutcome::Completed(receipt)
}

fn build_reference(id: Uuid, at: DateTime<Utc>) -> String {
    let date = at.format("%Y%m%d");
    let suffix = id.to_string();
    let short = &suffix[..8];
    format!("SIM-{}-{}", date, short)
}
