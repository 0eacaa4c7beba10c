use std::fmt::Write as _;

use crate::{
    models::{CartItem, total_price},
    services::cart_service::CartListener,
    views::format::{escape_attr, escape_html, format_ft},
};

pub const EMPTY_CART_NOTICE: &str = "A kosarad üres.";

/// Line-item list and total shown inside the cart panel.
#[derive(Debug, Clone, Default)]
pub struct CartListView {
    pub html: String,
    pub total_text: String,
}

impl CartListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, items: &[CartItem]) {
        self.html.clear();

        if items.is_empty() {
            let _ = write!(
                self.html,
                r#"<div class="text-center text-muted">{EMPTY_CART_NOTICE}</div>"#
            );
            self.total_text = format_ft(0);
            return;
        }

        for item in items {
            render_row(&mut self.html, item);
        }
        self.total_text = format_ft(total_price(items));
    }
}

fn render_row(out: &mut String, item: &CartItem) {
    let id = escape_attr(&item.id);
    let _ = write!(
        out,
        concat!(
            r#"<div class="list-group-item d-flex gap-3 align-items-start" data-id="{id}">"#,
            r#"<img src="{img}" alt="{alt}" class="rounded" style="width:64px;height:64px;object-fit:cover">"#,
            r#"<div class="flex-grow-1">"#,
            r#"<div class="d-flex justify-content-between align-items-start">"#,
            r#"<div><strong>{title}</strong></div>"#,
            r#"<button type="button" class="btn btn-sm btn-outline-danger ms-2" data-action="remove" data-id="{id}">Eltávolít</button>"#,
            r#"</div>"#,
            r#"<div class="text-muted small">{desc}</div>"#,
            r#"<div class="d-flex justify-content-between align-items-center mt-2">"#,
            r#"<div class="d-flex align-items-center gap-2">"#,
            r#"<label class="mb-0 small">Fő:</label>"#,
            r#"<input type="number" min="1" value="{qty}" class="form-control form-control-sm" style="width:80px" data-action="qty" data-id="{id}">"#,
            r#"</div>"#,
            r#"<div class="text-end"><div class="small text-muted">{unit} / fő</div><div class="fw-bold">{line}</div></div>"#,
            r#"</div></div></div>"#,
        ),
        id = id,
        img = escape_attr(&item.img),
        alt = escape_attr(&item.title),
        title = escape_html(&item.title),
        desc = escape_html(&item.desc),
        qty = item.qty,
        unit = format_ft(item.price),
        line = format_ft(item.line_total()),
    );
}

impl CartListener for CartListView {
    fn cart_changed(&mut self, items: &[CartItem]) {
        self.render(items);
    }
}
