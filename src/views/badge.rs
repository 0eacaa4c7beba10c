use crate::{
    models::{CartItem, item_count},
    services::cart_service::CartListener,
};

/// The header counter showing how many travellers are in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeView {
    pub text: String,
    pub hidden: bool,
}

impl BadgeView {
    pub fn new() -> Self {
        Self {
            text: "0".to_string(),
            hidden: true,
        }
    }

    pub fn render(&mut self, items: &[CartItem]) {
        let count = item_count(items);
        self.text = count.to_string();
        self.hidden = count == 0;
    }
}

impl Default for BadgeView {
    fn default() -> Self {
        Self::new()
    }
}

impl CartListener for BadgeView {
    fn cart_changed(&mut self, items: &[CartItem]) {
        self.render(items);
    }
}
