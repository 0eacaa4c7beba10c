pub mod badge;
pub mod cart_list;
pub mod format;

pub use badge::BadgeView;
pub use cart_list::{CartListView, EMPTY_CART_NOTICE};
pub use format::{escape_html, format_ft};
