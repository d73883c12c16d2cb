pub mod nav_item;
pub mod toggle_button;

pub use nav_item::{NavItem, NavSection};
pub use toggle_button::ToggleButton;
