// Custom Dioxus hooks
pub mod use_sidebar_state;

pub use use_sidebar_state::use_sidebar_state;
