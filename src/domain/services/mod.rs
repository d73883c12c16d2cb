// Sidebar logic
// Framework-agnostic, 100% testable

pub mod navigator;
pub mod render;
pub mod theme_resolver;

pub use navigator::{LogNavigator, Navigator};
pub use render::render_sidebar;
pub use theme_resolver::resolve_theme;
