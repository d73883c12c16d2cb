// Public API exports
pub mod config;
pub mod domain;
pub mod shared;

// Dioxus components
pub mod app;

pub use app::{App, Sidebar};
pub use domain::models::{RouteEntry, RouteLists, ThemeName, ThemeTokens};
pub use domain::services::{resolve_theme, LogNavigator, Navigator};
