// Domain models
// Pure Rust, no framework dependencies

pub mod route;
pub mod sidebar_view;
pub mod theme;

pub use route::{RouteEntry, RouteIcon, RouteLists, BOTTOM_ROUTES, HOME_PATH, PRIMARY_ROUTES};
pub use sidebar_view::{NavItemView, SidebarView, ToggleView};
pub use theme::{ThemeName, ThemeTokens, DARK_TOKENS, LIGHT_TOKENS};
