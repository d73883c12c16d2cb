use crate::domain::models::{RouteEntry, RouteLists, HOME_PATH};
use crate::domain::services::Navigator;
use crate::shared::logging::{log_route_rejected, log_route_select, log_sidebar_toggle};

/// View state owned by one sidebar instance.
///
/// Only `toggle` and `select_route` mutate it. Entries whose path is not in
/// the configured route lists are rejected, so `active_route` is always either
/// the initial home path or a configured path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarState {
    is_open: bool,
    active_route: String,
    routes: RouteLists,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::with_routes(RouteLists::default())
    }
}

impl SidebarState {
    /// Closed, home active, accepting only paths from `routes`
    pub fn with_routes(routes: RouteLists) -> Self {
        Self {
            is_open: false,
            active_route: HOME_PATH.to_string(),
            routes,
        }
    }

    pub fn routes(&self) -> &RouteLists {
        &self.routes
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn active_route(&self) -> &str {
        &self.active_route
    }

    pub fn is_active(&self, path: &str) -> bool {
        self.active_route == path
    }

    /// Flip the panel between open and closed, returning the new value
    pub fn toggle(&mut self) -> bool {
        self.is_open = !self.is_open;
        log_sidebar_toggle(self.is_open);
        self.is_open
    }

    /// Mark `entry` active without notifying anyone. Returns false and leaves
    /// the state untouched when the path is not configured.
    pub(crate) fn set_active(&mut self, entry: &RouteEntry) -> bool {
        if !self.routes.contains_path(entry.path) {
            log_route_rejected(entry.path);
            return false;
        }
        log_route_select(&self.active_route, entry.path);
        self.active_route.clear();
        self.active_route.push_str(entry.path);
        true
    }

    /// Mark `entry` active and hand its path to the navigator.
    /// Unconfigured paths are ignored and never reach the navigator.
    pub fn select_route(&mut self, entry: &RouteEntry, navigator: &dyn Navigator) -> bool {
        let accepted = self.set_active(entry);
        if accepted {
            navigator.navigate(entry.path);
        }
        accepted
    }
}
