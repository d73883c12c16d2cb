use crate::domain::models::RouteEntry;
use crate::domain::services::{LogNavigator, Navigator};
use crate::shared::state::SidebarState;
use dioxus::prelude::*;

/// Sidebar state handle scoped to the calling component
#[derive(Clone, Copy)]
pub struct UseSidebarState {
    pub state: Signal<SidebarState>,
    pub on_navigate: Option<EventHandler<String>>,
}

impl UseSidebarState {
    pub fn toggle(&mut self) {
        self.state.write().toggle();
    }

    /// Select `entry` and forward its path to `on_navigate`, or to the log when
    /// nothing is wired.
    pub fn select_route(&mut self, entry: &RouteEntry) {
        // Write guard must be released before the handler runs; it may read the state
        if !self.state.write().set_active(entry) {
            return;
        }

        match self.on_navigate {
            Some(handler) => handler.call(entry.path.to_string()),
            None => LogNavigator.navigate(entry.path),
        }
    }
}

/// Hook to manage sidebar open/closed and active-route state
pub fn use_sidebar_state(on_navigate: Option<EventHandler<String>>) -> UseSidebarState {
    let state = use_signal(SidebarState::default);

    UseSidebarState { state, on_navigate }
}
