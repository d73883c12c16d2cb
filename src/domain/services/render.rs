use crate::domain::models::{
    NavItemView, RouteEntry, RouteLists, SidebarView, ThemeName, ThemeTokens, ToggleView,
};
use crate::shared::constants::{
    CLOSED_SIDEBAR_WIDTH, OPENED_SIDEBAR_WIDTH, TOGGLE_LEFT_CLOSED, TOGGLE_LEFT_OPENED,
    TOGGLE_ROTATION_CLOSED, TOGGLE_ROTATION_OPENED,
};
use crate::shared::state::SidebarState;

/// Build the sidebar view model from its inputs.
///
/// Pure: the same state, theme and route lists always yield an equal view.
pub fn render_sidebar(state: &SidebarState, theme: ThemeName, routes: &RouteLists) -> SidebarView {
    let tokens = theme.tokens();
    let is_open = state.is_open();

    SidebarView {
        is_open,
        width: if is_open { OPENED_SIDEBAR_WIDTH } else { CLOSED_SIDEBAR_WIDTH },
        state_class: if is_open { "c-sidebar--open" } else { "c-sidebar--closed" },
        background: tokens.background,
        text: tokens.text,
        hover_background: tokens.hover_background,
        hover_text: tokens.hover_text,
        logo_text: tokens.logo_text,
        primary: nav_items(routes.primary, state, tokens),
        bottom: nav_items(routes.bottom, state, tokens),
        toggle: toggle_view(is_open, tokens),
    }
}

fn nav_items(entries: &[RouteEntry], state: &SidebarState, tokens: &ThemeTokens) -> Vec<NavItemView> {
    entries
        .iter()
        .map(|entry| {
            let is_active = state.is_active(entry.path);
            NavItemView {
                entry: *entry,
                is_active,
                background: if is_active { tokens.active_background } else { tokens.background },
                text: if is_active { tokens.active_text } else { tokens.text },
            }
        })
        .collect()
}

fn toggle_view(is_open: bool, tokens: &ThemeTokens) -> ToggleView {
    if is_open {
        ToggleView {
            left: TOGGLE_LEFT_OPENED,
            background: tokens.active_button_background,
            color: tokens.text,
            rotation: TOGGLE_ROTATION_OPENED,
        }
    } else {
        ToggleView {
            left: TOGGLE_LEFT_CLOSED,
            background: tokens.button_background,
            color: tokens.text,
            rotation: TOGGLE_ROTATION_CLOSED,
        }
    }
}
