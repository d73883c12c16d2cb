use crate::app::components::{NavSection, ToggleButton};
use crate::domain::models::{RouteEntry, RouteLists, ThemeName};
use crate::domain::services::render_sidebar;
use crate::shared::constants::DEFAULT_BRAND;
use crate::shared::hooks::use_sidebar_state;
use dioxus::prelude::*;

const LOGO: Asset = asset!("/assets/logo.svg");

/// Collapsible navigation sidebar.
///
/// Starts closed with the home route active. `on_navigate` receives the path
/// of every selected entry; without it the intent is only logged.
#[component]
pub fn Sidebar(
    #[props(default)] color: ThemeName,
    #[props(default = DEFAULT_BRAND.to_string())] brand: String,
    on_navigate: Option<EventHandler<String>>,
) -> Element {
    let mut sidebar = use_sidebar_state(on_navigate);
    let view = render_sidebar(&sidebar.state.read(), color, &RouteLists::default());

    let select_route = move |entry: RouteEntry| sidebar.select_route(&entry);

    rsx! {
        div {
            class: "c-sidebar {view.state_class}",
            style: "--sidebar-width: {view.width}; --sidebar-hover-background: {view.hover_background}; --sidebar-hover-text: {view.hover_text};",
            div {
                class: "c-sidebar__panel",
                style: "--sidebar-background: {view.background}; --sidebar-text: {view.text};",
                div { class: "c-sidebar__top",
                    div { class: "c-sidebar__logo",
                        img { src: LOGO, alt: "{brand} logo" }
                        span {
                            class: "c-sidebar__label c-sidebar__brand",
                            style: "color: {view.logo_text};",
                            "{brand}"
                        }
                    }
                    NavSection { items: view.primary.clone(), on_select: select_route }
                }
                NavSection { items: view.bottom.clone(), on_select: select_route }
            }
            ToggleButton {
                view: view.toggle.clone(),
                is_open: view.is_open,
                on_toggle: move |_| sidebar.toggle(),
            }
        }
    }
}
