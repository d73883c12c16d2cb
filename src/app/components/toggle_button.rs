use crate::domain::models::{RouteIcon, ToggleView};
use dioxus::prelude::*;

/// Circular button on the panel edge that opens and closes the sidebar.
/// The chevron points right when closed and rotates to point left when open.
#[component]
pub fn ToggleButton(view: ToggleView, is_open: bool, on_toggle: EventHandler<MouseEvent>) -> Element {
    let tooltip = if is_open { "Collapse sidebar" } else { "Expand sidebar" };

    rsx! {
        div {
            class: "c-sidebar__toggle",
            style: "--toggle-left: {view.left}; --toggle-background: {view.background}; --toggle-color: {view.color}; --toggle-rotation: {view.rotation};",
            role: "button",
            title: "{tooltip}",
            "aria-expanded": "{is_open}",
            onclick: move |evt| on_toggle.call(evt),
            i { class: "c-sidebar__toggle-icon {RouteIcon::AngleRight.css_class()}" }
        }
    }
}
