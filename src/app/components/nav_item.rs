use crate::domain::models::{NavItemView, RouteEntry};
use dioxus::prelude::*;

/// One clickable route entry: icon plus a label that fades with the panel.
#[component]
pub fn NavItem(item: NavItemView, on_select: EventHandler<RouteEntry>) -> Element {
    let entry = item.entry;
    let item_class = if item.is_active {
        "c-sidebar__item c-sidebar__item--active"
    } else {
        "c-sidebar__item"
    };

    rsx! {
        div {
            class: "{item_class}",
            style: "--item-background: {item.background}; --item-text: {item.text};",
            "data-path": "{entry.path}",
            onclick: move |_| on_select.call(entry),
            i { class: "c-sidebar__route-icon {entry.icon.css_class()}" }
            span { class: "c-sidebar__label", "{entry.title}" }
        }
    }
}

/// A vertical group of entries
#[component]
pub fn NavSection(items: Vec<NavItemView>, on_select: EventHandler<RouteEntry>) -> Element {
    rsx! {
        nav { class: "c-sidebar__section",
            for item in items {
                NavItem {
                    key: "{item.entry.title}",
                    item: item.clone(),
                    on_select: on_select,
                }
            }
        }
    }
}
