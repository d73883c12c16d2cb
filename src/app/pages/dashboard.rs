use crate::app::layouts::Sidebar;
use crate::config::SidebarConfig;
use crate::shared::constants::FONT_AWESOME_CSS;
use dioxus::prelude::*;

/// Demo dashboard shell: the sidebar on an otherwise empty page.
///
/// Reads `SidebarConfig` from context when the launcher provides one.
#[component]
pub fn App() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let config = try_use_context::<SidebarConfig>().unwrap_or_else(SidebarConfig::demo);

    use_effect(|| {
        tracing::info!("Dashboard sidebar app initialized");
    });

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }
        document::Link { rel: "stylesheet", href: FONT_AWESOME_CSS }
        div { class: "c-layout",
            Sidebar { color: config.color, brand: config.brand.clone() }
        }
    }
}
