//! Dashboard sidebar launcher
//!
//! Native builds take CLI flags and install a tracing subscriber before
//! handing the configuration to Dioxus as context. The browser build launches
//! the demo configuration directly.

#[cfg(any(target_arch = "wasm32", feature = "desktop"))]
use dashboard_sidebar::app::App;

#[cfg(not(target_arch = "wasm32"))]
mod launcher {
    use std::path::PathBuf;

    use anyhow::Context;
    use clap::Parser;
    use dashboard_sidebar::config::{ConfigOverrides, SidebarConfig};
    use dashboard_sidebar::domain::models::ThemeName;

    #[derive(Debug, Parser)]
    #[command(name = "dashboard-sidebar", about = "Collapsible dashboard navigation sidebar")]
    pub struct Args {
        /// Sidebar theme (light or dark)
        #[arg(long)]
        pub color: Option<ThemeName>,

        /// Label shown next to the logo
        #[arg(long)]
        pub brand: Option<String>,

        /// JSON config file (overrides SIDEBAR_CONFIG)
        #[arg(long)]
        pub config: Option<PathBuf>,
    }

    pub fn init_tracing() {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive(tracing::Level::INFO.into()),
            )
            .init();
    }

    pub fn load_config(args: Args) -> anyhow::Result<SidebarConfig> {
        let overrides = ConfigOverrides {
            color: args.color,
            brand: args.brand,
            config_path: args.config,
        };
        SidebarConfig::load(SidebarConfig::demo(), &overrides)
            .context("failed to load sidebar configuration")
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    launcher::init_tracing();
    let config = launcher::load_config(launcher::Args::parse())?;

    tracing::info!(color = %config.color, "Starting dashboard sidebar...");

    launch(config)
}

#[cfg(all(not(target_arch = "wasm32"), feature = "desktop"))]
fn launch(config: dashboard_sidebar::config::SidebarConfig) -> anyhow::Result<()> {
    dioxus::LaunchBuilder::desktop().with_context(config).launch(App);
    Ok(())
}

// Native build without a renderer: fail with a hint instead of panicking in Dioxus
#[cfg(all(not(target_arch = "wasm32"), not(feature = "desktop")))]
fn launch(_config: dashboard_sidebar::config::SidebarConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "no renderer compiled in: rebuild with `--features desktop`, or serve the browser build with `dx serve --platform web`"
    )
}

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str("[WASM] Dashboard sidebar initialized"));
    dioxus::launch(App);
}

#[cfg(all(test, not(target_arch = "wasm32"), not(feature = "desktop")))]
mod tests {
    use super::*;
    use dashboard_sidebar::config::SidebarConfig;

    #[test]
    fn test_launch_without_renderer_names_the_feature() {
        let err = launch(SidebarConfig::demo()).unwrap_err();
        assert!(err.to_string().contains("--features desktop"));
    }
}
