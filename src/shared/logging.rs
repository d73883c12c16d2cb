//! Structured logging for the dashboard sidebar
//!
//! Every event carries an `operation` field so interaction traces can be
//! filtered the same way regardless of which component emitted them.

use std::path::Path;

/// Operations that emit log events
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    SidebarToggle,
    RouteSelect,
    Navigation,
    ThemeResolve,
    ConfigLoad,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::SidebarToggle => "sidebar_toggle",
            LogOperation::RouteSelect => "route_select",
            LogOperation::Navigation => "navigation",
            LogOperation::ThemeResolve => "theme_resolve",
            LogOperation::ConfigLoad => "config_load",
        }
    }
}

/// Log the panel flipping open or closed
pub fn log_sidebar_toggle(is_open: bool) {
    tracing::debug!(
        operation = LogOperation::SidebarToggle.as_str(),
        is_open = is_open,
        "Sidebar toggled"
    );
}

/// Log a change of active route
pub fn log_route_select(previous: &str, path: &str) {
    tracing::debug!(
        operation = LogOperation::RouteSelect.as_str(),
        previous = previous,
        path = path,
        "Active route changed"
    );
}

/// Log a selection whose path is not in the configured route lists
pub fn log_route_rejected(path: &str) {
    tracing::warn!(
        operation = LogOperation::RouteSelect.as_str(),
        path = path,
        "Ignoring selection of unconfigured route"
    );
}

/// Log a navigation intent that no router picked up
pub fn log_navigation_intent(path: &str) {
    tracing::info!(
        operation = LogOperation::Navigation.as_str(),
        path = path,
        "going to \"{}\"",
        path
    );
}

/// Log an unrecognized theme name resolving to the default
pub fn log_theme_fallback(requested: &str, fallback: &str) {
    tracing::debug!(
        operation = LogOperation::ThemeResolve.as_str(),
        requested = requested,
        fallback = fallback,
        "Unknown theme, using fallback"
    );
}

/// Log a configuration file being merged
pub fn log_config_file(path: &Path) {
    tracing::debug!(
        operation = LogOperation::ConfigLoad.as_str(),
        path = %path.display(),
        "Reading sidebar config file"
    );
}

/// Log the final launcher configuration
pub fn log_config_loaded(color: &str, brand: &str) {
    tracing::info!(
        operation = LogOperation::ConfigLoad.as_str(),
        color = color,
        brand = brand,
        "Sidebar configuration loaded"
    );
}
