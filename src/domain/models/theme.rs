use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::AppError;

/// Sidebar color scheme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
}

impl ThemeName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeName::Dark)
    }

    /// Switch between light and dark
    pub fn toggled(&self) -> ThemeName {
        match self {
            ThemeName::Light => ThemeName::Dark,
            ThemeName::Dark => ThemeName::Light,
        }
    }

    /// Parse a theme name, falling back to light for anything unrecognized.
    pub fn parse_lenient(name: &str) -> ThemeName {
        name.parse().unwrap_or_default()
    }

    pub fn tokens(&self) -> &'static ThemeTokens {
        match self {
            ThemeName::Light => &LIGHT_TOKENS,
            ThemeName::Dark => &DARK_TOKENS,
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            other => Err(AppError::UnknownTheme(other.to_string())),
        }
    }
}

// Config files may carry any string here; unknown names degrade to light
impl<'de> Deserialize<'de> for ThemeName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(ThemeName::parse_lenient(&name))
    }
}

/// Color roles used by the sidebar, each a CSS custom-property reference
/// that the hosting stylesheet defines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ThemeTokens {
    pub background: &'static str,
    pub hover_background: &'static str,
    pub active_background: &'static str,
    pub text: &'static str,
    pub hover_text: &'static str,
    pub active_text: &'static str,
    pub logo_text: &'static str,
    pub button_background: &'static str,
    pub active_button_background: &'static str,
}

pub const LIGHT_TOKENS: ThemeTokens = ThemeTokens {
    background: "var(--color-sidebar-background-light-default)",
    hover_background: "var(--color-sidebar-background-light-hover)",
    active_background: "var(--color-sidebar-background-light-active)",
    text: "var(--color-text-light-default)",
    hover_text: "var(--color-text-light-hover)",
    active_text: "var(--color-text-light-active)",
    logo_text: "var(--color-text-logo-light-default)",
    button_background: "var(--color-button-background-light-default)",
    active_button_background: "var(--color-button-background-light-active)",
};

pub const DARK_TOKENS: ThemeTokens = ThemeTokens {
    background: "var(--color-sidebar-background-dark-default)",
    hover_background: "var(--color-sidebar-background-dark-hover)",
    active_background: "var(--color-sidebar-background-dark-active)",
    text: "var(--color-text-dark-default)",
    hover_text: "var(--color-text-dark-hover)",
    active_text: "var(--color-text-dark-active)",
    logo_text: "var(--color-text-logo-dark-default)",
    button_background: "var(--color-button-background-dark-default)",
    active_button_background: "var(--color-button-background-dark-active)",
};
