//! Launcher configuration
//!
//! Layered lowest to highest: a base config, an optional JSON file, the
//! `SIDEBAR_COLOR` environment variable, then explicit overrides (CLI flags).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::models::ThemeName;
use crate::shared::constants::{DEFAULT_BRAND, ENV_COLOR, ENV_CONFIG_PATH};
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::{log_config_file, log_config_loaded};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    pub color: ThemeName,
    pub brand: String,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            color: ThemeName::default(),
            brand: DEFAULT_BRAND.to_string(),
        }
    }
}

/// Values given explicitly on the command line
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub color: Option<ThemeName>,
    pub brand: Option<String>,
    pub config_path: Option<PathBuf>,
}

/// Partial config as found in a file; absent keys keep the lower layer
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    color: Option<ThemeName>,
    brand: Option<String>,
}

impl SidebarConfig {
    /// Configuration of the demo dashboard, which shows the dark sidebar
    pub fn demo() -> Self {
        Self {
            color: ThemeName::Dark,
            ..Self::default()
        }
    }

    /// Layer the process environment and `overrides` on top of `base`
    pub fn load(base: SidebarConfig, overrides: &ConfigOverrides) -> Result<Self> {
        Self::load_with_env(base, overrides, |key| std::env::var(key).ok())
    }

    /// Same as `load` with an injectable environment lookup
    pub fn load_with_env<E>(base: SidebarConfig, overrides: &ConfigOverrides, env: E) -> Result<Self>
    where
        E: Fn(&str) -> Option<String>,
    {
        let mut config = base;

        let file_path = overrides
            .config_path
            .clone()
            .or_else(|| env(ENV_CONFIG_PATH).map(PathBuf::from));
        if let Some(path) = file_path {
            config.merge_file(&path)?;
        }

        if let Some(color) = env(ENV_COLOR) {
            config.color = ThemeName::parse_lenient(color.trim());
        }

        if let Some(color) = overrides.color {
            config.color = color;
        }
        if let Some(brand) = &overrides.brand {
            config.brand = brand.clone();
        }

        log_config_loaded(config.color.as_str(), &config.brand);
        Ok(config)
    }

    fn merge_file(&mut self, path: &Path) -> Result<()> {
        log_config_file(path);

        let contents = std::fs::read_to_string(path).map_err(|source| AppError::ConfigReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile =
            serde_json::from_str(&contents).map_err(|source| AppError::ConfigParseError {
                path: path.to_path_buf(),
                source,
            })?;

        if let Some(color) = file.color {
            self.color = color;
        }
        if let Some(brand) = file.brand {
            self.brand = brand;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn write_temp_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "dashboard-sidebar-{}-{}.json",
            std::process::id(),
            name
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_default_is_light_tensorflow() {
        let config = SidebarConfig::default();
        assert_eq!(config.color, ThemeName::Light);
        assert_eq!(config.brand, "TensorFlow");
        assert_eq!(SidebarConfig::demo().color, ThemeName::Dark);
    }

    #[test]
    fn test_no_sources_keeps_base() {
        let config =
            SidebarConfig::load_with_env(SidebarConfig::demo(), &ConfigOverrides::default(), env_from(&[]))
                .unwrap();
        assert_eq!(config, SidebarConfig::demo());
    }

    #[test]
    fn test_env_color_is_lenient() {
        let config = SidebarConfig::load_with_env(
            SidebarConfig::demo(),
            &ConfigOverrides::default(),
            env_from(&[("SIDEBAR_COLOR", "neon")]),
        )
        .unwrap();
        assert_eq!(config.color, ThemeName::Light);
    }

    #[test]
    fn test_file_then_env_then_overrides() {
        let path = write_temp_config("layers", r#"{"color": "dark", "brand": "Acme"}"#);

        let from_file = SidebarConfig::load_with_env(
            SidebarConfig::default(),
            &ConfigOverrides {
                config_path: Some(path.clone()),
                ..Default::default()
            },
            env_from(&[]),
        )
        .unwrap();
        assert_eq!(from_file.color, ThemeName::Dark);
        assert_eq!(from_file.brand, "Acme");

        let env_wins = SidebarConfig::load_with_env(
            SidebarConfig::default(),
            &ConfigOverrides::default(),
            env_from(&[
                ("SIDEBAR_CONFIG", path.to_str().unwrap()),
                ("SIDEBAR_COLOR", "light"),
            ]),
        )
        .unwrap();
        assert_eq!(env_wins.color, ThemeName::Light);
        assert_eq!(env_wins.brand, "Acme");

        let cli_wins = SidebarConfig::load_with_env(
            SidebarConfig::default(),
            &ConfigOverrides {
                color: Some(ThemeName::Dark),
                brand: Some("Ledger".to_string()),
                config_path: Some(path.clone()),
            },
            env_from(&[("SIDEBAR_COLOR", "light")]),
        )
        .unwrap();
        assert_eq!(cli_wins.color, ThemeName::Dark);
        assert_eq!(cli_wins.brand, "Ledger");

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_partial_file_keeps_lower_layer() {
        let path = write_temp_config("partial", r#"{"brand": "Only Brand"}"#);
        let config = SidebarConfig::load_with_env(
            SidebarConfig::demo(),
            &ConfigOverrides {
                config_path: Some(path.clone()),
                ..Default::default()
            },
            env_from(&[]),
        )
        .unwrap();
        assert_eq!(config.color, ThemeName::Dark);
        assert_eq!(config.brand, "Only Brand");
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = SidebarConfig::load_with_env(
            SidebarConfig::default(),
            &ConfigOverrides {
                config_path: Some(PathBuf::from("/nonexistent/sidebar.json")),
                ..Default::default()
            },
            env_from(&[]),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::ConfigReadError { .. }));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let path = write_temp_config("malformed", "{ color: dark");
        let err = SidebarConfig::load_with_env(
            SidebarConfig::default(),
            &ConfigOverrides {
                config_path: Some(path.clone()),
                ..Default::default()
            },
            env_from(&[]),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::ConfigParseError { .. }));
        assert!(err.to_string().contains("Config parse error"));
        std::fs::remove_file(path).ok();
    }
}
