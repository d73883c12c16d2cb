use crate::domain::models::{ThemeName, ThemeTokens};
use crate::shared::logging::log_theme_fallback;

/// Look up the token set for a theme name.
///
/// Total over all strings: anything other than `"light"` or `"dark"` gets the
/// light tokens.
pub fn resolve_theme(name: &str) -> &'static ThemeTokens {
    match name.parse::<ThemeName>() {
        Ok(theme) => theme.tokens(),
        Err(_) => {
            let fallback = ThemeName::default();
            log_theme_fallback(name, fallback.as_str());
            fallback.tokens()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{DARK_TOKENS, LIGHT_TOKENS};

    #[test]
    fn test_resolve_known_themes() {
        assert_eq!(*resolve_theme("light"), LIGHT_TOKENS);
        assert_eq!(*resolve_theme("dark"), DARK_TOKENS);
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_light() {
        for name in ["", "DARK", "blue", "light ", "dark-golden"] {
            assert_eq!(*resolve_theme(name), LIGHT_TOKENS, "name: {name:?}");
        }
    }

    #[test]
    fn test_light_table_exact() {
        let tokens = resolve_theme("light");
        assert_eq!(tokens.background, "var(--color-sidebar-background-light-default)");
        assert_eq!(tokens.hover_background, "var(--color-sidebar-background-light-hover)");
        assert_eq!(tokens.active_background, "var(--color-sidebar-background-light-active)");
        assert_eq!(tokens.text, "var(--color-text-light-default)");
        assert_eq!(tokens.hover_text, "var(--color-text-light-hover)");
        assert_eq!(tokens.active_text, "var(--color-text-light-active)");
        assert_eq!(tokens.logo_text, "var(--color-text-logo-light-default)");
        assert_eq!(tokens.button_background, "var(--color-button-background-light-default)");
        assert_eq!(
            tokens.active_button_background,
            "var(--color-button-background-light-active)"
        );
    }

    #[test]
    fn test_dark_table_exact() {
        let tokens = resolve_theme("dark");
        assert_eq!(tokens.background, "var(--color-sidebar-background-dark-default)");
        assert_eq!(tokens.hover_background, "var(--color-sidebar-background-dark-hover)");
        assert_eq!(tokens.active_background, "var(--color-sidebar-background-dark-active)");
        assert_eq!(tokens.text, "var(--color-text-dark-default)");
        assert_eq!(tokens.hover_text, "var(--color-text-dark-hover)");
        assert_eq!(tokens.active_text, "var(--color-text-dark-active)");
        assert_eq!(tokens.logo_text, "var(--color-text-logo-dark-default)");
        assert_eq!(tokens.button_background, "var(--color-button-background-dark-default)");
        assert_eq!(
            tokens.active_button_background,
            "var(--color-button-background-dark-active)"
        );
    }
}
