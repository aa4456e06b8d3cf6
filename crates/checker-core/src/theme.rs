//! Theme Palette
//!
//! Mirrors the `theme.extend` block of `crates/checker-web/tailwind.config.js`.

use serde::Serialize;

/// Named colors and font stack of the shell
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Theme {
    /// Legal notice red
    pub legal: &'static str,

    /// Notice orange
    pub notice: &'static str,

    /// Default `sans` font stack, highest priority first
    pub font_sans: &'static [&'static str],
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            legal: "#8B0000",
            notice: "#FFA500",
            font_sans: &["Microsoft YaHei", "Arial", "sans-serif"],
        }
    }
}

impl Theme {
    /// CSS `font-family` value; family names with spaces are quoted
    pub fn font_family(&self) -> String {
        self.font_sans
            .iter()
            .map(|family| {
                if family.contains(' ') {
                    format!("\"{family}\"")
                } else {
                    (*family).to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `:root` block exposing the palette as custom properties
    pub fn css_variables(&self) -> String {
        format!(
            ":root {{ --color-legal: {}; --color-notice: {}; --font-sans: {}; }}",
            self.legal,
            self.notice,
            self.font_family()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAILWIND_CONFIG: &str = include_str!("../../checker-web/tailwind.config.js");

    #[test]
    fn test_font_family_quotes_spaced_names() {
        let theme = Theme::default();
        assert_eq!(theme.font_family(), "\"Microsoft YaHei\", Arial, sans-serif");
    }

    #[test]
    fn test_css_variables() {
        let css = Theme::default().css_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--color-legal: #8B0000;"));
        assert!(css.contains("--color-notice: #FFA500;"));
    }

    #[test]
    fn test_serializes_palette() {
        let json = serde_json::to_value(Theme::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "legal": "#8B0000",
                "notice": "#FFA500",
                "font_sans": ["Microsoft YaHei", "Arial", "sans-serif"],
            })
        );
    }

    #[test]
    fn test_palette_matches_tailwind_config() {
        let theme = Theme::default();
        assert!(TAILWIND_CONFIG.contains(&format!("legal: '{}'", theme.legal)));
        assert!(TAILWIND_CONFIG.contains(&format!("notice: '{}'", theme.notice)));
        for family in theme.font_sans {
            assert!(TAILWIND_CONFIG.contains(family), "missing font {family}");
        }
    }
}
