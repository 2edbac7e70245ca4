//! Theme registry and loader
//!
//! Provides the built-in themes with user color overrides.

mod gruvbox;
mod nord;
pub(crate) mod scanner;

use scanveil_core::config::{ThemeColorOverrides, ThemeConfig};
use ratatui::style::Color;
use tracing::warn;

use crate::theme::Theme;

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        // Full form: RRGGBB
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Load a theme by name from config
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let base = match config.name.to_lowercase().as_str() {
        "scanner-red" | "scanner" => scanner::red(),
        "gruvbox-dark" | "gruvbox" => gruvbox::dark(),
        "nord" => nord::default(),
        other => {
            warn!(theme = other, "Unknown theme, falling back to scanner-red");
            scanner::red()
        }
    };

    apply_overrides(base, &config.colors)
}

/// Apply user color overrides to a base theme
fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    let slots: [(&Option<String>, &mut Color); 8] = [
        (&overrides.background, &mut theme.background),
        (&overrides.backdrop, &mut theme.backdrop),
        (&overrides.border, &mut theme.border),
        (&overrides.line, &mut theme.line),
        (&overrides.status_bg, &mut theme.status_bg),
        (&overrides.status_fg, &mut theme.status_fg),
        (&overrides.muted, &mut theme.muted),
        (&overrides.accent, &mut theme.accent),
    ];

    for (hex, slot) in slots {
        if let Some(hex) = hex {
            match parse_hex_color(hex) {
                Some(color) => *slot = color,
                None => warn!(color = %hex, "Ignoring invalid theme color"),
            }
        }
    }

    theme
}

/// Get list of available theme names
pub fn available_themes() -> Vec<&'static str> {
    vec!["scanner-red", "gruvbox-dark", "nord"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color_6digit() {
        let color = parse_hex_color("#ff5500").unwrap();
        assert!(matches!(color, Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_3digit() {
        let color = parse_hex_color("#f50").unwrap();
        assert!(matches!(color, Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert!(parse_hex_color("invalid").is_none());
        assert!(parse_hex_color("#gg0000").is_none());
        assert!(parse_hex_color("#ééé").is_none());
    }

    #[test]
    fn test_load_theme_default() {
        let theme = load_theme(&ThemeConfig::default());
        assert!(matches!(theme.line, Color::Rgb(0xff, 0x2a, 0x2a)));
    }

    #[test]
    fn test_load_theme_unknown_falls_back() {
        let config = ThemeConfig {
            name: "no-such-theme".to_string(),
            ..Default::default()
        };
        assert_eq!(load_theme(&config).line, load_theme(&ThemeConfig::default()).line);
    }

    #[test]
    fn test_load_theme_with_override() {
        let config = ThemeConfig {
            name: "nord".to_string(),
            colors: ThemeColorOverrides {
                line: Some("#00ff00".to_string()),
                border: Some("bogus".to_string()),
                ..Default::default()
            },
        };
        let theme = load_theme(&config);
        assert!(matches!(theme.line, Color::Rgb(0, 255, 0)));
        assert!(matches!(theme.border, Color::Rgb(0xd8, 0xde, 0xe9)));
    }

    #[test]
    fn test_override_muted() {
        let config = ThemeConfig {
            name: "scanner-red".to_string(),
            colors: ThemeColorOverrides {
                muted: Some("#123".to_string()),
                ..Default::default()
            },
        };
        let theme = load_theme(&config);
        assert!(matches!(theme.muted, Color::Rgb(0x11, 0x22, 0x33)));
    }

    #[test]
    fn test_available_themes_load() {
        for name in available_themes() {
            let config = ThemeConfig {
                name: name.to_string(),
                ..Default::default()
            };
            let _ = load_theme(&config);
        }
    }
}
