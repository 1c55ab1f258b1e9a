//! Theme registry and loader

mod gruvbox;
mod nord;
mod void;

pub use void::void;

use orbitx_core::config::{ThemeColorOverrides, ThemeConfig};
use ratatui::style::Color;

use crate::theme::Theme;

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
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
        "void" => void::void(),
        "gruvbox-dark" | "gruvbox" => gruvbox::dark(),
        "nord" => nord::default(),
        other => {
            tracing::warn!(
                theme = other,
                available = %available_themes().join(", "),
                "Unknown theme, falling back to void"
            );
            void::void()
        }
    };

    apply_overrides(base, &config.colors)
}

fn apply_override(slot: &mut Color, hex: &Option<String>) {
    if let Some(color) = hex.as_deref().and_then(parse_hex_color) {
        *slot = color;
    } else if let Some(hex) = hex {
        tracing::warn!(color = hex.as_str(), "Ignoring invalid theme color");
    }
}

/// Apply user color overrides to a base theme
fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    apply_override(&mut theme.background, &overrides.background);
    apply_override(&mut theme.foreground, &overrides.foreground);
    apply_override(&mut theme.accent, &overrides.accent);
    apply_override(&mut theme.dud, &overrides.dud);
    apply_override(&mut theme.muted, &overrides.muted);
    apply_override(&mut theme.telemetry, &overrides.telemetry);
    apply_override(&mut theme.status_bg, &overrides.status_bg);
    theme
}

/// Get list of available theme names
pub fn available_themes() -> Vec<&'static str> {
    vec!["void", "gruvbox-dark", "nord"]
}
