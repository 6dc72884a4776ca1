//! Built-in theme registry

mod dracula;
mod nord;

use tracing::warn;

use crate::theme::Theme;

/// Names accepted by `load_theme`
pub const THEME_NAMES: &[&str] = &["gruvbox-dark", "nord", "dracula"];

/// Load a theme by name, falling back to gruvbox-dark
pub fn load_theme(name: &str) -> Theme {
    match name.to_lowercase().as_str() {
        "gruvbox-dark" | "gruvbox" => Theme::default(),
        "nord" => nord::default(),
        "dracula" => dracula::default(),
        other => {
            warn!(
                "Unknown theme '{}', using gruvbox-dark (available: {})",
                other,
                THEME_NAMES.join(", ")
            );
            Theme::default()
        }
    }
}
