use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Auto-advance period in milliseconds (0 = disabled)
    #[serde(default = "default_auto_advance_ms")]
    pub auto_advance_ms: u64,
    /// Gap between slides in pixels
    #[serde(default = "default_gap_px")]
    pub gap_px: f64,
    /// Slide width used before the first slide has been laid out
    #[serde(default = "default_fallback_slide_width_px")]
    pub fallback_slide_width_px: f64,
    /// Viewport width at which two slides are shown
    #[serde(default = "default_medium_min_width")]
    pub medium_min_width: u32,
    /// Viewport width at which three slides are shown
    #[serde(default = "default_large_min_width")]
    pub large_min_width: u32,
    /// Indicator label, `{n}` is replaced by the 1-based position
    #[serde(default = "default_indicator_label")]
    pub indicator_label: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance_ms: default_auto_advance_ms(),
            gap_px: default_gap_px(),
            fallback_slide_width_px: default_fallback_slide_width_px(),
            medium_min_width: default_medium_min_width(),
            large_min_width: default_large_min_width(),
            indicator_label: default_indicator_label(),
        }
    }
}

impl CarouselConfig {
    /// Reject settings the carousel cannot lay out
    pub fn validate(&self) -> crate::Result<()> {
        if self.medium_min_width > self.large_min_width {
            return Err(crate::Error::Config(format!(
                "carousel.medium_min_width ({}) must not exceed carousel.large_min_width ({})",
                self.medium_min_width, self.large_min_width
            )));
        }
        if !self.gap_px.is_finite() || self.gap_px < 0.0 {
            return Err(crate::Error::Config(format!(
                "carousel.gap_px must be a non-negative number, got {}",
                self.gap_px
            )));
        }
        if !self.fallback_slide_width_px.is_finite() || self.fallback_slide_width_px <= 0.0 {
            return Err(crate::Error::Config(format!(
                "carousel.fallback_slide_width_px must be positive, got {}",
                self.fallback_slide_width_px
            )));
        }
        if !self.indicator_label.contains("{n}") {
            return Err(crate::Error::Config(format!(
                "carousel.indicator_label must contain '{{n}}', got '{}'",
                self.indicator_label
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Pixels per terminal column, used to turn the terminal width into a viewport width
    #[serde(default = "default_cell_width_px")]
    pub cell_width_px: u32,
    /// Theme name (e.g., "gruvbox-dark", "nord", "dracula")
    #[serde(default = "default_theme_name")]
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            cell_width_px: default_cell_width_px(),
            theme: default_theme_name(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "h", "<C-n>" (Ctrl+n), "<S-Tab>" (Shift+Tab), "<Home>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Show the previous slide
    #[serde(default = "default_key_previous")]
    pub previous: String,
    /// Show the next slide
    #[serde(default = "default_key_next")]
    pub next: String,
    /// Jump to the first indicator
    #[serde(default = "default_key_first")]
    pub first: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            previous: default_key_previous(),
            next: default_key_next(),
            first: default_key_first(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_previous() -> String { "h".to_string() }
fn default_key_next() -> String { "l".to_string() }
fn default_key_first() -> String { "<Home>".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("marquee")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_auto_advance_ms() -> u64 {
    4000
}

fn default_gap_px() -> f64 {
    24.0
}

fn default_fallback_slide_width_px() -> f64 {
    300.0
}

fn default_medium_min_width() -> u32 {
    640
}

fn default_large_min_width() -> u32 {
    1024
}

fn default_indicator_label() -> String {
    "Slide {n}".to_string()
}

fn default_tick_rate() -> u64 {
    100
}

fn default_cell_width_px() -> u32 {
    8
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_or_default(&Self::config_path())
    }

    /// Load configuration from `path`, or return defaults when it does not exist
    pub fn load_or_default(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.carousel.validate()?;
        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to an explicit file, creating parent directories
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;

        Ok(())
    }

    /// Render configuration as pretty TOML
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/marquee/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("marquee")
            .join("config.toml")
    }

    /// Get the log file path for the interactive UI
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("marquee.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.carousel.auto_advance_ms, 4000);
        assert_eq!(config.carousel.gap_px, 24.0);
        assert_eq!(config.carousel.fallback_slide_width_px, 300.0);
        assert_eq!(config.carousel.medium_min_width, 640);
        assert_eq!(config.carousel.large_min_width, 1024);
        assert_eq!(config.carousel.indicator_label, "Slide {n}");
        assert_eq!(config.ui.cell_width_px, 8);
        assert_eq!(config.keymap.next, "l");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [carousel]
            auto_advance_ms = 2500
            indicator_label = "Слайд {n}"
            "#,
        )
        .unwrap();
        assert_eq!(config.carousel.auto_advance_ms, 2500);
        assert_eq!(config.carousel.indicator_label, "Слайд {n}");
        assert_eq!(config.carousel.gap_px, 24.0);
        assert_eq!(config.ui.theme, "gruvbox-dark");
    }

    #[test]
    fn test_rejects_inverted_breakpoints() {
        let result = AppConfig::from_toml(
            r#"
            [carousel]
            medium_min_width = 2000
            "#,
        );
        assert!(matches!(result, Err(crate::Error::Config(_))));
    }

    #[test]
    fn test_rejects_label_without_placeholder() {
        let result = AppConfig::from_toml(
            r#"
            [carousel]
            indicator_label = "Slide"
            "#,
        );
        assert!(matches!(result, Err(crate::Error::Config(_))));
    }

    #[test]
    fn test_rejects_non_positive_fallback_width() {
        let mut carousel = CarouselConfig::default();
        carousel.fallback_slide_width_px = 0.0;
        assert!(carousel.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_gap() {
        let result = AppConfig::from_toml(
            r#"
            [carousel]
            gap_px = -4.0
            "#,
        );
        assert!(matches!(result, Err(crate::Error::Config(_))));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir()
            .join(format!("marquee-missing-{}", std::process::id()))
            .join("config.toml");
        let config = AppConfig::load_or_default(&path).unwrap();
        assert_eq!(config.carousel.auto_advance_ms, 4000);
        assert_eq!(config.ui.theme, "gruvbox-dark");
    }

    #[test]
    fn test_save_to_then_load() {
        let dir = std::env::temp_dir().join(format!("marquee-save-{}", std::process::id()));
        let path = dir.join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.carousel.auto_advance_ms = 1500;
        config.keymap.next = "<C-n>".to_string();
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_or_default(&path).unwrap();
        assert_eq!(loaded.carousel.auto_advance_ms, 1500);
        assert_eq!(loaded.keymap.next, "<C-n>");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_toml_round_trip_of_defaults() {
        let text = AppConfig::default().to_toml().unwrap();
        let parsed = AppConfig::from_toml(&text).unwrap();
        assert_eq!(parsed.carousel.large_min_width, 1024);
        assert_eq!(parsed.keymap.first, "<Home>");
    }

    #[test]
    fn test_expand_tilde_leaves_absolute_paths() {
        let path = Path::new("/var/lib/marquee");
        assert_eq!(expand_tilde(path), PathBuf::from("/var/lib/marquee"));
    }
}
