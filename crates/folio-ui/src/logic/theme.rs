//! Theme preference persisted by the browser.

use tracing::debug;

use super::config::PageConfig;
use super::dom::Document;

/// Supported colour schemes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light theme mode.
    #[default]
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier used in storage and CSS datasets.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interpret a stored preference; anything but `"dark"` is light.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }
}

/// Read the stored theme preference. Nothing is written back.
pub fn load_theme_preference<D: Document>(doc: &D, config: &PageConfig) -> ThemeMode {
    let mode = ThemeMode::from_stored(doc.stored_value(&config.theme_storage_key).as_deref());
    debug!(theme = mode.as_str(), "theme preference loaded");
    mode
}
