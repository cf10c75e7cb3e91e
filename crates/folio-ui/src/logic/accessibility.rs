//! Keyboard, focus and form helpers.

use once_cell::sync::Lazy;
use regex::Regex;

use super::config::PageConfig;
use super::dom::Document;

static EMAIL_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Semantic meaning of a key press handled at document level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Close whatever overlay is open. The page has none yet, so this is a no-op.
    Dismiss,
}

impl KeyAction {
    /// Map a `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Dismiss),
            _ => None,
        }
    }
}

/// Draw the focus ring on a navigation link.
pub fn apply_focus_outline<D: Document>(doc: &D, config: &PageConfig, link: &D::Element) {
    doc.set_style(link, "outline", &config.focus_outline);
    doc.set_style(link, "outline-offset", &config.focus_outline_offset);
}

/// Remove the focus ring from a navigation link.
pub fn clear_focus_outline<D: Document>(doc: &D, link: &D::Element) {
    doc.set_style(link, "outline", "none");
}

/// Loose `local@domain.tld` shape check for contact inputs.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(value))
}
