//! Navbar styling driven by the viewport scroll offset.

use tracing::trace;

use super::config::PageConfig;
use super::dom::{Document, Selector};

/// Presentation state of the navbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarState {
    /// Page scrolled past the threshold; navbar draws its solid background.
    Scrolled,
    /// Page at (or near) the top; navbar stays transparent.
    Transparent,
}

impl NavbarState {
    /// State for a scroll offset. Offsets equal to the threshold stay transparent.
    #[must_use]
    pub fn for_offset(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            Self::Scrolled
        } else {
            Self::Transparent
        }
    }
}

/// Toggle the navbar classes for the current scroll offset.
///
/// Returns `None` when the page has no navbar.
pub fn sync_navbar<D: Document>(doc: &D, config: &PageConfig) -> Option<NavbarState> {
    let navbar = doc.element_by_id(&config.navbar_id)?;
    let state = NavbarState::for_offset(doc.scroll_y(), config.scrolled_threshold_px);
    match state {
        NavbarState::Scrolled => {
            doc.add_class(&navbar, &config.scrolled_class);
            doc.remove_class(&navbar, &config.transparent_class);
        }
        NavbarState::Transparent => {
            doc.remove_class(&navbar, &config.scrolled_class);
            doc.add_class(&navbar, &config.transparent_class);
        }
    }
    trace!(?state, "navbar synced");
    Some(state)
}

/// In-page anchors inside the navbar, in document order.
pub fn navbar_links<D: Document>(doc: &D, config: &PageConfig) -> Vec<D::Element> {
    doc.element_by_id(&config.navbar_id)
        .map(|navbar| doc.query_all_within(&navbar, &Selector::HrefPrefix("#")))
        .unwrap_or_default()
}
