//! Smooth in-page navigation for fragment links.

use tracing::debug;

use super::config::PageConfig;
use super::dom::Document;

/// What the browser should do with a link activation after the handler ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Suppress the browser's default navigation.
    PreventDefault,
    /// Let the browser follow the link.
    Default,
}

/// Element id referenced by a fragment href (`#about` -> `about`).
///
/// The bare `#` names no element.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Viewport offset that leaves `offset_top` just below the fixed header.
#[must_use]
pub fn scroll_target_top(offset_top: f64, header_offset: f64) -> f64 {
    offset_top - header_offset
}

/// Handle activation of a link pointing at `href`.
///
/// Fragment links always cancel the default jump; the viewport only moves when the
/// fragment resolves to an element.
pub fn navigate_to_anchor<D: Document>(
    doc: &D,
    config: &PageConfig,
    href: &str,
) -> ClickOutcome {
    if !href.starts_with('#') {
        return ClickOutcome::Default;
    }
    let Some(target) = fragment_id(href).and_then(|id| doc.element_by_id(id)) else {
        debug!(href, "anchor target not found");
        return ClickOutcome::PreventDefault;
    };
    let top = scroll_target_top(doc.offset_top(&target), config.header_offset_px);
    doc.smooth_scroll_to(top);
    debug!(href, top, "scrolling to anchor");
    ClickOutcome::PreventDefault
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::dom::memory::{ElementSpec, MemoryDocument};

    #[test]
    fn fragment_parsing() {
        assert_eq!(fragment_id("#about"), Some("about"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("about"), None);
    }

    #[test]
    fn existing_target_lands_below_header() {
        let config = PageConfig::default();
        let doc = MemoryDocument::new();
        doc.append(
            None,
            ElementSpec::new("section").id("projects").geometry(1200.0, 600.0),
        );

        let outcome = navigate_to_anchor(&doc, &config, "#projects");

        assert_eq!(outcome, ClickOutcome::PreventDefault);
        assert_eq!(doc.scroll_history(), vec![1120.0]);
        assert!((1200.0 - doc.scroll_y() - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_target_leaves_viewport_alone() {
        let config = PageConfig::default();
        let doc = MemoryDocument::new();
        doc.set_scroll_y(333.0);

        assert_eq!(
            navigate_to_anchor(&doc, &config, "#nowhere"),
            ClickOutcome::PreventDefault
        );
        assert_eq!(navigate_to_anchor(&doc, &config, "#"), ClickOutcome::PreventDefault);
        assert!(doc.scroll_history().is_empty());
        assert!((doc.scroll_y() - 333.0).abs() < f64::EPSILON);
    }

    #[test]
    fn non_fragment_links_keep_default_behaviour() {
        let doc = MemoryDocument::new();
        assert_eq!(
            navigate_to_anchor(&doc, &PageConfig::default(), "https://example.com"),
            ClickOutcome::Default
        );
    }
}
