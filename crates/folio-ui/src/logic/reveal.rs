//! Fade-in of marked elements the first time they scroll into view.

use tracing::debug;

use super::config::PageConfig;
use super::dom::{Document, Intersection, Selector};

/// Options handed to the browser's intersection watcher.
#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    /// CSS margin applied to the root before intersection is computed.
    pub root_margin: String,
    /// Visible ratio at which the callback fires.
    pub threshold: f64,
}

/// Watcher options for fade-in elements.
#[must_use]
pub fn fade_in_observer_options(config: &PageConfig) -> ObserverOptions {
    ObserverOptions {
        root_margin: config.fade_root_margin.clone(),
        threshold: config.fade_threshold,
    }
}

/// Elements marked for fade-in, in document order.
pub fn fade_in_targets<D: Document>(doc: &D, config: &PageConfig) -> Vec<D::Element> {
    doc.query_all(&Selector::Class(&config.fade_in_class))
}

/// Apply the visible state to every intersecting entry.
///
/// The state is never removed, so entries leaving the viewport are ignored. Returns the
/// number of elements that became visible during this call.
pub fn reveal_intersections<D: Document>(
    doc: &D,
    config: &PageConfig,
    entries: &[Intersection<D::Element>],
) -> usize {
    let mut revealed = 0;
    for entry in entries.iter().filter(|entry| entry.is_intersecting) {
        if !doc.has_class(&entry.target, &config.visible_class) {
            doc.add_class(&entry.target, &config.visible_class);
            revealed += 1;
        }
    }
    if revealed > 0 {
        debug!(revealed, "fade-in elements revealed");
    }
    revealed
}

/// Reveal every fade-in element at once, for browsers without intersection watching.
pub fn reveal_all<D: Document>(doc: &D, config: &PageConfig) -> usize {
    let entries: Vec<_> = fade_in_targets(doc, config)
        .into_iter()
        .map(|target| Intersection::new(target, true))
        .collect();
    reveal_intersections(doc, config, &entries)
}
