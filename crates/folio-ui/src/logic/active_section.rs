//! Highlighting of the navigation link for the section under the viewport.

use tracing::trace;

use super::config::PageConfig;
use super::dom::{Document, Selector};
use super::navbar::navbar_links;

/// Vertical extent of a page section.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    /// Section id, matched against link fragments.
    pub id: String,
    /// Offset of the section from the top of the document.
    pub top: f64,
    /// Rendered height of the section.
    pub height: f64,
}

impl SectionSpan {
    /// Whether `scroll_y` lies in `[top - lead, top - lead + height)`.
    #[must_use]
    pub fn contains(&self, scroll_y: f64, lead: f64) -> bool {
        let start = self.top - lead;
        scroll_y >= start && scroll_y < start + self.height
    }
}

/// Id of the section containing `scroll_y`; the last match wins when ranges overlap.
#[must_use]
pub fn active_section_id(spans: &[SectionSpan], scroll_y: f64, lead: f64) -> Option<&str> {
    spans
        .iter()
        .rev()
        .find(|span| span.contains(scroll_y, lead))
        .map(|span| span.id.as_str())
}

/// Measure every `section[id]` in document order.
pub fn section_spans<D: Document>(doc: &D) -> Vec<SectionSpan> {
    doc.query_all(&Selector::SectionsWithId)
        .iter()
        .map(|section| SectionSpan {
            id: doc.attribute(section, "id").unwrap_or_default(),
            top: doc.offset_top(section),
            height: doc.client_height(section),
        })
        .collect()
}

/// Move the active classes to the navbar link of the current section.
///
/// When no section contains the scroll offset the previous highlight is kept.
pub fn highlight_active_section<D: Document>(doc: &D, config: &PageConfig) -> Option<String> {
    let spans = section_spans(doc);
    let active = active_section_id(&spans, doc.scroll_y(), config.section_lead_px)?;
    let fragment = format!("#{active}");
    for link in navbar_links(doc, config) {
        for class in &config.active_link_classes {
            doc.remove_class(&link, class);
        }
        if doc.attribute(&link, "href").as_deref() == Some(fragment.as_str()) {
            for class in &config.active_link_classes {
                doc.add_class(&link, class);
            }
        }
    }
    trace!(section = active, "active section updated");
    Some(active.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::dom::memory::{ElementSpec, MemoryDocument, NodeId};

    fn span(id: &str, top: f64, height: f64) -> SectionSpan {
        SectionSpan {
            id: id.to_string(),
            top,
            height,
        }
    }

    fn page() -> (MemoryDocument, Vec<NodeId>) {
        let doc = MemoryDocument::new();
        let nav = doc.append(None, ElementSpec::new("nav").id("navbar"));
        let links = ["#home", "#about", "#contact"]
            .iter()
            .map(|href| doc.append(Some(nav), ElementSpec::new("a").attr("href", href)))
            .collect();
        doc.append(None, ElementSpec::new("section").id("home").geometry(0.0, 800.0));
        doc.append(None, ElementSpec::new("section").id("about").geometry(800.0, 600.0));
        doc.append(None, ElementSpec::new("section").id("contact").geometry(1400.0, 500.0));
        (doc, links)
    }

    fn active_links(doc: &MemoryDocument, links: &[NodeId]) -> Vec<NodeId> {
        links
            .iter()
            .copied()
            .filter(|link| {
                doc.has_class(link, "font-bold") && doc.has_class(link, "text-[#FF6B4A]")
            })
            .collect()
    }

    #[test]
    fn range_starts_at_lead_and_excludes_end() {
        let about = span("about", 800.0, 600.0);
        assert!(!about.contains(649.0, 150.0));
        assert!(about.contains(650.0, 150.0));
        assert!(about.contains(1249.0, 150.0));
        assert!(!about.contains(1250.0, 150.0));
    }

    #[test]
    fn overlapping_ranges_resolve_to_last_match() {
        let spans = [span("a", 0.0, 1000.0), span("b", 400.0, 200.0)];
        assert_eq!(active_section_id(&spans, 300.0, 150.0), Some("b"));
        assert_eq!(active_section_id(&spans, 800.0, 150.0), Some("a"));
        assert_eq!(active_section_id(&spans, 5000.0, 150.0), None);
    }

    #[test]
    fn exactly_one_link_is_active() {
        let config = PageConfig::default();
        let (doc, links) = page();

        doc.set_scroll_y(700.0);
        assert_eq!(highlight_active_section(&doc, &config).as_deref(), Some("about"));
        assert_eq!(active_links(&doc, &links), vec![links[1]]);

        doc.set_scroll_y(1300.0);
        assert_eq!(highlight_active_section(&doc, &config).as_deref(), Some("contact"));
        assert_eq!(active_links(&doc, &links), vec![links[2]]);
    }

    #[test]
    fn previous_highlight_survives_gaps() {
        let config = PageConfig::default();
        let (doc, links) = page();

        doc.set_scroll_y(10.0);
        highlight_active_section(&doc, &config);
        doc.set_scroll_y(9000.0);
        assert_eq!(highlight_active_section(&doc, &config), None);
        assert_eq!(active_links(&doc, &links), vec![links[0]]);
    }
}
