//! Deferred image loading.

use tracing::debug;

use super::config::PageConfig;
use super::dom::{Document, Intersection, Selector};

/// Images still waiting for their real source.
pub fn deferred_images<D: Document>(doc: &D) -> Vec<D::Element> {
    doc.query_all(&Selector::DeferredImages)
}

/// Swap the deferred source into `src` and drop the placeholder class.
///
/// An empty `data-src` keeps the current `src`.
pub fn load_deferred_image<D: Document>(doc: &D, config: &PageConfig, image: &D::Element) {
    let source = doc
        .attribute(image, "data-src")
        .filter(|src| !src.is_empty())
        .or_else(|| doc.attribute(image, "src"));
    if let Some(source) = source {
        doc.set_attribute(image, "src", &source);
    }
    doc.remove_class(image, &config.lazy_class);
}

/// Load every intersecting image and return those that should no longer be watched.
pub fn load_intersecting_images<D: Document>(
    doc: &D,
    config: &PageConfig,
    entries: &[Intersection<D::Element>],
) -> Vec<D::Element> {
    let loaded: Vec<_> = entries
        .iter()
        .filter(|entry| entry.is_intersecting)
        .map(|entry| {
            load_deferred_image(doc, config, &entry.target);
            entry.target.clone()
        })
        .collect();
    if !loaded.is_empty() {
        debug!(count = loaded.len(), "deferred images loaded");
    }
    loaded
}

/// Load every deferred image immediately.
pub fn load_all_images<D: Document>(doc: &D, config: &PageConfig) -> usize {
    let images = deferred_images(doc);
    for image in &images {
        load_deferred_image(doc, config, image);
    }
    images.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::dom::memory::{ElementSpec, MemoryDocument};

    #[test]
    fn intersecting_images_swap_source_once() {
        let config = PageConfig::default();
        let doc = MemoryDocument::new();
        let hero = doc.append(
            None,
            ElementSpec::new("img")
                .class("lazy")
                .attr("src", "placeholder.svg")
                .attr("data-src", "hero.webp"),
        );
        let below = doc.append(
            None,
            ElementSpec::new("img")
                .class("lazy")
                .attr("src", "placeholder.svg")
                .attr("data-src", "below.webp"),
        );

        let done = load_intersecting_images(
            &doc,
            &config,
            &[Intersection::new(hero, true), Intersection::new(below, false)],
        );

        assert_eq!(done, vec![hero]);
        assert_eq!(doc.attribute(&hero, "src").as_deref(), Some("hero.webp"));
        assert!(!doc.has_class(&hero, "lazy"));
        assert_eq!(doc.attribute(&below, "src").as_deref(), Some("placeholder.svg"));
        assert!(doc.has_class(&below, "lazy"));
    }

    #[test]
    fn empty_deferred_source_keeps_current_src() {
        let config = PageConfig::default();
        let doc = MemoryDocument::new();
        let img = doc.append(
            None,
            ElementSpec::new("img")
                .class("lazy")
                .attr("src", "kept.png")
                .attr("data-src", ""),
        );

        load_deferred_image(&doc, &config, &img);

        assert_eq!(doc.attribute(&img, "src").as_deref(), Some("kept.png"));
        assert!(!doc.has_class(&img, "lazy"));
    }

    #[test]
    fn eager_fallback_loads_everything() {
        let config = PageConfig::default();
        let doc = MemoryDocument::new();
        let a = doc.append(None, ElementSpec::new("img").attr("data-src", "a.png"));
        let b = doc.append(None, ElementSpec::new("img").attr("data-src", "b.png"));

        assert_eq!(load_all_images(&doc, &config), 2);
        assert_eq!(doc.attribute(&a, "src").as_deref(), Some("a.png"));
        assert_eq!(doc.attribute(&b, "src").as_deref(), Some("b.png"));
    }
}
