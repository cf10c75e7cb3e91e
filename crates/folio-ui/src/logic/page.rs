//! Page lifecycle: one-time initialisation plus the per-event entry points the
//! browser bindings call into.

use tracing::{debug, info};

use super::accessibility::{self, KeyAction};
use super::active_section::highlight_active_section;
use super::config::PageConfig;
use super::dom::{Capability, Document, Intersection};
use super::footer::render_copyright;
use super::lazy_images::{deferred_images, load_all_images, load_intersecting_images};
use super::links::{MAIL_PREFIX, handle_mail_link, harden_external_links};
use super::navbar::sync_navbar;
use super::reveal::{fade_in_targets, reveal_all, reveal_intersections};
use super::smooth_scroll::{ClickOutcome, navigate_to_anchor};
use super::theme::{ThemeMode, load_theme_preference};

/// Summary of what initialisation found and changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitReport {
    /// Footer copyright line, when the footer exists.
    pub copyright: Option<String>,
    /// Outbound links given new-context and isolation attributes.
    pub hardened_links: usize,
    /// Elements registered for fade-in.
    pub fade_targets: usize,
    /// Images with a deferred source.
    pub deferred_images: usize,
    /// Whether fade-in and lazy loading wait for intersection reports.
    pub watches_intersections: bool,
    /// Whether a resize watcher should be installed.
    pub watches_resize: bool,
    /// Stored theme preference.
    pub theme: ThemeMode,
}

/// Behaviours of the portfolio page bound to one configuration.
#[derive(Clone, Debug, Default)]
pub struct Page {
    config: PageConfig,
}

impl Page {
    /// Page using `config`.
    #[must_use]
    pub const fn new(config: PageConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Run the load-time work. Safe to call more than once.
    ///
    /// Without intersection watching, fade-in elements are revealed and deferred images
    /// loaded immediately. The theme preference is read last.
    pub fn init<D: Document>(&self, doc: &D) -> InitReport {
        let copyright = render_copyright(doc, &self.config);
        let hardened_links = harden_external_links(doc);
        let watches_intersections = doc.supports(Capability::IntersectionObserver);
        let watches_resize = doc.supports(Capability::ResizeObserver);

        let fade_targets = fade_in_targets(doc, &self.config).len();
        let deferred = deferred_images(doc).len();
        if !watches_intersections {
            debug!("intersection watching unavailable; loading eagerly");
            reveal_all(doc, &self.config);
            load_all_images(doc, &self.config);
        }
        sync_navbar(doc, &self.config);
        // Storage may be blocked; everything above must already have run.
        let theme = load_theme_preference(doc, &self.config);

        info!(
            hardened_links,
            fade_targets,
            deferred_images = deferred,
            watches_intersections,
            "page initialised"
        );
        InitReport {
            copyright,
            hardened_links,
            fade_targets,
            deferred_images: deferred,
            watches_intersections,
            watches_resize,
            theme,
        }
    }

    /// Scroll handler: navbar styling and active-section highlight run independently.
    pub fn on_scroll<D: Document>(&self, doc: &D) {
        sync_navbar(doc, &self.config);
        highlight_active_section(doc, &self.config);
    }

    /// Link activation handler.
    pub fn on_link_click<D: Document>(&self, doc: &D, href: &str) -> ClickOutcome {
        if href.starts_with(MAIL_PREFIX) {
            return handle_mail_link();
        }
        navigate_to_anchor(doc, &self.config, href)
    }

    /// Document-level key handler.
    pub fn on_key(&self, key: &str) -> Option<KeyAction> {
        let action = KeyAction::from_key(key);
        if let Some(action) = action {
            debug!(?action, "key action");
        }
        action
    }

    /// Navigation link gained focus.
    pub fn on_link_focus<D: Document>(&self, doc: &D, link: &D::Element) {
        accessibility::apply_focus_outline(doc, &self.config, link);
    }

    /// Navigation link lost focus.
    pub fn on_link_blur<D: Document>(&self, doc: &D, link: &D::Element) {
        accessibility::clear_focus_outline(doc, link);
    }

    /// Fade-in watcher callback.
    pub fn on_fade_entries<D: Document>(&self, doc: &D, entries: &[Intersection<D::Element>]) {
        reveal_intersections(doc, &self.config, entries);
    }

    /// Lazy-image watcher callback; returns images to stop watching.
    pub fn on_image_entries<D: Document>(
        &self,
        doc: &D,
        entries: &[Intersection<D::Element>],
    ) -> Vec<D::Element> {
        load_intersecting_images(doc, &self.config, entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::dom::memory::{ElementSpec, MemoryDocument};

    #[test]
    fn init_reports_counts_and_theme() {
        let doc = MemoryDocument::new();
        doc.set_year(2026);
        doc.store("theme", "dark");
        doc.append(None, ElementSpec::new("nav").id("navbar"));
        doc.append(None, ElementSpec::new("p").id("year-text"));
        doc.append(None, ElementSpec::new("a").attr("href", "https://example.com"));
        doc.append(None, ElementSpec::new("div").class("fade-in"));
        let img = doc.append(None, ElementSpec::new("img").attr("data-src", "a.png"));

        let report = Page::default().init(&doc);

        assert_eq!(
            report.copyright.as_deref(),
            Some("© 2026 Dwi Vendy. All rights reserved.")
        );
        assert_eq!(report.hardened_links, 1);
        assert_eq!(report.fade_targets, 1);
        assert_eq!(report.deferred_images, 1);
        assert!(report.watches_intersections);
        assert!(report.watches_resize);
        assert_eq!(report.theme, ThemeMode::Dark);
        assert_eq!(doc.attribute(&img, "src"), None);
    }

    #[test]
    fn init_without_intersection_support_loads_eagerly() {
        let doc = MemoryDocument::new();
        doc.disable(Capability::IntersectionObserver);
        doc.disable(Capability::ResizeObserver);
        let card = doc.append(None, ElementSpec::new("div").class("fade-in"));
        let img = doc.append(None, ElementSpec::new("img").attr("data-src", "a.png"));

        let report = Page::default().init(&doc);

        assert!(!report.watches_intersections);
        assert!(!report.watches_resize);
        assert_eq!(report.fade_targets, 1);
        assert_eq!(report.deferred_images, 1);
        assert!(doc.has_class(&card, "visible"));
        assert_eq!(doc.attribute(&img, "src").as_deref(), Some("a.png"));

        assert_eq!(Page::default().init(&doc), report);
    }

    #[test]
    fn blocked_storage_falls_back_to_light_after_setup() {
        let doc = MemoryDocument::new();
        doc.block_storage();
        doc.store("theme", "dark");
        doc.disable(Capability::IntersectionObserver);
        let nav = doc.append(None, ElementSpec::new("nav").id("navbar"));
        let card = doc.append(None, ElementSpec::new("div").class("fade-in"));

        let report = Page::default().init(&doc);

        assert_eq!(report.theme, ThemeMode::Light);
        assert!(doc.has_class(&nav, "bg-transparent"));
        assert!(doc.has_class(&card, "visible"));
    }

    #[test]
    fn link_clicks_dispatch_by_scheme() {
        let doc = MemoryDocument::new();
        let page = Page::default();
        assert_eq!(
            page.on_link_click(&doc, "mailto:hi@example.com"),
            ClickOutcome::Default
        );
        assert_eq!(page.on_link_click(&doc, "#missing"), ClickOutcome::PreventDefault);
        assert_eq!(page.on_key("Escape"), Some(KeyAction::Dismiss));
    }
}
