//! Document capability consumed by the page behaviours.
//!
//! Behaviours never own the DOM. They read and mutate it through [`Document`], which
//! the browser build backs with web-sys and the test build backs with
//! [`memory::MemoryDocument`].

pub mod memory;

/// Structural queries the page behaviours issue against the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selector<'a> {
    /// Anchors whose `href` starts with the given prefix (`a[href^="..."]`).
    HrefPrefix(&'a str),
    /// Elements carrying the given class (`.name`).
    Class(&'a str),
    /// Sections with an `id` attribute (`section[id]`).
    SectionsWithId,
    /// Images with a deferred source (`img[data-src]`).
    DeferredImages,
}

impl Selector<'_> {
    /// CSS selector text understood by `querySelectorAll`.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::HrefPrefix(prefix) => format!("a[href^=\"{}\"]", prefix.replace('"', "\\\"")),
            Self::Class(name) => format!(".{name}"),
            Self::SectionsWithId => "section[id]".to_string(),
            Self::DeferredImages => "img[data-src]".to_string(),
        }
    }
}

/// Optional browser features that gate progressive enhancements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    /// `IntersectionObserver` is available.
    IntersectionObserver,
    /// `ResizeObserver` is available.
    ResizeObserver,
}

impl Capability {
    /// Global constructor name probed on `window`.
    #[must_use]
    pub const fn global_name(self) -> &'static str {
        match self {
            Self::IntersectionObserver => "IntersectionObserver",
            Self::ResizeObserver => "ResizeObserver",
        }
    }
}

/// A single report from an intersection watcher.
#[derive(Clone, Debug, PartialEq)]
pub struct Intersection<E> {
    /// Observed element.
    pub target: E,
    /// Whether the element currently intersects the watcher's root region.
    pub is_intersecting: bool,
}

impl<E> Intersection<E> {
    /// Build an entry for `target`.
    pub const fn new(target: E, is_intersecting: bool) -> Self {
        Self {
            target,
            is_intersecting,
        }
    }
}

/// Element and viewport operations the page relies on.
///
/// All methods take `&self`: the document is shared and mutated in place, the way the
/// browser exposes it.
pub trait Document {
    /// Handle to a live element.
    type Element: Clone;

    /// Look up an element by its `id`.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &Selector<'_>) -> Vec<Self::Element>;

    /// Descendants of `root` matching `selector`, in document order.
    fn query_all_within(&self, root: &Self::Element, selector: &Selector<'_>)
    -> Vec<Self::Element>;

    /// Whether `element` carries `class`.
    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    /// Add `class` to `element` (no-op when already present).
    fn add_class(&self, element: &Self::Element, class: &str);

    /// Remove `class` from `element` (no-op when absent).
    fn remove_class(&self, element: &Self::Element, class: &str);

    /// Read an attribute.
    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    /// Write an attribute.
    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str);

    /// Replace the element's text content.
    fn set_text(&self, element: &Self::Element, text: &str);

    /// Set an inline style property (CSS property name, e.g. `outline-offset`).
    fn set_style(&self, element: &Self::Element, property: &str, value: &str);

    /// Distance from the top of the document to the element, in CSS pixels.
    fn offset_top(&self, element: &Self::Element) -> f64;

    /// Rendered inner height of the element, in CSS pixels.
    fn client_height(&self, element: &Self::Element) -> f64;

    /// Current vertical scroll offset of the viewport.
    fn scroll_y(&self) -> f64;

    /// Animate the viewport so `top` ends up at its upper edge.
    fn smooth_scroll_to(&self, top: f64);

    /// Whether an optional browser feature is present.
    fn supports(&self, capability: Capability) -> bool;

    /// Calendar year at the time of the call.
    fn current_year(&self) -> i32;

    /// Raw value from browser-local storage.
    fn stored_value(&self, key: &str) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_render_expected_css() {
        assert_eq!(Selector::HrefPrefix("#").to_css(), "a[href^=\"#\"]");
        assert_eq!(
            Selector::HrefPrefix("mailto:").to_css(),
            "a[href^=\"mailto:\"]"
        );
        assert_eq!(Selector::Class("fade-in").to_css(), ".fade-in");
        assert_eq!(Selector::SectionsWithId.to_css(), "section[id]");
        assert_eq!(Selector::DeferredImages.to_css(), "img[data-src]");
    }

    #[test]
    fn capability_names_match_globals() {
        assert_eq!(
            Capability::IntersectionObserver.global_name(),
            "IntersectionObserver"
        );
        assert_eq!(Capability::ResizeObserver.global_name(), "ResizeObserver");
    }
}
