//! In-memory document used to exercise page behaviours off the browser.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use chrono::Datelike;

use super::{Capability, Document, Selector};

/// Handle to a node in a [`MemoryDocument`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Description of an element to append to a [`MemoryDocument`].
#[derive(Clone, Debug, Default)]
pub struct ElementSpec {
    tag: String,
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    offset_top: f64,
    client_height: f64,
}

impl ElementSpec {
    /// Start a spec for an element with `tag`.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    /// Set the element id.
    #[must_use]
    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    /// Add a class.
    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    /// Set an attribute.
    #[must_use]
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    /// Layout geometry reported by `offset_top` and `client_height`.
    #[must_use]
    pub const fn geometry(mut self, offset_top: f64, client_height: f64) -> Self {
        self.offset_top = offset_top;
        self.client_height = client_height;
        self
    }
}

#[derive(Clone, Debug)]
struct Node {
    parent: Option<NodeId>,
    spec: ElementSpec,
    text: String,
    style: BTreeMap<String, String>,
}

/// Document tree, viewport and storage held entirely in memory.
#[derive(Debug)]
pub struct MemoryDocument {
    nodes: RefCell<Vec<Node>>,
    scroll_y: Cell<f64>,
    scroll_history: RefCell<Vec<f64>>,
    missing: RefCell<HashSet<Capability>>,
    storage: RefCell<HashMap<String, String>>,
    storage_blocked: Cell<bool>,
    year: Cell<i32>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Empty document at scroll offset zero with every capability available.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: RefCell::new(Vec::new()),
            scroll_y: Cell::new(0.0),
            scroll_history: RefCell::new(Vec::new()),
            missing: RefCell::new(HashSet::new()),
            storage: RefCell::new(HashMap::new()),
            storage_blocked: Cell::new(false),
            year: Cell::new(chrono::Local::now().year()),
        }
    }

    /// Append an element under `parent` (or at the document root).
    pub fn append(&self, parent: Option<NodeId>, spec: ElementSpec) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        nodes.push(Node {
            parent,
            spec,
            text: String::new(),
            style: BTreeMap::new(),
        });
        id
    }

    /// Move the viewport without recording a programmatic scroll.
    pub fn set_scroll_y(&self, value: f64) {
        self.scroll_y.set(value);
    }

    /// Programmatic scroll requests, oldest first.
    #[must_use]
    pub fn scroll_history(&self) -> Vec<f64> {
        self.scroll_history.borrow().clone()
    }

    /// Mark a capability as unavailable.
    pub fn disable(&self, capability: Capability) {
        self.missing.borrow_mut().insert(capability);
    }

    /// Pin the calendar year.
    pub fn set_year(&self, year: i32) {
        self.year.set(year);
    }

    /// Seed browser-local storage.
    pub fn store(&self, key: &str, value: &str) {
        self.storage
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// Make local storage unreadable, as with cookies disabled or a sandboxed frame.
    pub fn block_storage(&self) {
        self.storage_blocked.set(true);
    }

    /// Current text content of a node.
    #[must_use]
    pub fn text(&self, node: NodeId) -> String {
        self.with_node(node, |n| n.text.clone()).unwrap_or_default()
    }

    /// Inline style property of a node.
    #[must_use]
    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.with_node(node, |n| n.style.get(property).cloned())
            .flatten()
    }

    /// Classes carried by a node, sorted.
    #[must_use]
    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.with_node(node, |n| n.spec.classes.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn with_node<T>(&self, node: NodeId, f: impl FnOnce(&Node) -> T) -> Option<T> {
        self.nodes.borrow().get(node.0).map(f)
    }

    fn with_node_mut(&self, node: NodeId, f: impl FnOnce(&mut Node)) {
        if let Some(n) = self.nodes.borrow_mut().get_mut(node.0) {
            f(n);
        }
    }

    fn is_descendant(nodes: &[Node], node: NodeId, root: NodeId) -> bool {
        let mut cursor = nodes.get(node.0).and_then(|n| n.parent);
        while let Some(current) = cursor {
            if current == root {
                return true;
            }
            cursor = nodes.get(current.0).and_then(|n| n.parent);
        }
        false
    }

    fn matches(node: &Node, selector: &Selector<'_>) -> bool {
        let spec = &node.spec;
        match selector {
            Selector::HrefPrefix(prefix) => {
                spec.tag == "a"
                    && spec
                        .attributes
                        .get("href")
                        .is_some_and(|href| href.starts_with(*prefix))
            }
            Selector::Class(name) => spec.classes.contains(*name),
            Selector::SectionsWithId => {
                spec.tag == "section" && spec.attributes.contains_key("id")
            }
            Selector::DeferredImages => {
                spec.tag == "img" && spec.attributes.contains_key("data-src")
            }
        }
    }

    fn select(&self, root: Option<NodeId>, selector: &Selector<'_>) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (NodeId(idx), node))
            .filter(|(id, node)| {
                root.is_none_or(|root| Self::is_descendant(&nodes, *id, root))
                    && Self::matches(node, selector)
            })
            .map(|(id, _)| id)
            .collect()
    }
}

impl Document for MemoryDocument {
    type Element = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .borrow()
            .iter()
            .position(|n| n.spec.attributes.get("id").is_some_and(|v| v == id))
            .map(NodeId)
    }

    fn query_all(&self, selector: &Selector<'_>) -> Vec<NodeId> {
        self.select(None, selector)
    }

    fn query_all_within(&self, root: &NodeId, selector: &Selector<'_>) -> Vec<NodeId> {
        self.select(Some(*root), selector)
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.with_node(*element, |n| n.spec.classes.contains(class))
            .unwrap_or(false)
    }

    fn add_class(&self, element: &NodeId, class: &str) {
        self.with_node_mut(*element, |n| {
            n.spec.classes.insert(class.to_string());
        });
    }

    fn remove_class(&self, element: &NodeId, class: &str) {
        self.with_node_mut(*element, |n| {
            n.spec.classes.remove(class);
        });
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.with_node(*element, |n| n.spec.attributes.get(name).cloned())
            .flatten()
    }

    fn set_attribute(&self, element: &NodeId, name: &str, value: &str) {
        self.with_node_mut(*element, |n| {
            n.spec
                .attributes
                .insert(name.to_string(), value.to_string());
        });
    }

    fn set_text(&self, element: &NodeId, text: &str) {
        self.with_node_mut(*element, |n| n.text = text.to_string());
    }

    fn set_style(&self, element: &NodeId, property: &str, value: &str) {
        self.with_node_mut(*element, |n| {
            n.style.insert(property.to_string(), value.to_string());
        });
    }

    fn offset_top(&self, element: &NodeId) -> f64 {
        self.with_node(*element, |n| n.spec.offset_top)
            .unwrap_or_default()
    }

    fn client_height(&self, element: &NodeId) -> f64 {
        self.with_node(*element, |n| n.spec.client_height)
            .unwrap_or_default()
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn smooth_scroll_to(&self, top: f64) {
        self.scroll_history.borrow_mut().push(top);
        // Browsers clamp to the scrollable range; only the lower bound is modelled.
        self.scroll_y.set(top.max(0.0));
    }

    fn supports(&self, capability: Capability) -> bool {
        !self.missing.borrow().contains(&capability)
    }

    fn current_year(&self) -> i32 {
        self.year.get()
    }

    fn stored_value(&self, key: &str) -> Option<String> {
        if self.storage_blocked.get() {
            return None;
        }
        self.storage.borrow().get(key).cloned()
    }
}
