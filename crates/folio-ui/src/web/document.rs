//! web-sys backed [`Document`].

use js_sys::{Date, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, NodeList, ScrollBehavior, ScrollToOptions, Window};

use super::error::{WebError, report};
use crate::logic::dom::{Capability, Document, Selector};

pub(crate) struct WebDocument {
    window: Window,
    document: web_sys::Document,
}

impl WebDocument {
    pub(crate) fn new() -> Result<Self, WebError> {
        let window = web_sys::window().ok_or(WebError::MissingWindow)?;
        let document = window.document().ok_or(WebError::MissingDocument)?;
        Ok(Self { window, document })
    }

    pub(crate) const fn window(&self) -> &Window {
        &self.window
    }

    pub(crate) const fn document(&self) -> &web_sys::Document {
        &self.document
    }
}

fn elements(list: Result<NodeList, JsValue>) -> Vec<Element> {
    match list {
        Ok(list) => (0..list.length())
            .filter_map(|idx| list.get(idx))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
        Err(err) => {
            report(&WebError::js("querySelectorAll", &err));
            Vec::new()
        }
    }
}

fn check(operation: &'static str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        report(&WebError::js(operation, &err));
    }
}

impl Document for WebDocument {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_all(&self, selector: &Selector<'_>) -> Vec<Element> {
        elements(self.document.query_selector_all(&selector.to_css()))
    }

    fn query_all_within(&self, root: &Element, selector: &Selector<'_>) -> Vec<Element> {
        elements(root.query_selector_all(&selector.to_css()))
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn add_class(&self, element: &Element, class: &str) {
        check("classList.add", element.class_list().add_1(class));
    }

    fn remove_class(&self, element: &Element, class: &str) {
        check("classList.remove", element.class_list().remove_1(class));
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) {
        check("setAttribute", element.set_attribute(name, value));
    }

    fn set_text(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn set_style(&self, element: &Element, property: &str, value: &str) {
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            check("style.setProperty", html.style().set_property(property, value));
        }
    }

    fn offset_top(&self, element: &Element) -> f64 {
        element
            .dyn_ref::<HtmlElement>()
            .map_or(0.0, |html| f64::from(html.offset_top()))
    }

    fn client_height(&self, element: &Element) -> f64 {
        f64::from(element.client_height())
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or_default()
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn supports(&self, capability: Capability) -> bool {
        Reflect::has(&self.window, &JsValue::from_str(capability.global_name())).unwrap_or(false)
    }

    fn current_year(&self) -> i32 {
        i32::try_from(Date::new_0().get_full_year()).unwrap_or_default()
    }

    fn stored_value(&self, key: &str) -> Option<String> {
        let storage = match self.window.local_storage() {
            Ok(storage) => storage?,
            Err(err) => {
                report(&WebError::js("localStorage", &err));
                return None;
            }
        };
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                report(&WebError::js("localStorage.getItem", &err));
                None
            }
        }
    }
}
