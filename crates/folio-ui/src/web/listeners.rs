//! Event listeners registered once at startup and kept for the page lifetime.

use std::rc::Rc;

use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};

use super::document::WebDocument;
use crate::logic::dom::Document;
use crate::logic::links::mail_links;
use crate::logic::navbar::navbar_links;
use crate::logic::page::Page;
use crate::logic::smooth_scroll::ClickOutcome;

pub(crate) fn bind(page: &Rc<Page>, doc: &Rc<WebDocument>) {
    let window = doc.window().clone();

    EventListener::new(&window, "scroll", {
        let page = Rc::clone(page);
        let doc = Rc::clone(doc);
        move |_event| page.on_scroll(&*doc)
    })
    .forget();

    for link in navbar_links(&**doc, page.config()) {
        bind_click(page, doc, &link);
        bind_focus(page, doc, &link);
    }
    for link in mail_links(&**doc) {
        bind_click(page, doc, &link);
    }

    EventListener::new(doc.document(), "keydown", {
        let page = Rc::clone(page);
        move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                page.on_key(&event.key());
            }
        }
    })
    .forget();

    EventListener::new(&window, "load", |_event| {
        console::log!("Portfolio page loaded successfully!");
    })
    .forget();
}

fn bind_click(page: &Rc<Page>, doc: &Rc<WebDocument>, link: &Element) {
    let page = Rc::clone(page);
    let doc = Rc::clone(doc);
    let target = link.clone();
    EventListener::new_with_options(
        link,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let href = doc.attribute(&target, "href").unwrap_or_default();
            if page.on_link_click(&*doc, &href) == ClickOutcome::PreventDefault {
                event.prevent_default();
            }
        },
    )
    .forget();
}

fn bind_focus(page: &Rc<Page>, doc: &Rc<WebDocument>, link: &Element) {
    EventListener::new(link, "focus", {
        let page = Rc::clone(page);
        let doc = Rc::clone(doc);
        let target = link.clone();
        move |_event| page.on_link_focus(&*doc, &target)
    })
    .forget();
    EventListener::new(link, "blur", {
        let page = Rc::clone(page);
        let doc = Rc::clone(doc);
        let target = link.clone();
        move |_event| page.on_link_blur(&*doc, &target)
    })
    .forget();
}
