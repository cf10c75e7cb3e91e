//! Browser bindings: wires [`Page`] to a live document.

mod document;
mod error;
mod listeners;
mod observers;

use std::rc::Rc;

use gloo::console;

use crate::logic::config::PageConfig;
use crate::logic::page::Page;
use document::WebDocument;
use error::{WebError, report};

/// Id of the optional `<script type="application/json">` holding a config override.
const CONFIG_ELEMENT_ID: &str = "folio-config";

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Err(err) = start() {
        report(&err);
    }
}

fn start() -> Result<(), WebError> {
    let doc = Rc::new(WebDocument::new()?);
    let page = Rc::new(Page::new(load_config(&doc)));
    let summary = page.init(&*doc);

    listeners::bind(&page, &doc);
    if summary.watches_intersections {
        if let Err(err) = observers::watch_fade_in(&page, &doc) {
            report(&err);
        }
        if let Err(err) = observers::watch_images(&page, &doc) {
            report(&err);
        }
    }
    if summary.watches_resize {
        if let Err(err) = observers::watch_resize() {
            report(&err);
        }
    }

    console::log!("Portfolio scripts loaded successfully!");
    Ok(())
}

fn load_config(doc: &WebDocument) -> PageConfig {
    let Some(raw) = doc
        .document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return PageConfig::default();
    };
    PageConfig::from_json(&raw).unwrap_or_else(|err| {
        report(&WebError::from(err));
        PageConfig::default()
    })
}
