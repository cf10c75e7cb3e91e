//! Intersection and resize watchers.

use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ResizeObserver,
};

use super::document::WebDocument;
use super::error::WebError;
use crate::logic::dom::Intersection;
use crate::logic::lazy_images::deferred_images;
use crate::logic::page::Page;
use crate::logic::reveal::{fade_in_observer_options, fade_in_targets};

fn intersections(entries: &Array) -> Vec<Intersection<Element>> {
    entries
        .iter()
        .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
        .map(|entry| Intersection::new(entry.target(), entry.is_intersecting()))
        .collect()
}

pub(crate) fn watch_fade_in(page: &Rc<Page>, doc: &Rc<WebDocument>) -> Result<(), WebError> {
    let options = fade_in_observer_options(page.config());
    let init = IntersectionObserverInit::new();
    init.set_root_margin(&options.root_margin);
    init.set_threshold(&JsValue::from_f64(options.threshold));

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new({
        let page = Rc::clone(page);
        let doc = Rc::clone(doc);
        move |entries: Array, _observer: IntersectionObserver| {
            page.on_fade_entries(&*doc, &intersections(&entries));
        }
    });
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|err| WebError::js("IntersectionObserver", &err))?;
    for target in fade_in_targets(&**doc, page.config()) {
        observer.observe(&target);
    }
    callback.forget();
    Ok(())
}

pub(crate) fn watch_images(page: &Rc<Page>, doc: &Rc<WebDocument>) -> Result<(), WebError> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new({
        let page = Rc::clone(page);
        let doc = Rc::clone(doc);
        move |entries: Array, observer: IntersectionObserver| {
            for image in page.on_image_entries(&*doc, &intersections(&entries)) {
                observer.unobserve(&image);
            }
        }
    });
    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())
        .map_err(|err| WebError::js("IntersectionObserver", &err))?;
    for image in deferred_images(&**doc) {
        observer.observe(&image);
    }
    callback.forget();
    Ok(())
}

/// Installs a resize watcher with nothing observed yet; responsive adjustments hook in here.
pub(crate) fn watch_resize() -> Result<(), WebError> {
    let callback = Closure::<dyn FnMut(Array, ResizeObserver)>::new(
        |_entries: Array, _observer: ResizeObserver| {},
    );
    ResizeObserver::new(callback.as_ref().unchecked_ref())
        .map_err(|err| WebError::js("ResizeObserver", &err))?;
    callback.forget();
    Ok(())
}
