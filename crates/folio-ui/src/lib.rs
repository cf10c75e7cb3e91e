#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Folio portfolio page interactivity.
//!
//! Behaviours live in [`logic`] and only talk to the page through
//! [`logic::dom::Document`], so they run unchanged against the browser and against the
//! in-memory document used in tests. The wasm32 build adds the web-sys bindings.

pub mod logic;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::run_app;
