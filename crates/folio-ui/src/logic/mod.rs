//! Pure page behaviours extracted from the browser bindings for non-wasm testing.
pub mod accessibility;
pub mod active_section;
pub mod config;
pub mod dom;
pub mod footer;
pub mod lazy_images;
pub mod links;
pub mod navbar;
pub mod page;
pub mod reveal;
pub mod smooth_scroll;
pub mod theme;
