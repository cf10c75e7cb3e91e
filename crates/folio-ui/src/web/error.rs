//! Failures surfaced by the browser bindings.

use gloo::console;
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::logic::config::ConfigError;

/// Browser-side failures. Each one disables only the enhancement that hit it.
#[derive(Debug, Error)]
pub(crate) enum WebError {
    #[error("window is unavailable")]
    MissingWindow,
    #[error("document is unavailable")]
    MissingDocument,
    #[error("{operation} failed: {detail}")]
    Js {
        operation: &'static str,
        detail: String,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl WebError {
    pub(crate) fn js(operation: &'static str, value: &JsValue) -> Self {
        Self::Js {
            operation,
            detail: value.as_string().unwrap_or_else(|| format!("{value:?}")),
        }
    }
}

pub(crate) fn report(err: &WebError) {
    console::error!(err.to_string());
}
