//! DOM wiring for the marketing pages.
//!
//! Four independent behaviors are installed once at startup: anchor smooth
//! scrolling, lead-form validation, flash auto-dismissal, and scroll
//! parallax. None depends on another; a failed install logs a console
//! warning and the rest still run.

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::behavior::PageConfig;

mod anchors;
mod flash;
mod lead_form;
mod parallax;

/// Root-element attribute carrying an optional JSON [`PageConfig`] override.
const PAGE_CONFIG_ATTR: &str = "data-page-behaviors";

/// Bootstrap entry: wire the behaviors onto the live document.
pub fn start() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let config = page_config(&document);
    init_page_behaviors(&document, &config);
}

/// Install the four page behaviors on `document`.
///
/// Installs are independent, and missing optional markup is a valid page
/// configuration, not an error. Never panics and never throws into the host.
pub fn init_page_behaviors(document: &Document, config: &PageConfig) {
    let installs = [
        ("anchors", anchors::install(document)),
        ("lead form", lead_form::install(document, config)),
        ("flash", flash::install(document, config)),
        ("parallax", parallax::install(document, config)),
    ];
    for (name, result) in installs {
        if let Err(e) = result {
            web_sys::console::warn_1(&JsValue::from_str(&format!(
                "page_behaviors: {name} install failed: {e}"
            )));
        }
    }
}

fn page_config(document: &Document) -> PageConfig {
    document
        .document_element()
        .and_then(|el| el.get_attribute(PAGE_CONFIG_ATTR))
        .and_then(|raw| PageConfig::from_json(&raw))
        .unwrap_or_default()
}
