use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions};

const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Intercept clicks on in-page anchors and replace the default jump with a
/// smooth scroll to the target.
pub(super) fn install(document: &Document) -> Result<(), String> {
    let anchors = document
        .query_selector_all(ANCHOR_SELECTOR)
        .map_err(|_| "anchors: query_selector_all threw".to_string())?;
    for i in 0..anchors.length() {
        let Some(node) = anchors.get(i) else {
            continue;
        };
        let Ok(anchor) = node.dyn_into::<Element>() else {
            continue;
        };
        attach(document.clone(), anchor);
    }
    Ok(())
}

fn attach(document: Document, anchor: Element) {
    let link = anchor.clone();
    let on_click = Closure::wrap(Box::new(move |ev: Event| {
        ev.prevent_default();
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        // A fragment with no matching element (or a bare "#") is a valid
        // page state: leave the view where it is.
        let Ok(Some(target)) = document.query_selector(&href) else {
            return;
        };
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&opts);
    }) as Box<dyn FnMut(_)>);
    let _ = anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
}
