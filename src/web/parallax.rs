use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement};

use crate::behavior::{self, PageConfig};

/// Reposition tagged elements on every scroll event.
///
/// The handler is deliberately unthrottled so offsets track the scroll
/// position exactly; tagged elements are re-queried per event so the set
/// always reflects the current page.
pub(super) fn install(document: &Document, config: &PageConfig) -> Result<(), String> {
    let window = web_sys::window().ok_or("parallax: no window")?;
    let selector = format!(".{}", config.parallax_class);
    let rate = config.parallax_rate;
    let doc = document.clone();
    let on_scroll = Closure::wrap(Box::new(move |_ev: Event| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let scroll_y = window.page_y_offset().unwrap_or(0.0);
        apply_offsets(&doc, &selector, behavior::parallax_offset(scroll_y, rate));
    }) as Box<dyn FnMut(_)>);
    window
        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
        .map_err(|_| "parallax: add_event_listener threw".to_string())?;
    on_scroll.forget();
    Ok(())
}

fn apply_offsets(document: &Document, selector: &str, offset: f64) {
    let Ok(elements) = document.query_selector_all(selector) else {
        return;
    };
    let transform = behavior::parallax_transform(offset);
    for i in 0..elements.length() {
        let Some(node) = elements.get(i) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<HtmlElement>() else {
            continue;
        };
        let _ = element.style().set_property("transform", &transform);
    }
}
