use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::behavior::PageConfig;

/// Schedule fade-and-detach for every flash banner present at install time.
/// Banners added to the page later are not covered.
pub(super) fn install(document: &Document, config: &PageConfig) -> Result<(), String> {
    let selector = format!(".{}", config.flash_class);
    let banners = document
        .query_selector_all(&selector)
        .map_err(|_| "flash: query_selector_all threw".to_string())?;
    for i in 0..banners.length() {
        let Some(node) = banners.get(i) else {
            continue;
        };
        let Ok(banner) = node.dyn_into::<HtmlElement>() else {
            continue;
        };
        schedule_dismiss(banner, config.flash_visible_ms, config.flash_fade_ms);
    }
    Ok(())
}

/// Two chained timers: fade after `visible_ms`, detach `fade_ms` later.
///
/// There is no cancellation path; both callbacks tolerate a banner that was
/// already removed by other means.
fn schedule_dismiss(banner: HtmlElement, visible_ms: u32, fade_ms: u32) {
    let fade = Closure::wrap(Box::new(move || {
        let _ = banner.style().set_property("opacity", "0");
        let banner = banner.clone();
        let detach = Closure::wrap(Box::new(move || {
            banner.remove();
        }) as Box<dyn FnMut()>);
        if set_timeout(&detach, fade_ms) {
            detach.forget();
        }
    }) as Box<dyn FnMut()>);
    if set_timeout(&fade, visible_ms) {
        fade.forget();
    }
}

fn set_timeout(callback: &Closure<dyn FnMut()>, delay_ms: u32) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay_ms as i32,
        )
        .is_ok()
}
