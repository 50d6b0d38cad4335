use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement};

use crate::behavior::{self, PageConfig};

/// Block lead-form submits whose email value fails the format check.
///
/// The check is a UX convenience; the backend re-validates whatever it
/// receives.
pub(super) fn install(document: &Document, config: &PageConfig) -> Result<(), String> {
    // The form is optional per page.
    let Some(form) = document.get_element_by_id(&config.lead_form_id) else {
        return Ok(());
    };
    let fields = form.clone();
    let on_submit = Closure::wrap(Box::new(move |ev: Event| {
        if behavior::email_format_ok(&email_value(&fields)) {
            return;
        }
        ev.prevent_default();
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(behavior::LEAD_EMAIL_INVALID_MSG);
        }
    }) as Box<dyn FnMut(_)>);
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .map_err(|_| "lead form: add_event_listener threw".to_string())?;
    on_submit.forget();
    Ok(())
}

/// Value of the form's email field; a missing field reads as empty, which
/// the format check rejects.
fn email_value(form: &Element) -> String {
    form.query_selector("input[type=\"email\"]")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}
