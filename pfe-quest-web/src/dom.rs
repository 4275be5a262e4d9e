//! Small helpers over the browser globals.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::Document;

/// The page's `document`.
///
/// # Panics
/// Panics outside a browser, where there is no `window.document`.
#[must_use]
pub fn document() -> Document {
    gloo::utils::document()
}

/// Best-effort text for a rejected JS call: a string, an `Error` message, or the debug form.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => format!("{value:?}"),
    }
}

/// Set the tab title, e.g. "PFE Quest · L'Entretien".
pub fn set_title(title: &str) {
    document().set_title(title);
}

/// Millisecond clock bits mixed with `Math.random`, used to seed a level's shuffle.
#[must_use]
pub fn entropy_seed() -> u64 {
    js_sys::Date::now().to_bits() ^ (js_sys::Math::random().to_bits() << 1)
}
