use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// DOM id of the PIN cell at `index`.
#[must_use]
pub fn pin_slot_id(index: usize) -> String {
    format!("pin-{index}")
}

/// Move keyboard focus to the PIN cell at `index`, when it exists.
///
/// Navigation logic addresses cells purely by index; this is the only place
/// that resolves an index to a concrete element.
pub fn focus_pin_slot(index: usize) {
    if let Some(el) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(&pin_slot_id(index)))
        && let Some(el) = el.dyn_ref::<HtmlElement>()
    {
        let _ = el.focus();
    }
}
