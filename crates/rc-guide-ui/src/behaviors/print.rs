//! `[data-print]` elements open the print dialog

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, Window};

use crate::dom::EventListenerHandle;
use crate::error::Result;

/// Marker attribute selector
pub const PRINT_SELECTOR: &str = "[data-print]";

/// Attaches a delegated click listener for print triggers.
///
/// # Errors
///
/// Returns an error if the listener cannot be attached.
pub fn install(document: &Document, window: Window) -> Result<EventListenerHandle> {
    EventListenerHandle::attach(document, "click", move |event: Event| {
        if !is_print_trigger(&event) {
            return;
        }
        if let Err(e) = window.print() {
            web_sys::console::warn_1(&format!("Print failed: {e:?}").into());
        }
    })
}

/// Whether the click landed on a `[data-print]` element or inside one
pub(crate) fn is_print_trigger(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(PRINT_SELECTOR).ok().flatten())
        .is_some()
}
