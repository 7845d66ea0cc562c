//! Thin, panic-free wrappers over the browser APIs the behaviors use
//!
//! Every accessor returns a [`Result`] instead of unwrapping the optional
//! globals `web-sys` exposes.

pub mod listener;
pub mod modal;

pub use listener::EventListenerHandle;
pub use modal::{BootstrapModals, ModalController, ModalHandle};

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions, Window,
};

use crate::config::{BehaviorConfig, CONFIG_ELEMENT_ID};
use crate::error::{BehaviorError, Result};
use crate::models::ScrollMotion;

/// Media query for the reduced-motion preference
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Gets the global window.
///
/// # Errors
///
/// Returns [`BehaviorError::WindowNotAvailable`] outside a browser.
pub fn window() -> Result<Window> {
    web_sys::window().ok_or(BehaviorError::WindowNotAvailable)
}

/// Gets the window's document.
///
/// # Errors
///
/// Returns an error if there is no window or no document.
pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or(BehaviorError::DocumentNotAvailable)
}

/// Gets the document body.
///
/// # Errors
///
/// Returns an error if the document has no body.
pub fn body(document: &Document) -> Result<HtmlElement> {
    document.body().ok_or(BehaviorError::BodyNotAvailable)
}

/// Creates an element, mapping a thrown exception to [`BehaviorError::Dom`].
///
/// # Errors
///
/// Returns an error if `createElement` throws.
pub fn create_element(document: &Document, tag: &str) -> Result<Element> {
    document
        .create_element(tag)
        .map_err(|e| BehaviorError::dom("createElement", &e))
}

/// Sets an attribute, mapping a thrown exception to [`BehaviorError::Dom`].
///
/// # Errors
///
/// Returns an error if `setAttribute` throws (invalid attribute name).
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<()> {
    element
        .set_attribute(name, value)
        .map_err(|e| BehaviorError::dom("setAttribute", &e))
}

/// Whether the user asked the platform to minimise motion.
///
/// A browser without `matchMedia` support is treated as no preference.
#[must_use]
pub fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

/// Current vertical scroll offset in CSS pixels (0.0 if unavailable)
#[must_use]
pub fn scroll_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

const fn scroll_behavior(motion: ScrollMotion) -> ScrollBehavior {
    match motion {
        ScrollMotion::Smooth => ScrollBehavior::Smooth,
        ScrollMotion::Instant => ScrollBehavior::Auto,
    }
}

/// Scrolls the viewport to the top of the document.
pub fn scroll_to_top(window: &Window, motion: ScrollMotion) {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(scroll_behavior(motion));
    window.scroll_to_with_scroll_to_options(&options);
}

/// Scrolls `element` to the top of the viewport.
pub fn scroll_into_view(element: &Element, motion: ScrollMotion) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(scroll_behavior(motion));
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Reads the `value` of an `<input>` or `<textarea>` by id.
///
/// Missing elements and other element types read as an empty string, which
/// the contact validator reports as an unfilled field.
#[must_use]
pub fn field_value(document: &Document, id: &str) -> String {
    let Some(element) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    element
        .dyn_ref::<HtmlTextAreaElement>()
        .map(HtmlTextAreaElement::value)
        .unwrap_or_default()
}

/// Loads [`BehaviorConfig`] from the page's JSON block.
///
/// An absent block yields the defaults.
///
/// # Errors
///
/// Returns [`BehaviorError::InvalidConfig`] if the block is present but
/// cannot be parsed or validated.
pub fn load_config(document: &Document) -> Result<BehaviorConfig> {
    match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    {
        Some(json) if !json.trim().is_empty() => BehaviorConfig::from_json(&json),
        _ => Ok(BehaviorConfig::default()),
    }
}
