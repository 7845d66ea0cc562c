//! Smooth in-page anchor navigation with focus management
//!
//! Not installed at all when the user prefers reduced motion; the browser's
//! own anchor jump is already the right behavior then.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Element, Event, FocusOptions, HtmlElement};

use crate::dom::{self, EventListenerHandle};
use crate::error::Result;
use crate::models::{ScrollMotion, fragment_id, needs_temporary_tabindex};

/// Links handled by this behavior
pub const IN_PAGE_ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Attaches one delegated click listener for in-page anchors.
///
/// Returns `Ok(None)` when `reduced_motion` is set.
///
/// # Errors
///
/// Returns an error if the listener cannot be attached.
pub fn install(document: &Document, reduced_motion: bool) -> Result<Option<EventListenerHandle>> {
    if reduced_motion {
        return Ok(None);
    }

    let lookup = document.clone();
    let handle = EventListenerHandle::attach(document, "click", move |event: Event| {
        let Some(target) = anchor_target(&lookup, &event) else {
            return;
        };
        event.prevent_default();
        dom::scroll_into_view(&target, ScrollMotion::Smooth);
        focus_target(&target);
    })?;
    Ok(Some(handle))
}

/// Element an in-page anchor click should scroll to, if it exists.
///
/// `None` for clicks outside anchors, bare `"#"` links and fragments with no
/// matching element; the browser keeps its default behavior for those.
#[must_use]
pub fn anchor_target(document: &Document, event: &Event) -> Option<Element> {
    let clicked = event.target()?.dyn_into::<Element>().ok()?;
    let anchor = clicked.closest(IN_PAGE_ANCHOR_SELECTOR).ok().flatten()?;
    let href = anchor.get_attribute("href")?;
    document.get_element_by_id(fragment_id(&href)?)
}

/// Moves keyboard focus to `target`.
///
/// Elements that cannot take focus get `tabindex="-1"` until they lose focus
/// again, so the reading position moves without adding a tab stop. Focus
/// does not scroll, so a running smooth scroll is not cut short.
pub fn focus_target(target: &Element) {
    let temporary = needs_temporary_tabindex(
        &target.tag_name(),
        target.has_attribute("tabindex"),
        target.has_attribute("href"),
    );
    if temporary && dom::set_attribute(target, "tabindex", "-1").is_ok() {
        remove_tabindex_on_blur(target);
    }

    if let Some(element) = target.dyn_ref::<HtmlElement>() {
        let options = FocusOptions::new();
        options.set_prevent_scroll(true);
        if let Err(e) = element.focus_with_options(&options) {
            web_sys::console::warn_1(&format!("Focusing anchor target failed: {e:?}").into());
        }
    }
}

fn remove_tabindex_on_blur(target: &Element) {
    let element = target.clone();
    let cleanup = Closure::once_into_js(move || {
        // A failed removal just leaves a harmless tabindex="-1" behind.
        let _ = element.remove_attribute("tabindex");
    });

    let options = AddEventListenerOptions::new();
    options.set_once(true);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        "blur",
        cleanup.unchecked_ref(),
        &options,
    ) {
        web_sys::console::warn_1(&format!("Attaching blur cleanup failed: {e:?}").into());
    }
}
