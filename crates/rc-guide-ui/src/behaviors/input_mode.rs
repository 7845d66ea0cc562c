//! Keyboard/pointer detection driving the focus-visible marker class

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, KeyboardEvent};

use crate::dom::EventListenerHandle;
use crate::error::{BehaviorError, Result};
use crate::models::{InputModeTracker, ModeChange};

/// Applies a mode change to the marker class on `body`.
///
/// # Errors
///
/// Returns an error if the class list rejects the class name.
pub fn apply(body: &HtmlElement, marker_class: &str, change: ModeChange) -> Result<()> {
    let classes = body.class_list();
    let updated = match change {
        ModeChange::EnterKeyboard => classes.add_1(marker_class),
        ModeChange::EnterPointer => classes.remove_1(marker_class),
    };
    updated.map_err(|e| BehaviorError::dom("classList", &e))
}

/// Attaches the `keydown` and `mousedown` listeners.
///
/// # Errors
///
/// Returns an error if either listener cannot be attached. A keydown listener
/// attached before the failure is removed again.
pub fn install(
    document: &Document,
    body: HtmlElement,
    marker_class: &str,
    tracker: Rc<Cell<InputModeTracker>>,
) -> Result<Vec<EventListenerHandle>> {
    let key_tracker = Rc::clone(&tracker);
    let key_body = body.clone();
    let key_class = marker_class.to_string();
    let keydown = EventListenerHandle::attach(document, "keydown", move |event: Event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let mut state = key_tracker.get();
        let change = state.on_key(&event.key());
        key_tracker.set(state);

        if let Some(change) = change {
            report(apply(&key_body, &key_class, change));
        }
    })?;

    let pointer_class = marker_class.to_string();
    let mousedown = EventListenerHandle::attach(document, "mousedown", move |_event: Event| {
        let mut state = tracker.get();
        let change = state.on_pointer_down();
        tracker.set(state);
        report(apply(&body, &pointer_class, change));
    });

    match mousedown {
        Ok(mousedown) => Ok(vec![keydown, mousedown]),
        Err(e) => {
            let _ = keydown.remove();
            Err(e)
        }
    }
}

fn report(result: Result<()>) {
    if let Err(e) = result {
        web_sys::console::warn_1(&format!("Input mode marker update failed: {e}").into());
    }
}
