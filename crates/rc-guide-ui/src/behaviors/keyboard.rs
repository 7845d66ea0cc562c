//! Global keyboard shortcuts (Alt+H, Alt+A, Escape)

use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, KeyboardEvent, Window};

use crate::config::BehaviorConfig;
use crate::dom::modal::hide_all;
use crate::dom::{EventListenerHandle, ModalController};
use crate::error::{BehaviorError, Result};
use crate::models::{KeyInput, ShortcutAction, resolve_shortcut};

/// Selector for Bootstrap dialogs that are currently shown
pub const OPEN_DIALOG_SELECTOR: &str = ".modal.show";

/// Attaches the shortcut listener to the document.
///
/// # Errors
///
/// Returns an error if the listener cannot be attached.
pub fn install(
    document: &Document,
    window: Window,
    config: &BehaviorConfig,
    modals: Rc<dyn ModalController>,
) -> Result<EventListenerHandle> {
    let config = config.clone();
    let dialogs_root = document.clone();

    EventListenerHandle::attach(document, "keydown", move |event: Event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let key = event.key();
        let Some(action) = resolve_shortcut(KeyInput::new(&key, event.alt_key())) else {
            return;
        };

        if action.prevents_default() {
            event.prevent_default();
        }

        let outcome = match destination(action, &config) {
            Some(url) => navigate(&window, url),
            None => close_open_dialogs(&dialogs_root, modals.as_ref()).map(|_| ()),
        };

        if let Err(e) = outcome {
            web_sys::console::warn_1(&format!("Shortcut {action:?} failed: {e}").into());
        }
    })
}

/// Page a navigation shortcut loads; `None` for the dialog shortcut.
#[must_use]
pub fn destination(action: ShortcutAction, config: &BehaviorConfig) -> Option<&str> {
    match action {
        ShortcutAction::NavigateHome => Some(config.home_url.as_str()),
        ShortcutAction::NavigateAbout => Some(config.about_url.as_str()),
        ShortcutAction::CloseDialogs => None,
    }
}

/// Full document load of `url`.
fn navigate(window: &Window, url: &str) -> Result<()> {
    window
        .location()
        .set_href(url)
        .map_err(|e| BehaviorError::dom("location.href", &e))
}

/// Hides every open dialog that has a controller instance.
///
/// Returns the number of dialogs told to hide.
///
/// # Errors
///
/// Returns an error if the open-dialog query fails.
pub fn close_open_dialogs(document: &Document, modals: &dyn ModalController) -> Result<usize> {
    let open = document
        .query_selector_all(OPEN_DIALOG_SELECTOR)
        .map_err(|e| BehaviorError::dom("querySelectorAll", &e))?;

    let dialogs: Vec<Element> = (0..open.length())
        .filter_map(|index| open.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect();

    Ok(hide_all(modals, &dialogs))
}
