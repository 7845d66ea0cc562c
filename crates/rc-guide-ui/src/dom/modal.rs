//! Dialog controller capability
//!
//! The behaviors never drive dialogs themselves. They ask a
//! [`ModalController`] for the instance that owns a dialog element and tell
//! it to hide. [`BootstrapModals`] implements this against the page's global
//! `bootstrap` object.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

/// A live dialog instance
pub trait ModalHandle {
    /// Starts the dialog's hide transition.
    fn hide(&self);
}

/// Looks up dialog instances by element
pub trait ModalController {
    /// The instance attached to `element`, if the library created one.
    fn instance(&self, element: &Element) -> Option<Box<dyn ModalHandle>>;
}

/// [`ModalController`] backed by Bootstrap 5's `bootstrap.Modal.getInstance`.
///
/// Resolved on every call, so a Bootstrap bundle loaded after this crate
/// still works. Without Bootstrap on the page every lookup yields `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BootstrapModals;

struct BootstrapModal {
    instance: JsValue,
}

impl ModalHandle for BootstrapModal {
    fn hide(&self) {
        let hide = Reflect::get(&self.instance, &JsValue::from_str("hide"))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok());

        if let Some(hide) = hide {
            if let Err(e) = hide.call0(&self.instance) {
                web_sys::console::warn_1(&format!("Dialog hide failed: {e:?}").into());
            }
        }
    }
}

impl BootstrapModals {
    fn modal_class() -> Option<JsValue> {
        let bootstrap = Reflect::get(&js_sys::global(), &JsValue::from_str("bootstrap")).ok()?;
        if bootstrap.is_undefined() || bootstrap.is_null() {
            return None;
        }
        let modal = Reflect::get(&bootstrap, &JsValue::from_str("Modal")).ok()?;
        (!modal.is_undefined() && !modal.is_null()).then_some(modal)
    }
}

impl ModalController for BootstrapModals {
    fn instance(&self, element: &Element) -> Option<Box<dyn ModalHandle>> {
        let modal_class = Self::modal_class()?;
        let get_instance = Reflect::get(&modal_class, &JsValue::from_str("getInstance"))
            .ok()?
            .dyn_into::<Function>()
            .ok()?;

        let instance = get_instance.call1(&modal_class, element).ok()?;
        if instance.is_null() || instance.is_undefined() {
            return None;
        }
        Some(Box::new(BootstrapModal { instance }))
    }
}

/// Hides every dialog in `elements` that has a controller instance.
///
/// Returns how many dialogs were told to hide.
pub fn hide_all<'a>(
    controller: &dyn ModalController,
    elements: impl IntoIterator<Item = &'a Element>,
) -> usize {
    elements
        .into_iter()
        .filter_map(|element| controller.instance(element))
        .map(|handle| handle.hide())
        .count()
}
