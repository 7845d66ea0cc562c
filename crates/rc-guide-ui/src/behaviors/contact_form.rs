//! Contact dialog validation
//!
//! The send button of `#contactModal` is intercepted; the form never submits
//! to a server. A valid form shows a success banner, is reset, and the dialog
//! is closed.

use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlFormElement};

use super::alerts::AlertPresenter;
use crate::config::BehaviorConfig;
use crate::dom::{self, EventListenerHandle, ModalController};
use crate::error::{BehaviorError, Result};
use crate::models::{AlertLevel, ContactError, ContactSubmission, SUCCESS_MESSAGE};

/// Selector of the send control inside the dialog
pub const SEND_BUTTON_SELECTOR: &str = ".btn-success";

/// Field ids read on submission
pub const NAME_FIELD: &str = "nameInput";
pub const EMAIL_FIELD: &str = "emailInput";
pub const MESSAGE_FIELD: &str = "messageInput";

/// Result of one send attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Accepted; the form was reset and the dialog closed
    Sent,
    /// Rejected with a warning banner
    Rejected(ContactError),
}

/// Everything the click handler needs
#[derive(Clone)]
pub struct ContactForm {
    document: Document,
    dialog: Element,
    alerts: Rc<AlertPresenter>,
    modals: Rc<dyn ModalController>,
}

impl ContactForm {
    /// Finds the contact dialog and its send control.
    ///
    /// Returns `Ok(None)` when the page has no contact dialog or the dialog
    /// has no send control; the feature is then simply absent.
    ///
    /// # Errors
    ///
    /// Returns an error if querying the dialog throws.
    pub fn locate(
        document: &Document,
        config: &BehaviorConfig,
        alerts: Rc<AlertPresenter>,
        modals: Rc<dyn ModalController>,
    ) -> Result<Option<(Self, Element)>> {
        let Some(dialog) = document.get_element_by_id(&config.contact_modal_id) else {
            return Ok(None);
        };
        let send_button = dialog
            .query_selector(SEND_BUTTON_SELECTOR)
            .map_err(|e| BehaviorError::dom("querySelector", &e))?;

        Ok(send_button.map(|button| {
            let form = Self {
                document: document.clone(),
                dialog,
                alerts,
                modals,
            };
            (form, button)
        }))
    }

    /// Reads the three fields from the page.
    #[must_use]
    pub fn read(&self) -> ContactSubmission {
        ContactSubmission::new(
            dom::field_value(&self.document, NAME_FIELD),
            dom::field_value(&self.document, EMAIL_FIELD),
            dom::field_value(&self.document, MESSAGE_FIELD),
        )
    }

    /// Validates the current field values and reacts to the outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if a banner cannot be shown or the form cannot be
    /// located for reset.
    pub fn submit(&self) -> Result<SubmitOutcome> {
        let validation = self.read().validate();
        let (message, level) = feedback(validation);
        self.alerts.show(&message, level)?;
        if let Err(reason) = validation {
            return Ok(SubmitOutcome::Rejected(reason));
        }

        // Simulated send: nothing leaves the browser.
        self.reset()?;
        if let Some(handle) = self.modals.instance(&self.dialog) {
            handle.hide();
        }
        Ok(SubmitOutcome::Sent)
    }

    fn reset(&self) -> Result<()> {
        let form = self
            .dialog
            .query_selector("form")
            .map_err(|e| BehaviorError::dom("querySelector", &e))?
            .and_then(|element| element.dyn_into::<HtmlFormElement>().ok());

        if let Some(form) = form {
            form.reset();
        }
        Ok(())
    }
}

/// Banner text and level for a validation result
#[must_use]
pub fn feedback(validation: std::result::Result<(), ContactError>) -> (String, AlertLevel) {
    match validation {
        Ok(()) => (SUCCESS_MESSAGE.to_string(), AlertLevel::Success),
        Err(reason) => (reason.to_string(), AlertLevel::Warning),
    }
}

/// Attaches the send-button listener if the page has a contact dialog.
///
/// # Errors
///
/// Returns an error if the dialog query or listener attachment fails.
pub fn install(
    document: &Document,
    config: &BehaviorConfig,
    alerts: Rc<AlertPresenter>,
    modals: Rc<dyn ModalController>,
) -> Result<Option<EventListenerHandle>> {
    let Some((form, send_button)) = ContactForm::locate(document, config, alerts, modals)? else {
        return Ok(None);
    };

    let handle = EventListenerHandle::attach(&send_button, "click", move |event: Event| {
        event.prevent_default();
        if let Err(e) = form.submit() {
            web_sys::console::warn_1(&format!("Contact form handling failed: {e}").into());
        }
    })?;
    Ok(Some(handle))
}
