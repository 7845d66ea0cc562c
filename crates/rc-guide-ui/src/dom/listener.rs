//! Owned event listener registrations
//!
//! A handle keeps the Rust closure alive for as long as the listener is
//! attached. Call [`EventListenerHandle::remove`] to detach it; dropping the
//! handle without removing it leaves a dangling JS reference, so the owner of
//! a handle must either remove it or keep it for the page lifetime.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

use crate::error::{BehaviorError, Result};

/// A listener attached to an [`EventTarget`]
pub struct EventListenerHandle {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventListenerHandle {
    /// Attaches `handler` to `target` for `event`.
    ///
    /// # Errors
    ///
    /// Returns [`BehaviorError::Listener`] if `addEventListener` throws.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rc_guide_ui::dom::{self, EventListenerHandle};
    ///
    /// # fn example() -> rc_guide_ui::error::Result<()> {
    /// let document = dom::document()?;
    /// let handle = EventListenerHandle::attach(&document, "click", |_event| {})?;
    /// // ... later, on teardown ...
    /// handle.remove()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn attach<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| BehaviorError::listener(event, &e))?;

        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    /// Detaches the listener and frees the closure.
    ///
    /// # Errors
    ///
    /// Returns [`BehaviorError::Listener`] if `removeEventListener` throws.
    pub fn remove(self) -> Result<()> {
        self.target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
            .map_err(|e| BehaviorError::listener(self.event, &e))
    }
}

impl std::fmt::Debug for EventListenerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventListenerHandle")
            .field("event", &self.event)
            .finish_non_exhaustive()
    }
}
