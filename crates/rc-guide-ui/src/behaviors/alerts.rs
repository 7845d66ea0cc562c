//! Transient alert banners
//!
//! Banners are Bootstrap alerts pinned to the top-center of the viewport with
//! `role="alert"`, so assistive technology announces them assertively. Each
//! banner fades out after [`AlertTiming::fade_after_ms`] and is removed
//! [`AlertTiming::remove_after_fade_ms`] later. The close button is wired by
//! Bootstrap through `data-bs-dismiss`.
//!
//! Timers are tracked per [`AlertLevel`]. Showing a second banner of the same
//! level removes the first at once; dropping its [`Timeout`] cancels whatever
//! was still scheduled for it.

use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use web_sys::{Document, Element};

use crate::dom;
use crate::error::{BehaviorError, Result};
use crate::models::{AlertLevel, AlertTiming};

struct PendingAlert {
    element: Element,
    /// Next scheduled step; dropping it cancels that step.
    timer: Timeout,
}

impl PendingAlert {
    /// Replaces the scheduled step, returning the one it supersedes
    fn reschedule(&mut self, next: Timeout) -> Timeout {
        std::mem::replace(&mut self.timer, next)
    }
}

type AlertSlots = Rc<RefCell<HashMap<AlertLevel, PendingAlert>>>;

/// Shows and auto-dismisses alert banners
pub struct AlertPresenter {
    document: Document,
    timing: AlertTiming,
    slots: AlertSlots,
}

impl AlertPresenter {
    #[must_use]
    pub fn new(document: Document, timing: AlertTiming) -> Self {
        Self {
            document,
            timing,
            slots: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Shows `message` as a banner of the given level.
    ///
    /// The message is inserted as text, never parsed as HTML.
    ///
    /// # Errors
    ///
    /// Returns an error if the banner cannot be built or inserted.
    pub fn show(&self, message: &str, level: AlertLevel) -> Result<()> {
        self.dismiss(level);

        let banner = self.build_banner(message, level)?;
        dom::body(&self.document)?
            .append_child(&banner)
            .map_err(|e| BehaviorError::dom("appendChild", &e))?;

        let timer = self.schedule_fade(level);
        self.slots.borrow_mut().insert(
            level,
            PendingAlert {
                element: banner,
                timer,
            },
        );
        Ok(())
    }

    /// Shows an [`AlertLevel::Info`] banner.
    ///
    /// # Errors
    ///
    /// See [`AlertPresenter::show`].
    pub fn info(&self, message: &str) -> Result<()> {
        self.show(message, AlertLevel::default())
    }

    /// Removes the banner of `level` immediately and cancels its timers.
    pub fn dismiss(&self, level: AlertLevel) {
        let previous = self.slots.borrow_mut().remove(&level);
        if let Some(alert) = previous {
            alert.element.remove();
        }
    }

    /// Removes every banner this presenter is tracking.
    pub fn clear(&self) {
        let drained: Vec<PendingAlert> = self
            .slots
            .borrow_mut()
            .drain()
            .map(|(_, alert)| alert)
            .collect();
        for alert in drained {
            alert.element.remove();
        }
    }

    /// Number of banners still scheduled for removal
    #[must_use]
    pub fn pending(&self) -> usize {
        self.slots.borrow().len()
    }

    fn build_banner(&self, message: &str, level: AlertLevel) -> Result<Element> {
        let banner = dom::create_element(&self.document, "div")?;
        banner.set_class_name(&level.banner_classes());
        dom::set_attribute(&banner, "style", "z-index: 9999;")?;
        dom::set_attribute(&banner, "role", "alert")?;
        banner
            .append_with_str_1(message)
            .map_err(|e| BehaviorError::dom("append", &e))?;

        let close = dom::create_element(&self.document, "button")?;
        dom::set_attribute(&close, "type", "button")?;
        close.set_class_name("btn-close");
        dom::set_attribute(&close, "data-bs-dismiss", "alert")?;
        dom::set_attribute(&close, "aria-label", "Close")?;
        banner
            .append_child(&close)
            .map_err(|e| BehaviorError::dom("appendChild", &e))?;

        Ok(banner)
    }

    fn schedule_fade(&self, level: AlertLevel) -> Timeout {
        let slots = Rc::clone(&self.slots);
        let remove_after = self.timing.remove_after_fade_ms;

        Timeout::new(self.timing.fade_after_ms, move || {
            let mut tracked = slots.borrow_mut();
            let Some(alert) = tracked.get_mut(&level) else {
                return;
            };

            // Dropping `show` starts Bootstrap's opacity transition.
            if let Err(e) = alert.element.class_list().remove_1("show") {
                web_sys::console::warn_1(&format!("Alert fade failed: {e:?}").into());
            }

            let removal_slots = Rc::clone(&slots);
            let removal = Timeout::new(remove_after, move || {
                let finished = removal_slots.borrow_mut().remove(&level);
                if let Some(alert) = finished {
                    alert.element.remove();
                }
            });
            // Releasing the running fade timer is deferred by wasm-bindgen
            // until this callback returns.
            drop(alert.reschedule(removal));
        })
    }
}
