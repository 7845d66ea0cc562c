//! Screen-reader announcements through a polite live region

use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Document, Element};

use crate::dom;
use crate::error::{BehaviorError, Result};

struct PendingAnnouncement {
    element: Element,
    _removal: Timeout,
}

/// Posts short-lived, visually hidden status messages.
///
/// At most one announcement is on the page; a new one replaces the old and
/// cancels its removal timer.
pub struct Announcer {
    document: Document,
    lifetime_ms: u32,
    pending: Rc<RefCell<Option<PendingAnnouncement>>>,
}

impl Announcer {
    #[must_use]
    pub fn new(document: Document, lifetime_ms: u32) -> Self {
        Self {
            document,
            lifetime_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Announces `"<document title> loaded"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the live region cannot be created or inserted.
    pub fn announce_page_load(&self) -> Result<()> {
        let title = self.document.title();
        self.announce(&format!("{title} loaded"))
    }

    /// Inserts a `role="status"` region with `text` and schedules its removal.
    ///
    /// # Errors
    ///
    /// Returns an error if the region cannot be created or inserted.
    pub fn announce(&self, text: &str) -> Result<()> {
        self.clear();

        let region = dom::create_element(&self.document, "div")?;
        dom::set_attribute(&region, "role", "status")?;
        dom::set_attribute(&region, "aria-live", "polite")?;
        region.set_class_name("visually-hidden");
        region.set_text_content(Some(text));

        dom::body(&self.document)?
            .append_child(&region)
            .map_err(|e| BehaviorError::dom("appendChild", &e))?;

        let pending = Rc::clone(&self.pending);
        let removal = Timeout::new(self.lifetime_ms, move || {
            let finished = pending.borrow_mut().take();
            if let Some(announcement) = finished {
                announcement.element.remove();
            }
        });

        *self.pending.borrow_mut() = Some(PendingAnnouncement {
            element: region,
            _removal: removal,
        });
        Ok(())
    }

    /// Removes the current announcement, if any, and cancels its timer.
    pub fn clear(&self) {
        let previous = self.pending.borrow_mut().take();
        if let Some(announcement) = previous {
            announcement.element.remove();
        }
    }

    /// Whether an announcement is still on the page
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }
}
