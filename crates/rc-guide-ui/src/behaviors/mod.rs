//! Event-driven page behaviors
//!
//! [`PageBehaviors`] is the context object for one page: it installs every
//! listener, owns their handles and the transient-node presenters, and undoes
//! all of it on [`PageBehaviors::teardown`]. The back-to-top control is a
//! Leptos component mounted separately by [`crate::start`] because it lives
//! for the whole page.

pub mod alerts;
pub mod announcer;
pub mod back_to_top;
pub mod contact_form;
pub mod diagnostics;
pub mod input_mode;
pub mod keyboard;
pub mod print;
pub mod smooth_scroll;


pub use alerts::AlertPresenter;
pub use announcer::Announcer;
pub use back_to_top::BackToTop;
pub use contact_form::{ContactForm, SubmitOutcome};
pub use diagnostics::InstalledFeatures;

use std::cell::Cell;
use std::rc::Rc;
use web_sys::{Document, HtmlElement, Window};

use crate::config::BehaviorConfig;
use crate::dom::{self, EventListenerHandle, ModalController};
use crate::error::Result;
use crate::models::{AlertTiming, InputMode, InputModeTracker, ModeChange};

/// Installed behaviors of the current page
pub struct PageBehaviors {
    config: BehaviorConfig,
    body: HtmlElement,
    announcer: Announcer,
    alerts: Rc<AlertPresenter>,
    input_mode: Rc<Cell<InputModeTracker>>,
    features: InstalledFeatures,
    listeners: Vec<EventListenerHandle>,
}

impl PageBehaviors {
    /// Installs every behavior on the current document.
    ///
    /// Announces the page load, then attaches keyboard shortcuts, the contact
    /// form validator, smooth anchor scrolling, input-mode detection and the
    /// print trigger. Optional features whose elements are missing are
    /// skipped. If any step fails, everything attached so far is removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is unavailable or a listener cannot
    /// be attached.
    pub fn install(config: BehaviorConfig, modals: Rc<dyn ModalController>) -> Result<Self> {
        let window = dom::window()?;
        let document = dom::document()?;
        let body = dom::body(&document)?;

        let timing = AlertTiming {
            fade_after_ms: config.alert_fade_ms,
            remove_after_fade_ms: config.alert_removal_ms,
        };
        let mut behaviors = Self {
            announcer: Announcer::new(document.clone(), config.announcement_ms),
            alerts: Rc::new(AlertPresenter::new(document.clone(), timing)),
            input_mode: Rc::new(Cell::new(InputModeTracker::new())),
            features: InstalledFeatures::default(),
            listeners: Vec::new(),
            body,
            config,
        };

        if let Err(e) = behaviors.attach_all(&window, &document, modals) {
            // Report the attach failure, not a secondary teardown failure.
            let _ = behaviors.teardown();
            return Err(e);
        }
        Ok(behaviors)
    }

    fn attach_all(
        &mut self,
        window: &Window,
        document: &Document,
        modals: Rc<dyn ModalController>,
    ) -> Result<()> {
        if let Err(e) = self.announcer.announce_page_load() {
            // Best-effort: a missing announcement never blocks the rest.
            web_sys::console::warn_1(&format!("Page load announcement failed: {e}").into());
        }

        self.listeners.push(keyboard::install(
            document,
            window.clone(),
            &self.config,
            Rc::clone(&modals),
        )?);

        if let Some(handle) =
            contact_form::install(document, &self.config, Rc::clone(&self.alerts), modals)?
        {
            self.features.contact_form = true;
            self.listeners.push(handle);
        }

        let reduced_motion = dom::prefers_reduced_motion(window);
        if let Some(handle) = smooth_scroll::install(document, reduced_motion)? {
            self.features.smooth_scroll = true;
            self.listeners.push(handle);
        }

        self.listeners.extend(input_mode::install(
            document,
            self.body.clone(),
            &self.config.keyboard_marker_class,
            Rc::clone(&self.input_mode),
        )?);

        self.listeners.push(print::install(document, window.clone())?);
        Ok(())
    }

    #[must_use]
    pub const fn features(&self) -> InstalledFeatures {
        self.features
    }

    /// The input method of the most recent relevant interaction
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        self.input_mode.get().mode()
    }

    /// Number of attached listeners
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Removes every listener, cancels pending timers, removes transient
    /// nodes and clears the keyboard marker.
    ///
    /// All steps run even if one fails.
    ///
    /// # Errors
    ///
    /// Returns the first listener-removal error.
    pub fn teardown(self) -> Result<()> {
        let Self {
            config,
            body,
            announcer,
            alerts,
            listeners,
            ..
        } = self;

        announcer.clear();
        alerts.clear();
        let marker = input_mode::apply(&body, &config.keyboard_marker_class, ModeChange::EnterPointer);

        let removal = listeners
            .into_iter()
            .map(EventListenerHandle::remove)
            .fold(Ok(()), |first, next| first.and(next));

        removal.and(marker)
    }
}
