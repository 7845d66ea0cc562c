//! Client-side behaviors for the RC Car Accessibility Guide
//!
//! This crate compiles to WASM and enhances the static guide pages with
//! accessibility announcements, keyboard shortcuts, contact-form validation,
//! smooth anchor scrolling, a back-to-top control, keyboard-focus styling
//! and print buttons.
//!
//! ## Architecture
//! - `models`: DOM-free decisions (shortcuts, validation, scroll states)
//! - `dom`: panic-free wrappers over `web-sys`, listener handles, and the
//!   dialog controller capability
//! - `behaviors`: the event listeners, owned by [`PageBehaviors`]
//! - `config`: optional JSON configuration embedded in the page
//! - `error`: error types
//!
//! [`start`] installs everything once the document is parsed; [`stop`] tears
//! it down again.

#![forbid(unsafe_code)]

pub mod behaviors;
pub mod config;
pub mod dom;
pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use behaviors::{BackToTop, PageBehaviors};
pub use config::BehaviorConfig;
pub use error::{BehaviorError, Result};

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::AddEventListenerOptions;

use crate::dom::BootstrapModals;

thread_local! {
    static INSTALLED: RefCell<Option<PageBehaviors>> = const { RefCell::new(None) };
    static BACK_TO_TOP_MOUNTED: Cell<bool> = const { Cell::new(false) };
}

/// Installs the page behaviors, waiting for `DOMContentLoaded` if the
/// document is still loading.
///
/// # Errors
///
/// Returns an error if the document is unavailable, the behaviors are
/// already installed, or installation fails. When installation is deferred,
/// later failures are logged to the console instead.
pub fn start() -> Result<()> {
    let document = dom::document()?;
    if document.ready_state() != "loading" {
        return install_now();
    }

    let ready = Closure::once_into_js(|| {
        if let Err(e) = install_now() {
            web_sys::console::error_1(&format!("Page behaviors failed to start: {e}").into());
        }
    });
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    document
        .add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            ready.unchecked_ref(),
            &options,
        )
        .map_err(|e| BehaviorError::listener("DOMContentLoaded", &e))
}

fn install_now() -> Result<()> {
    if is_running() {
        return Err(BehaviorError::AlreadyInstalled);
    }

    let document = dom::document()?;
    let config = dom::load_config(&document).unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("Ignoring page configuration: {e}").into());
        BehaviorConfig::default()
    });

    let threshold = config.back_to_top_threshold;
    let behaviors = PageBehaviors::install(config, Rc::new(BootstrapModals))?;
    behaviors::diagnostics::log_enabled_features(behaviors.features());

    if !BACK_TO_TOP_MOUNTED.replace(true) {
        mount_back_to_top(threshold);
    }

    INSTALLED.with_borrow_mut(|slot| *slot = Some(behaviors));
    Ok(())
}

fn mount_back_to_top(threshold: f64) {
    use leptos::prelude::*;

    leptos::mount::mount_to_body(move || view! { <BackToTop threshold=threshold /> });
}

/// Whether the behaviors are currently installed
#[must_use]
pub fn is_running() -> bool {
    INSTALLED.with_borrow(Option::is_some)
}

/// Tears the behaviors down. A no-op when nothing is installed.
///
/// The back-to-top control stays; it is mounted for the page lifetime.
///
/// # Errors
///
/// Returns the first error from [`PageBehaviors::teardown`].
pub fn stop() -> Result<()> {
    INSTALLED
        .with_borrow_mut(Option::take)
        .map_or(Ok(()), PageBehaviors::teardown)
}
