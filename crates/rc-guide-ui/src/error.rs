//! Error types for page behaviors
//!
//! This module provides error handling types that follow the project's
//! zero-unwrap patterns. Errors raised inside event handlers never reach the
//! browser: handlers log them as console warnings and return.

use wasm_bindgen::JsValue;

/// Errors that can occur while installing or running page behaviors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BehaviorError {
    /// No `window` global (not running in a browser)
    #[error("window is not available")]
    WindowNotAvailable,

    /// The window has no document
    #[error("document is not available")]
    DocumentNotAvailable,

    /// The document has no body yet
    #[error("document body is not available")]
    BodyNotAvailable,

    /// A DOM call threw
    #[error("DOM operation '{operation}' failed: {reason}")]
    Dom { operation: String, reason: String },

    /// Attaching or removing an event listener failed
    #[error("event listener '{event}' failed: {reason}")]
    Listener { event: String, reason: String },

    /// The page configuration block could not be used
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Behaviors are already installed on this page
    #[error("page behaviors are already installed")]
    AlreadyInstalled,
}

impl BehaviorError {
    /// Wraps a thrown JS value from a named DOM operation.
    #[must_use]
    pub fn dom(operation: &str, reason: &JsValue) -> Self {
        Self::Dom {
            operation: operation.to_string(),
            reason: format!("{reason:?}"),
        }
    }

    /// Wraps a thrown JS value from `addEventListener`/`removeEventListener`.
    #[must_use]
    pub fn listener(event: &str, reason: &JsValue) -> Self {
        Self::Listener {
            event: event.to_string(),
            reason: format!("{reason:?}"),
        }
    }
}

/// Result type alias for page behavior operations
pub type Result<T> = std::result::Result<T, BehaviorError>;
