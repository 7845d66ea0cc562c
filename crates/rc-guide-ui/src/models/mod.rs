//! DOM-free decision logic for every page behavior
//!
//! The browser shell in [`crate::behaviors`] turns events into these types and
//! applies whatever they decide. Keeping the decisions here lets them run
//! under plain `cargo test` on the host.

pub mod alert;
pub mod anchor;
pub mod contact;
pub mod input_mode;
pub mod scroll;
pub mod shortcut;

pub use alert::{AlertLevel, AlertTiming};
pub use anchor::{fragment_id, needs_temporary_tabindex};
pub use contact::{ContactError, ContactSubmission, SUCCESS_MESSAGE};
pub use input_mode::{InputMode, InputModeTracker, ModeChange};
pub use scroll::{BackToTopVisibility, ScrollMotion};
pub use shortcut::{KeyInput, ShortcutAction, resolve_shortcut};
