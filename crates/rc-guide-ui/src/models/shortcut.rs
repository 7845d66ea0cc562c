//! Global keyboard shortcuts
//!
//! | Keys    | Action                     |
//! |---------|----------------------------|
//! | Alt+H   | load the home document     |
//! | Alt+A   | load the about document    |
//! | Escape  | close every open dialog    |
//!
//! Key names are compared case-sensitively, so Alt+Shift+H (`"H"`) is not a
//! shortcut.

/// The parts of a `keydown` event the shortcuts look at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput<'a> {
    /// `KeyboardEvent.key`
    pub key: &'a str,
    /// `KeyboardEvent.altKey`
    pub alt: bool,
}

impl<'a> KeyInput<'a> {
    #[must_use]
    pub const fn new(key: &'a str, alt: bool) -> Self {
        Self { key, alt }
    }
}

/// What a recognised shortcut asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    NavigateHome,
    NavigateAbout,
    CloseDialogs,
}

impl ShortcutAction {
    /// Navigation shortcuts suppress the browser's own Alt handling.
    #[must_use]
    pub const fn prevents_default(self) -> bool {
        matches!(self, Self::NavigateHome | Self::NavigateAbout)
    }
}

/// Maps a key press to a shortcut, if any.
///
/// # Example
///
/// ```
/// use rc_guide_ui::models::{KeyInput, ShortcutAction, resolve_shortcut};
///
/// assert_eq!(resolve_shortcut(KeyInput::new("h", true)), Some(ShortcutAction::NavigateHome));
/// assert_eq!(resolve_shortcut(KeyInput::new("h", false)), None);
/// ```
#[must_use]
pub fn resolve_shortcut(input: KeyInput<'_>) -> Option<ShortcutAction> {
    match (input.alt, input.key) {
        (true, "h") => Some(ShortcutAction::NavigateHome),
        (true, "a") => Some(ShortcutAction::NavigateAbout),
        (_, "Escape") => Some(ShortcutAction::CloseDialogs),
        _ => None,
    }
}
