//! Input-method tracking for focus-visible styling
//!
//! Last event wins: a Tab press switches to keyboard mode, a pointer press
//! switches back. Other keys never change the mode.

/// The input method of the most recent relevant interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    Keyboard,
    #[default]
    Pointer,
}

/// What the DOM shell has to do after an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChange {
    /// Add the keyboard marker class
    EnterKeyboard,
    /// Remove the keyboard marker class
    EnterPointer,
}

/// Tracks the current [`InputMode`]
#[derive(Debug, Clone, Copy, Default)]
pub struct InputModeTracker {
    mode: InputMode,
}

impl InputModeTracker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mode: InputMode::Pointer,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> InputMode {
        self.mode
    }

    #[must_use]
    pub const fn is_using_keyboard(&self) -> bool {
        matches!(self.mode, InputMode::Keyboard)
    }

    /// Records a key press. Returns a change only for `Tab`.
    ///
    /// The marker is re-applied on every Tab, even when already in keyboard
    /// mode, so a class removed by other scripts comes back.
    pub fn on_key(&mut self, key: &str) -> Option<ModeChange> {
        (key == "Tab").then(|| {
            self.mode = InputMode::Keyboard;
            ModeChange::EnterKeyboard
        })
    }

    /// Records a pointer press.
    pub const fn on_pointer_down(&mut self) -> ModeChange {
        self.mode = InputMode::Pointer;
        ModeChange::EnterPointer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_pointer_mode() {
        let tracker = InputModeTracker::new();
        assert_eq!(tracker.mode(), InputMode::Pointer);
        assert!(!tracker.is_using_keyboard());
    }

    #[test]
    fn test_tab_enters_keyboard_mode() {
        let mut tracker = InputModeTracker::new();
        assert_eq!(tracker.on_key("Tab"), Some(ModeChange::EnterKeyboard));
        assert!(tracker.is_using_keyboard());
    }

    #[test]
    fn test_other_keys_do_nothing() {
        let mut tracker = InputModeTracker::new();
        assert_eq!(tracker.on_key("a"), None);
        assert_eq!(tracker.on_key("Enter"), None);
        assert_eq!(tracker.on_key("tab"), None);
        assert_eq!(tracker.mode(), InputMode::Pointer);

        tracker.on_key("Tab");
        assert_eq!(tracker.on_key("Escape"), None);
        assert_eq!(tracker.mode(), InputMode::Keyboard);
    }

    #[test]
    fn test_pointer_press_leaves_keyboard_mode() {
        let mut tracker = InputModeTracker::new();
        tracker.on_key("Tab");
        assert_eq!(tracker.on_pointer_down(), ModeChange::EnterPointer);
        assert_eq!(tracker.mode(), InputMode::Pointer);
    }

    #[test]
    fn test_repeated_tab_still_reports_change() {
        let mut tracker = InputModeTracker::new();
        tracker.on_key("Tab");
        assert_eq!(tracker.on_key("Tab"), Some(ModeChange::EnterKeyboard));
    }
}
