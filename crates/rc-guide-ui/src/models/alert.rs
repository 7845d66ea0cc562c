//! Alert severity and presentation rules

use std::fmt;

/// Classes every alert banner carries besides its level class
const BANNER_CLASSES: &str =
    "alert-dismissible fade show position-fixed top-0 start-50 translate-middle-x mt-3";

/// Severity of a transient alert, mapped onto Bootstrap's contextual classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlertLevel {
    /// Neutral information
    #[default]
    Info,
    /// Completed action
    Success,
    /// Recoverable problem the user should fix
    Warning,
    /// Failure
    Danger,
}

impl AlertLevel {
    /// Bootstrap suffix for this level (`alert-<suffix>`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    /// Full class attribute for a freshly shown banner.
    ///
    /// # Example
    ///
    /// ```
    /// use rc_guide_ui::models::AlertLevel;
    ///
    /// assert!(AlertLevel::Warning.banner_classes().starts_with("alert alert-warning "));
    /// ```
    #[must_use]
    pub fn banner_classes(self) -> String {
        format!("alert alert-{} {BANNER_CLASSES}", self.as_str())
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Auto-dismiss schedule of a banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertTiming {
    /// Time on screen before the fade-out starts
    pub fade_after_ms: u32,
    /// Time between fade start and removal, long enough for the CSS transition
    pub remove_after_fade_ms: u32,
}

impl Default for AlertTiming {
    fn default() -> Self {
        Self {
            fade_after_ms: 5000,
            remove_after_fade_ms: 150,
        }
    }
}
