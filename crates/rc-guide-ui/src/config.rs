//! Runtime configuration for page behaviors
//!
//! Every field has a default matching the site as shipped, so a page without a
//! configuration block behaves exactly like the stock guide. A page may
//! override values with a JSON block:
//!
//! ```html
//! <script type="application/json" id="page-behaviors-config">
//!   { "home_url": "/", "back_to_top_threshold": 480 }
//! </script>
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{BehaviorError, Result};

/// Element id of the optional JSON configuration block
pub const CONFIG_ELEMENT_ID: &str = "page-behaviors-config";

/// Tunables for every installed behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BehaviorConfig {
    /// Target of the Alt+H shortcut
    pub home_url: String,
    /// Target of the Alt+A shortcut
    pub about_url: String,
    /// Scroll offset (px) above which the back-to-top control is shown
    pub back_to_top_threshold: f64,
    /// Lifetime of the page-load announcement
    pub announcement_ms: u32,
    /// Delay before an alert starts fading out
    pub alert_fade_ms: u32,
    /// Delay between fade start and removal of an alert
    pub alert_removal_ms: u32,
    /// Class applied to the body while the keyboard is the input method
    pub keyboard_marker_class: String,
    /// Id of the contact dialog
    pub contact_modal_id: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            home_url: "index.html".to_string(),
            about_url: "about.html".to_string(),
            back_to_top_threshold: 300.0,
            announcement_ms: 1000,
            alert_fade_ms: 5000,
            alert_removal_ms: 150,
            keyboard_marker_class: "keyboard-navigation".to_string(),
            contact_modal_id: "contactModal".to_string(),
        }
    }
}

impl BehaviorConfig {
    /// Parses and validates a JSON configuration block.
    ///
    /// # Errors
    ///
    /// Returns [`BehaviorError::InvalidConfig`] if the JSON is malformed,
    /// names an unknown field, or fails [`BehaviorConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| BehaviorError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants the behaviors rely on.
    ///
    /// # Errors
    ///
    /// Returns [`BehaviorError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("home_url", &self.home_url),
            ("about_url", &self.about_url),
            ("keyboard_marker_class", &self.keyboard_marker_class),
            ("contact_modal_id", &self.contact_modal_id),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(BehaviorError::InvalidConfig(format!(
                "{field} must not be empty"
            )));
        }

        // Class names go through classList, which rejects whitespace.
        if self.keyboard_marker_class.chars().any(char::is_whitespace) {
            return Err(BehaviorError::InvalidConfig(
                "keyboard_marker_class must be a single class name".to_string(),
            ));
        }

        if !self.back_to_top_threshold.is_finite() || self.back_to_top_threshold < 0.0 {
            return Err(BehaviorError::InvalidConfig(format!(
                "back_to_top_threshold must be a non-negative number, got {}",
                self.back_to_top_threshold
            )));
        }

        Ok(())
    }
}
