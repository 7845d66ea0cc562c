//! Developer console banner listing the enabled features

/// Which optional behaviors found what they need on this page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InstalledFeatures {
    /// `#contactModal` with a send control was present
    pub contact_form: bool,
    /// Smooth anchor scrolling is active (no reduced-motion preference)
    pub smooth_scroll: bool,
}

const HEADING: &str = "%c♿ Accessibility Features Enabled";
const HEADING_STYLE: &str = "color: #198754; font-size: 16px; font-weight: bold;";

/// Bullet lines printed under the heading
#[must_use]
pub fn feature_lines(features: InstalledFeatures) -> Vec<&'static str> {
    let mut lines = vec![
        "• Keyboard navigation support",
        "• Screen reader compatibility",
        "• Reduced motion respect",
        "• Keyboard shortcuts: Alt+H (Home), Alt+A (About)",
    ];
    if features.smooth_scroll {
        lines.push("• Smooth in-page scrolling");
    }
    if features.contact_form {
        lines.push("• Contact form validation");
    }
    lines
}

/// Prints the banner to the browser console.
pub fn log_enabled_features(features: InstalledFeatures) {
    web_sys::console::log_2(&HEADING.into(), &HEADING_STYLE.into());
    for line in feature_lines(features) {
        web_sys::console::log_1(&line.into());
    }
}
