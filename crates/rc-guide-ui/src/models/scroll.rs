//! Back-to-top visibility and scroll motion

/// Visibility state of the back-to-top control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackToTopVisibility {
    #[default]
    Hidden,
    Visible,
}

impl BackToTopVisibility {
    /// State for a vertical scroll offset: visible strictly above `threshold`.
    ///
    /// A non-finite offset (the browser reported garbage) counts as hidden.
    ///
    /// # Example
    ///
    /// ```
    /// use rc_guide_ui::models::BackToTopVisibility;
    ///
    /// assert_eq!(BackToTopVisibility::for_offset(300.0, 300.0), BackToTopVisibility::Hidden);
    /// assert_eq!(BackToTopVisibility::for_offset(301.0, 300.0), BackToTopVisibility::Visible);
    /// ```
    #[must_use]
    pub fn for_offset(offset: f64, threshold: f64) -> Self {
        if offset.is_finite() && offset > threshold {
            Self::Visible
        } else {
            Self::Hidden
        }
    }

    /// CSS `display` value for this state
    #[must_use]
    pub const fn css_display(self) -> &'static str {
        match self {
            Self::Hidden => "none",
            Self::Visible => "block",
        }
    }

    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// How a programmatic scroll moves the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMotion {
    /// Animated scroll
    Smooth,
    /// Jump straight to the destination
    Instant,
}

impl ScrollMotion {
    /// Motion honoring the user's reduced-motion preference
    #[must_use]
    pub const fn for_preference(prefers_reduced_motion: bool) -> Self {
        if prefers_reduced_motion {
            Self::Instant
        } else {
            Self::Smooth
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        assert_eq!(
            BackToTopVisibility::for_offset(0.0, 300.0),
            BackToTopVisibility::Hidden
        );
        assert_eq!(
            BackToTopVisibility::for_offset(300.0, 300.0),
            BackToTopVisibility::Hidden
        );
        assert_eq!(
            BackToTopVisibility::for_offset(300.5, 300.0),
            BackToTopVisibility::Visible
        );
    }

    #[test]
    fn test_negative_offset_hidden() {
        // Overscroll bounce on some platforms reports negative offsets
        assert_eq!(
            BackToTopVisibility::for_offset(-40.0, 300.0),
            BackToTopVisibility::Hidden
        );
    }

    #[test]
    fn test_non_finite_offset_hidden() {
        assert_eq!(
            BackToTopVisibility::for_offset(f64::NAN, 300.0),
            BackToTopVisibility::Hidden
        );
        assert_eq!(
            BackToTopVisibility::for_offset(f64::INFINITY, 300.0),
            BackToTopVisibility::Hidden
        );
    }

    #[test]
    fn test_css_display() {
        assert_eq!(BackToTopVisibility::Hidden.css_display(), "none");
        assert_eq!(BackToTopVisibility::Visible.css_display(), "block");
        assert!(!BackToTopVisibility::default().is_visible());
    }

    #[test]
    fn test_motion_for_preference() {
        assert_eq!(ScrollMotion::for_preference(true), ScrollMotion::Instant);
        assert_eq!(ScrollMotion::for_preference(false), ScrollMotion::Smooth);
    }
}
