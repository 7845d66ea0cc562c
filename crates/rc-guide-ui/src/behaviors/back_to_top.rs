//! Floating "back to top" button
//!
//! Mounted once at startup and kept for the page lifetime. Visibility follows
//! [`BackToTopVisibility::for_offset`] on every window scroll.

use leptos::ev;
use leptos::prelude::*;

use crate::dom;
use crate::models::{BackToTopVisibility, ScrollMotion};

/// Fixed geometry of the button; `display` is appended per state.
const BUTTON_STYLE: &str = "position: fixed; bottom: 20px; right: 20px; width: 50px; \
     height: 50px; border-radius: 50%; z-index: 1000; font-size: 24px; \
     box-shadow: 0 4px 8px rgba(0,0,0,0.2);";

/// Inline style for the button in the given state
#[must_use]
pub fn button_style(visibility: BackToTopVisibility) -> String {
    format!("{BUTTON_STYLE} display: {};", visibility.css_display())
}

fn current_visibility(threshold: f64) -> BackToTopVisibility {
    dom::window().map_or(BackToTopVisibility::Hidden, |window| {
        BackToTopVisibility::for_offset(dom::scroll_offset(&window), threshold)
    })
}

/// Scrolls to the top, instantly if the user prefers reduced motion.
///
/// The preference is read on every activation so a change in system settings
/// applies without a reload.
pub fn scroll_page_to_top() {
    if let Ok(window) = dom::window() {
        let motion = ScrollMotion::for_preference(dom::prefers_reduced_motion(&window));
        dom::scroll_to_top(&window, motion);
    }
}

/// Back-to-top control
///
/// Hidden at or below `threshold` pixels of vertical scroll, visible above.
#[component]
pub fn BackToTop(threshold: f64) -> impl IntoView {
    let (visibility, set_visibility) = signal(current_visibility(threshold));

    // Lives as long as the page; never removed.
    let _scroll_listener = window_event_listener(ev::scroll, move |_| {
        let next = current_visibility(threshold);
        if visibility.get_untracked() != next {
            set_visibility.set(next);
        }
    });

    view! {
        <button
            type="button"
            class="btn btn-success btn-back-to-top"
            aria-label="Back to top"
            style=move || button_style(visibility.get())
            on:click=move |_| scroll_page_to_top()
        >
            "↑"
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_style() {
        let style = button_style(BackToTopVisibility::Hidden);
        assert!(style.ends_with("display: none;"));
        assert!(style.contains("position: fixed;"));
        assert!(style.contains("z-index: 1000;"));
    }

    #[test]
    fn test_visible_style() {
        let style = button_style(BackToTopVisibility::Visible);
        assert!(style.ends_with("display: block;"));
        assert!(style.contains("border-radius: 50%;"));
    }
}
