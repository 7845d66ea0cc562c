//! Property tests for the DOM-free behavior models
//!
//! Run on the host target only; proptest does not build for wasm32.

#![cfg(not(target_arch = "wasm32"))]

use proptest::prelude::*;
use rc_guide_ui::models::{
    BackToTopVisibility, ContactError, ContactSubmission, InputMode, InputModeTracker,
};

/// One run of characters the email pattern accepts inside a segment
fn segment() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_+-]{1,12}"
}

fn well_formed_email() -> impl Strategy<Value = String> {
    (segment(), segment(), "[a-z]{2,6}")
        .prop_map(|(local, domain, tld)| format!("{local}@{domain}.{tld}"))
}

fn non_empty() -> impl Strategy<Value = String> {
    ".{1,40}"
}

#[derive(Debug, Clone, Copy)]
enum InputEvent {
    Key(&'static str),
    PointerDown,
}

fn input_event() -> impl Strategy<Value = InputEvent> {
    prop_oneof![
        Just(InputEvent::Key("Tab")),
        Just(InputEvent::Key("a")),
        Just(InputEvent::Key("Enter")),
        Just(InputEvent::Key("Escape")),
        Just(InputEvent::PointerDown),
    ]
}

proptest! {
    #[test]
    fn valid_submissions_are_accepted(
        name in non_empty(),
        email in well_formed_email(),
        message in non_empty(),
    ) {
        let submission = ContactSubmission::new(name, email, message);
        prop_assert_eq!(submission.validate(), Ok(()));
    }

    #[test]
    fn any_empty_field_reports_missing_fields(
        name in non_empty(),
        email in ".{0,40}",
        message in non_empty(),
        empty_slot in 0usize..3,
    ) {
        let mut fields = [name, email, message];
        if let Some(field) = fields.get_mut(empty_slot) {
            field.clear();
        }
        let [name, email, message] = fields;
        let submission = ContactSubmission::new(name, email, message);
        prop_assert_eq!(submission.validate(), Err(ContactError::MissingFields));
    }

    #[test]
    fn emails_without_at_are_rejected(
        name in non_empty(),
        email in "[a-z0-9.]{1,30}",
        message in non_empty(),
    ) {
        let submission = ContactSubmission::new(name, email, message);
        prop_assert_eq!(submission.validate(), Err(ContactError::InvalidEmail));
    }

    #[test]
    fn emails_without_dot_after_at_are_rejected(
        local in segment(),
        domain in segment(),
    ) {
        let submission = ContactSubmission::new("Ann", format!("{local}@{domain}"), "hi");
        prop_assert_eq!(submission.validate(), Err(ContactError::InvalidEmail));
    }

    #[test]
    fn visibility_is_a_pure_threshold(offset in -10_000.0f64..10_000.0, threshold in 0.0f64..2_000.0) {
        let expected = if offset > threshold {
            BackToTopVisibility::Visible
        } else {
            BackToTopVisibility::Hidden
        };
        prop_assert_eq!(BackToTopVisibility::for_offset(offset, threshold), expected);
    }

    #[test]
    fn visibility_is_monotonic_in_offset(
        low in 0.0f64..5_000.0,
        delta in 0.0f64..5_000.0,
        threshold in 0.0f64..2_000.0,
    ) {
        let high = low + delta;
        let low_visible = BackToTopVisibility::for_offset(low, threshold).is_visible();
        let high_visible = BackToTopVisibility::for_offset(high, threshold).is_visible();
        prop_assert!(!low_visible || high_visible);
    }

    #[test]
    fn last_relevant_input_event_wins(events in prop::collection::vec(input_event(), 0..40)) {
        let mut tracker = InputModeTracker::new();
        for event in &events {
            match event {
                InputEvent::Key(key) => {
                    tracker.on_key(key);
                }
                InputEvent::PointerDown => {
                    tracker.on_pointer_down();
                }
            }
        }

        let expected = events
            .iter()
            .rev()
            .find_map(|event| match event {
                InputEvent::Key("Tab") => Some(InputMode::Keyboard),
                InputEvent::PointerDown => Some(InputMode::Pointer),
                InputEvent::Key(_) => None,
            })
            .unwrap_or(InputMode::Pointer);

        prop_assert_eq!(tracker.mode(), expected);
    }
}
