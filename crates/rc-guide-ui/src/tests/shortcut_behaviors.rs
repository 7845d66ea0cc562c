//! Behavioral tests for keyboard shortcuts

use crate::behaviors::keyboard::destination;
use crate::config::BehaviorConfig;
use crate::models::{KeyInput, ShortcutAction, resolve_shortcut};

fn page_for(key: &str, alt: bool, config: &BehaviorConfig) -> Option<String> {
    resolve_shortcut(KeyInput::new(key, alt))
        .and_then(|action| destination(action, config))
        .map(str::to_string)
}

#[test]
fn given_alt_held_when_h_pressed_then_loads_home_page() {
    let config = BehaviorConfig::default();
    assert_eq!(page_for("h", true, &config).as_deref(), Some("index.html"));
}

#[test]
fn given_alt_held_when_a_pressed_then_loads_about_page() {
    let config = BehaviorConfig::default();
    assert_eq!(page_for("a", true, &config).as_deref(), Some("about.html"));
}

#[test]
fn given_configured_urls_when_shortcut_pressed_then_configured_page_loads() {
    let config = BehaviorConfig {
        home_url: "/guide/".to_string(),
        about_url: "/guide/about/".to_string(),
        ..BehaviorConfig::default()
    };
    assert_eq!(page_for("h", true, &config).as_deref(), Some("/guide/"));
    assert_eq!(page_for("a", true, &config).as_deref(), Some("/guide/about/"));
}

#[test]
fn given_no_modifier_when_h_typed_then_stays_on_page() {
    // Typing into the contact form must not navigate away
    assert_eq!(page_for("h", false, &BehaviorConfig::default()), None);
}

#[test]
fn given_escape_when_pressed_then_closes_dialogs_without_navigating() {
    let action = resolve_shortcut(KeyInput::new("Escape", false));
    assert_eq!(action, Some(ShortcutAction::CloseDialogs));
    assert!(action.is_some_and(|action| destination(action, &BehaviorConfig::default()).is_none()));
    assert!(!action.is_some_and(ShortcutAction::prevents_default));
}
