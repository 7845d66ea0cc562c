//! Behavioral tests for page behaviors
//!
//! BDD-style tests using given-when-then naming. They exercise the decisions
//! each listener makes without a browser.

pub mod shortcut_behaviors;
