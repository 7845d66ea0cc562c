//! WASM entry point
//!
//! Compiled to WASM and loaded on every guide page.

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    if let Err(e) = rc_guide_ui::start() {
        web_sys::console::error_1(&format!("Page behaviors failed to start: {e}").into());
    }
}
