//! Shared "press `c` to copy" implementation.
//!
//! Determines *what* to copy from the current screen and delegates the
//! clipboard write to `clipboard::copy_to_clipboard`.
//!
//! - **Home**: the selected provider id (only while the panel is open)
//! - **Details**: the loaded spec summary as pretty-printed JSON
//!
//! Output carries no trailing newline (clipboard-friendly).

use crate::clipboard;
use crate::router::Route;
use crate::App;
use serde_json::{json, Value};

/// Returns the string that would be copied for the current screen, if any.
///
/// Useful for testing or preview without touching the clipboard.
pub fn current_text(app: &App) -> Option<String> {
    match app.route() {
        Route::Home => {
            if !app.panel_open() {
                return None;
            }
            app.filtered_providers().get(app.panel_selection()).cloned()
        }
        Route::ApiDetails { provider } => {
            let spec = app.spec()?;
            Some(pretty_no_newline(&json!({
                "provider": provider,
                "version": spec.version,
                "title": spec.title,
                "description": spec.description,
            })))
        }
    }
}

/// Pretty-print JSON value, without a trailing newline.
#[inline]
fn pretty_no_newline(v: &Value) -> String {
    match serde_json::to_string_pretty(v) {
        Ok(mut s) => {
            if s.ends_with('\n') {
                s.pop();
            }
            s
        }
        Err(_) => String::new(),
    }
}

/// Copies the current screen's payload to the clipboard.
///
/// Returns `true` on success, `false` if there is nothing to copy or the
/// clipboard write fails.
pub fn copy_current(app: &App) -> bool {
    match current_text(app) {
        Some(s) if !s.is_empty() => clipboard::copy_to_clipboard(&s),
        _ => false,
    }
}
