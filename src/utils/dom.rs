//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{Document, HtmlElement, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get the document body.
#[inline]
pub fn body() -> Option<HtmlElement> {
    document()?.body()
}

/// Log an error to the browser console.
///
/// Failures are surfaced to the user as generic toasts; the console carries
/// the actual cause for diagnostics.
pub fn log_error(context: &str, err: &dyn std::fmt::Display) {
    web_sys::console::error_1(&format!("{}: {}", context, err).into());
}
