//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Brand name shown in the navbar logo and footer.
pub const APP_NAME: &str = "LaunchPad";

/// Application version.
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Network Configuration
// =============================================================================

/// Base URL of the remote item service.
pub const API_BASE_URL: &str = "https://armmbackend.onrender.com/api";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Full URL of the item collection endpoint (list and create).
pub fn items_url() -> String {
    format!("{}/items", API_BASE_URL)
}

// =============================================================================
// Notification Configuration
// =============================================================================

/// How long a toast stays on screen before auto-dismissing, in milliseconds.
pub const NOTIFY_DISMISS_MS: u32 = 3000;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Lucide,
    Bootstrap,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
