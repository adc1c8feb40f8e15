//! Utility modules for web, DOM, and network operations.
//!
//! Provides:
//! - [`fetch_json`], [`post_form`] - Network fetching with timeout
//! - [`ScrollLock`] - Scoped background-scroll suppression for the modal
//! - [`dom`] - Window/document/body accessors and console logging

pub mod dom;
mod fetch;
mod scroll_lock;

pub use fetch::{fetch_json, post_form};
pub use scroll_lock::ScrollLock;
