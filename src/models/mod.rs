//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Item`] - Inventory entries fetched from the remote item service
//! - [`Route`] - Hash-based navigation across the three pages
//! - [`ViewMode`] - Gallery display mode (grid or list)
//! - [`Notification`], [`NotificationKind`] - Toast queue entries

mod gallery;
mod item;
mod notification;
mod route;

pub use gallery::ViewMode;
pub use item::Item;
pub use notification::{Notification, NotificationKind};
pub use route::Route;
