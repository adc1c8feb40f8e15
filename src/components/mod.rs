//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`home`] - Marketing landing page
//! - [`add_item`] - Create-item form with image uploads
//! - [`gallery`] - Item gallery with search, filters, and detail modal
//! - [`navbar`] - Shared top navigation
//! - [`toast`] - Transient notification layer
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod add_item;
pub mod gallery;
pub mod home;
pub mod icons;
pub mod navbar;
pub mod router;
pub mod toast;

pub use router::AppRouter;
pub use toast::Toasts;
