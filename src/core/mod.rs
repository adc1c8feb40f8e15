//! Core domain logic, independent of the view layer.
//!
//! - [`carousel`] - Image carousel state machine for the detail modal
//! - [`gallery`] - Pure search/filter functions over the item collection
//! - [`error`] - Fetch and submit error types

pub mod carousel;
pub mod error;
pub mod gallery;

pub use carousel::Carousel;
pub use error::{FetchError, SubmitError};
