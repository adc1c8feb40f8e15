//! Item gallery page: collection view, filter controls, and detail modal.

mod gallery;
mod modal;
mod state;

pub use gallery::GalleryPage;
