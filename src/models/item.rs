//! Inventory item wire type.
//!
//! Items are produced by the remote item service and never mutated in place;
//! the gallery only re-fetches or re-filters.

use serde::{Deserialize, Serialize};

/// A single inventory entry as returned by `GET /items`.
///
/// `images` holds at least one URL for any item that was created through the
/// add-item form (the form refuses to submit without images), so index 0 is
/// always a valid image for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Server-assigned identifier, immutable.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text category used for filtering and grouping.
    #[serde(rename = "type")]
    pub item_type: String,
    /// Free-text description, searched case-insensitively.
    pub description: String,
    /// Ordered image URLs.
    pub images: Vec<String>,
    /// Creation timestamp, display-only.
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Item {
    /// First image URL, used for card thumbnails.
    pub fn cover_image(&self) -> &str {
        self.images.first().map(String::as_str).unwrap_or_default()
    }
}
