//! Gallery page state.
//!
//! Created when the gallery page mounts and dropped on unmount, so search
//! term, type filter, and view mode reset to defaults on every visit. The
//! derived collections are memos over the pure functions in
//! [`crate::core::gallery`] — recomputed on every input change, never cached
//! stale.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::Notifications;
use crate::config;
use crate::core::gallery::{ALL_TYPES, available_types, filter_items};
use crate::models::{Item, ViewMode};
use crate::utils::{dom, fetch_json};

/// Signal bundle for the gallery page.
///
/// `Copy` because all fields are Leptos signals.
#[derive(Clone, Copy)]
pub struct GalleryState {
    /// Full fetched collection (insertion order = server order).
    pub items: RwSignal<Vec<Item>>,
    /// True until the one fetch per mount resolves, success or not.
    pub loading: RwSignal<bool>,
    /// Case-folded substring match against name and description.
    pub search_term: RwSignal<String>,
    /// Selected type filter; [`ALL_TYPES`] disables type filtering.
    pub filter_type: RwSignal<String>,
    /// Grid or list presentation.
    pub view_mode: RwSignal<ViewMode>,
    /// Items matching the current search and filter, in server order.
    pub filtered: Memo<Vec<Item>>,
    /// Distinct item types in first-seen order, for the filter dropdown.
    pub types: Memo<Vec<String>>,
}

impl GalleryState {
    pub fn new() -> Self {
        let items = RwSignal::new(Vec::new());
        let loading = RwSignal::new(true);
        let search_term = RwSignal::new(String::new());
        let filter_type = RwSignal::new(ALL_TYPES.to_string());
        let view_mode = RwSignal::new(ViewMode::Grid);

        let filtered = Memo::new(move |_| {
            items.with(|items| filter_items(items, &search_term.get(), &filter_type.get()))
        });
        let types = Memo::new(move |_| items.with(|items| available_types(items)));

        Self {
            items,
            loading,
            search_term,
            filter_type,
            view_mode,
            filtered,
            types,
        }
    }

    /// Fetch the item collection, once per mount.
    ///
    /// On failure the collection stays as it was, the loading flag clears,
    /// the cause goes to the console, and the user sees one generic toast.
    /// No automatic retry; reloading the page re-triggers the fetch.
    pub fn load(&self, notify: Notifications) {
        let items = self.items;
        let loading = self.loading;

        spawn_local(async move {
            let result = fetch_json::<Vec<Item>>(&config::items_url()).await;

            // The page may have been torn down while the request was in
            // flight; a disposed signal means the response is discarded
            // without mutating anything
            if loading.try_set(false).is_some() {
                return;
            }

            match result {
                Ok(fetched) => items.set(fetched),
                Err(err) => {
                    dom::log_error("load items", &err);
                    notify.error("Failed to load items. Please try again.");
                }
            }
        });
    }
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new()
    }
}
