//! Application router component.
//!
//! Handles URL-based routing with hash history.
//! Uses native hashchange events instead of leptos_router: three flat pages
//! need no nested routes, and browser back/forward buttons work automatically.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: Navigation state is derived from `#/path`
//! - **Navbar never re-renders on navigation**: it is always mounted
//! - **Unknown hashes resolve to Home**: in-page section anchors on the
//!   landing page stay plain anchors with native scroll behavior

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::add_item::AddItemPage;
use crate::components::gallery::GalleryPage;
use crate::components::home::HomePage;
use crate::components::navbar::Navbar;
use crate::models::Route;

/// Main application router.
///
/// Sets up hash-based routing with the following structure:
/// - `#/` → Landing page
/// - `#/add` → Create-item form
/// - `#/view` → Item gallery
#[component]
pub fn AppRouter() -> impl IntoView {
    // Create route signal from current URL hash
    let route = RwSignal::new(Route::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(Route::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // Memo dedups repeated Home resolutions, so section-anchor clicks on the
    // landing page don't tear the page down mid-scroll
    let route_memo = Memo::new(move |_| route.get());

    view! {
        // Navbar is always rendered (stable across route changes)
        <Navbar />

        {move || match route_memo.get() {
            Route::Home => view! { <HomePage /> }.into_any(),
            Route::AddItem => view! { <AddItemPage /> }.into_any(),
            Route::ViewItems => view! { <GalleryPage /> }.into_any(),
        }}
    }
}
