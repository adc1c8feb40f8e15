//! Hash-based routing for the three-page navigation surface.

/// Application routes for hash-based navigation.
/// URL format: #/view, #/add, or #/ for the landing page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Route {
    /// Marketing landing page: #/ or empty hash
    #[default]
    Home,
    /// Create-item form: #/add
    AddItem,
    /// Item gallery: #/view
    ViewItems,
}

impl Route {
    /// Parse URL hash into a Route.
    ///
    /// Unknown hashes fall back to [`Route::Home`] so the landing page's
    /// in-page section anchors (#features, #about, #contact) keep native
    /// scroll behavior instead of being treated as navigation errors.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/');

        match path.trim_end_matches('/') {
            "add" => Self::AddItem,
            "view" => Self::ViewItems,
            _ => Self::Home,
        }
    }

    /// Convert Route to URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::Home => "#/".to_string(),
            Self::AddItem => "#/add".to_string(),
            Self::ViewItems => "#/view".to_string(),
        }
    }

    /// Get current route from browser URL.
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }

    /// Update browser URL to match this route (using pushState).
    #[allow(dead_code)]
    pub fn push(&self) {
        if let Some(window) = web_sys::window()
            && let Ok(history) = window.history()
        {
            let hash = self.to_hash();
            let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&hash));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::from_hash(""), Route::Home);
        assert_eq!(Route::from_hash("#"), Route::Home);
        assert_eq!(Route::from_hash("#/"), Route::Home);
        assert_eq!(Route::from_hash("#/add"), Route::AddItem);
        assert_eq!(Route::from_hash("#/view"), Route::ViewItems);
        // Trailing slashes are tolerated
        assert_eq!(Route::from_hash("#/view/"), Route::ViewItems);
    }

    #[test]
    fn test_unknown_hash_falls_back_to_home() {
        // Section anchors on the landing page are not routes
        assert_eq!(Route::from_hash("#features"), Route::Home);
        assert_eq!(Route::from_hash("#about"), Route::Home);
        assert_eq!(Route::from_hash("#/no/such/page"), Route::Home);
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(Route::Home.to_hash(), "#/");
        assert_eq!(Route::AddItem.to_hash(), "#/add");
        assert_eq!(Route::ViewItems.to_hash(), "#/view");
    }

    #[test]
    fn test_round_trip() {
        for route in [Route::Home, Route::AddItem, Route::ViewItems] {
            assert_eq!(Route::from_hash(&route.to_hash()), route);
        }
    }
}
