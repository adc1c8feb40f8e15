//! Scoped suppression of background page scroll.
//!
//! The item detail modal must keep the page behind it from scrolling while
//! open. Instead of mutating `body` styles ad hoc, the lock is a guard value:
//! acquired when the modal mounts, released by `Drop` on every close path,
//! including unexpected unmount.

/// RAII guard that hides body overflow while alive.
///
/// Locks do not nest; the app opens at most one modal at a time.
#[derive(Debug)]
pub struct ScrollLock(());

impl ScrollLock {
    /// Suppress page scroll until the returned guard is dropped.
    pub fn acquire() -> Self {
        if let Some(body) = super::dom::body() {
            let _ = body.style().set_property("overflow", "hidden");
        }
        Self(())
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        if let Some(body) = super::dom::body() {
            let _ = body.style().remove_property("overflow");
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn lock_sets_and_restores_body_overflow() {
        let body = crate::utils::dom::body().unwrap();

        let lock = ScrollLock::acquire();
        assert_eq!(
            body.style().get_property_value("overflow").unwrap(),
            "hidden"
        );

        drop(lock);
        assert!(
            body.style()
                .get_property_value("overflow")
                .unwrap()
                .is_empty()
        );
    }
}
