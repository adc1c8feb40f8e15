//! Root application module.
//!
//! Contains the main App component, AppContext definition, the Notifications
//! queue service, and application-level setup logic following Leptos
//! conventions.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::{AppRouter, Toasts};
use crate::config::NOTIFY_DISMISS_MS;
use crate::models::{Notification, NotificationKind};

// ============================================================================
// Notifications
// ============================================================================

/// Application-wide toast queue managed with Leptos signals.
///
/// Replaces ad-hoc DOM injection: callers push a message, the service keeps
/// the queue ordered and dismisses each entry after [`NOTIFY_DISMISS_MS`].
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct Notifications {
    /// Live entries, oldest first.
    queue: RwSignal<Vec<Notification>>,
    /// Next entry id.
    next_id: StoredValue<u64>,
}

impl Notifications {
    /// Creates an empty notification queue.
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Read access for the toast layer.
    pub fn entries(&self) -> ReadSignal<Vec<Notification>> {
        self.queue.read_only()
    }

    /// Show a transient success toast.
    pub fn success(&self, message: impl Into<String>) {
        self.push(NotificationKind::Success, message.into());
    }

    /// Show a transient failure toast.
    ///
    /// The message stays generic; the failure cause belongs in the console,
    /// not in the toast.
    pub fn error(&self, message: impl Into<String>) {
        self.push(NotificationKind::Error, message.into());
    }

    /// Remove one entry immediately (click-to-dismiss).
    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.retain(|n| n.id != id));
    }

    fn push(&self, kind: NotificationKind, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.queue.update(|q| q.push(Notification { id, kind, message }));

        // Auto-dismiss after the fixed display duration. The queue signal
        // can outlive individual entries but not the app root, so guard the
        // late write with try_update.
        let queue = self.queue;
        spawn_local(async move {
            TimeoutFuture::new(NOTIFY_DISMISS_MS).await;
            let _ = queue.try_update(|q| q.retain(|n| n.id != id));
        });
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// Page-level state (gallery filters, carousel) deliberately lives in the
/// page components so it resets on navigation; only cross-page services
/// belong here.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Toast notification queue.
    pub notify: Notifications,
}

impl AppContext {
    /// Creates a new application context with an empty notification queue.
    pub fn new() -> Self {
        Self {
            notify: Notifications::new(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router and the toast layer
#[component]
pub fn App() -> impl IntoView {
    // Create and provide application context
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #f8fafc;
                    color: #1e293b;
                    font-family: 'Segoe UI', system-ui, sans-serif;
                ">
                    <div style="
                        max-width: 600px;
                        text-align: center;
                    ">
                        <h1 style="color: #dc2626; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #64748b; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: #f1f5f9;
                            padding: 1rem;
                            border-radius: 8px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #64748b;">
                                "Error details"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: #dc2626;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #6366f1;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 8px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
            <Toasts />
        </ErrorBoundary>
    }
}
