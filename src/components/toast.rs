//! Toast layer rendering the notification queue.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{Notification, NotificationKind};

stylance::import_crate_style!(css, "src/components/toast.module.css");

/// Stacked transient toasts in the top-right corner.
///
/// Entries auto-dismiss via [`crate::app::Notifications`]; clicking a toast
/// dismisses it early.
#[component]
pub fn Toasts() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let entries = ctx.notify.entries();

    view! {
        <div class=css::layer aria-live="polite">
            <For
                each=move || entries.get()
                key=|n| n.id
                children=move |n| view! { <Toast notification=n /> }
            />
        </div>
    }
}

#[component]
fn Toast(notification: Notification) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let id = notification.id;
    let (icon, kind_class) = match notification.kind {
        NotificationKind::Success => (ic::SUCCESS, css::success),
        NotificationKind::Error => (ic::FAILURE, css::error),
    };

    view! {
        <div
            class=format!("{} {}", css::toast, kind_class)
            role="status"
            on:click=move |_| ctx.notify.dismiss(id)
        >
            <span class=css::icon><Icon icon=icon /></span>
            <span>{notification.message}</span>
        </div>
    }
}
