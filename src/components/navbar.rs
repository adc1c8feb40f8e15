//! Shared top navigation bar.
//!
//! Always mounted; page links use route hashes, section links stay plain
//! anchors into the landing page.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::Route;

stylance::import_crate_style!(css, "src/components/navbar.module.css");

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class=css::navbar>
            <div class=css::container>
                <a href=Route::Home.to_hash() class=css::logo>
                    <Icon icon=ic::ROCKET />
                    "Inventory"
                </a>
                <ul class=css::links>
                    <li><a href=Route::Home.to_hash()>"Home"</a></li>
                    <li><a href="#features">"Features"</a></li>
                    <li><a href="#about">"About"</a></li>
                    <li><a href="#contact">"Contact"</a></li>
                    <li><a href=Route::ViewItems.to_hash()>"View Items"</a></li>
                    <li><a href=Route::AddItem.to_hash()>"Add Item"</a></li>
                </ul>
            </div>
        </nav>
    }
}
