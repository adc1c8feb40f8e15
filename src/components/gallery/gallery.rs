//! Item gallery page.
//!
//! Fetches the collection once on mount, then filters client-side. The
//! loading, empty-collection, and no-filter-match presentations are three
//! distinct states: an empty server collection invites the user to add their
//! first item, while zero filter matches only suggests adjusting the query.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::modal::ItemModal;
use super::state::GalleryState;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::gallery::ALL_TYPES;
use crate::models::{Item, Route, ViewMode};

stylance::import_crate_style!(css, "src/components/gallery/gallery.module.css");

#[component]
pub fn GalleryPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let state = GalleryState::new();
    let selected = RwSignal::new(Option::<Item>::None);

    // One fetch per mount
    state.load(ctx.notify);

    view! {
        <div class=css::page>
            <div class=css::container>
                {move || {
                    if state.loading.get() {
                        view! { <Loading /> }.into_any()
                    } else if state.items.with(|items| items.is_empty()) {
                        view! { <EmptyCollection /> }.into_any()
                    } else {
                        view! { <Collection state=state selected=selected /> }.into_any()
                    }
                }}
            </div>

            {move || {
                selected.get().map(|item| {
                    view! {
                        <ItemModal
                            item=item
                            on_close=Callback::new(move |_| selected.set(None))
                        />
                    }
                })
            }}
        </div>
    }
}

#[component]
fn Loading() -> impl IntoView {
    view! {
        <div class=css::loading>
            <div class=css::spinner></div>
            <p>"Loading your items..."</p>
        </div>
    }
}

/// Shown after a successful load of an empty collection. Distinct from the
/// no-results presentation below.
#[component]
fn EmptyCollection() -> impl IntoView {
    view! {
        <div class=css::header>
            <div class=css::headerIcon>
                <Icon icon=ic::PACKAGE />
            </div>
            <h1>"Your Items"</h1>
            <p>"Manage and view all your items in one place"</p>
        </div>

        <div class=css::empty>
            <Icon icon=ic::PACKAGE />
            <h3>"No items yet"</h3>
            <p>"Start building your collection by adding your first item"</p>
            <a href=Route::AddItem.to_hash() class=css::addButton>
                <Icon icon=ic::PLUS />
                "Add Your First Item"
            </a>
        </div>
    }
}

#[component]
fn Collection(state: GalleryState, selected: RwSignal<Option<Item>>) -> impl IntoView {
    let count = move || state.items.with(|items| items.len());

    view! {
        <div class=css::headerRow>
            <div class=css::headerContent>
                <div class=css::headerIcon>
                    <Icon icon=ic::PACKAGE />
                </div>
                <div>
                    <h1>"Your Items"</h1>
                    <p>
                        {move || {
                            let n = count();
                            format!(
                                "{} item{} in your collection",
                                n,
                                if n == 1 { "" } else { "s" },
                            )
                        }}
                    </p>
                </div>
            </div>
            <a href=Route::AddItem.to_hash() class=css::addButton>
                <Icon icon=ic::PLUS />
                "Add New Item"
            </a>
        </div>

        <ControlsBar state=state />

        <Show
            when=move || state.filtered.with(|f| !f.is_empty())
            fallback=|| view! { <NoResults /> }
        >
            <div class=move || {
                match state.view_mode.get() {
                    ViewMode::Grid => css::itemsGrid.to_string(),
                    ViewMode::List => css::itemsList.to_string(),
                }
            }>
                <For
                    each=move || state.filtered.get()
                    key=|item| item.id.clone()
                    children=move |item| view! { <ItemCard item=item selected=selected /> }
                />
            </div>
        </Show>
    }
}

/// Search box, type filter dropdown, and grid/list toggle.
#[component]
fn ControlsBar(state: GalleryState) -> impl IntoView {
    view! {
        <div class=css::controls>
            <div class=css::searchFilterGroup>
                <div class=css::searchBox>
                    <Icon icon=ic::SEARCH />
                    <input
                        type="text"
                        placeholder="Search items..."
                        prop:value=move || state.search_term.get()
                        on:input=move |ev| state.search_term.set(event_target_value(&ev))
                    />
                </div>

                <div class=css::filterDropdown>
                    <select
                        prop:value=move || state.filter_type.get()
                        on:change=move |ev| state.filter_type.set(event_target_value(&ev))
                    >
                        <option value=ALL_TYPES>"All Types"</option>
                        <For
                            each=move || state.types.get()
                            key=|t| t.clone()
                            children=move |t| {
                                let value = t.clone();
                                view! { <option value=value>{t}</option> }
                            }
                        />
                    </select>
                    <Icon icon=ic::CHEVRON_DOWN />
                </div>
            </div>

            <div class=css::viewToggle>
                <ViewToggleButton state=state mode=ViewMode::Grid icon=ic::GRID />
                <ViewToggleButton state=state mode=ViewMode::List icon=ic::LIST />
            </div>
        </div>
    }
}

#[component]
fn ViewToggleButton(state: GalleryState, mode: ViewMode, icon: icondata::Icon) -> impl IntoView {
    let class = move || {
        if state.view_mode.get() == mode {
            format!("{} {}", css::viewButton, css::viewButtonActive)
        } else {
            css::viewButton.to_string()
        }
    };

    view! {
        <button class=class on:click=move |_| state.view_mode.set(mode)>
            <Icon icon=icon />
        </button>
    }
}

/// Shown when the collection is non-empty but nothing matches the current
/// search/filter. Distinct from the empty-collection presentation.
#[component]
fn NoResults() -> impl IntoView {
    view! {
        <div class=css::noResults>
            <Icon icon=ic::SEARCH />
            <h3>"No items found"</h3>
            <p>"Try adjusting your search or filter criteria"</p>
        </div>
    }
}

#[component]
fn ItemCard(item: Item, selected: RwSignal<Option<Item>>) -> impl IntoView {
    let image_count = item.images.len();
    let cover = item.cover_image().to_string();
    let open_item = item.clone();

    view! {
        <div class=css::card on:click=move |_| selected.set(Some(open_item.clone()))>
            <div class=css::cardImage>
                <img src=cover alt=item.name.clone() />
                <div class=css::cardOverlay>
                    <button class=css::overlayButton><Icon icon=ic::EYE /></button>
                    <button class=css::overlayButton><Icon icon=ic::HEART /></button>
                    <button class=css::overlayButton><Icon icon=ic::SHARE /></button>
                </div>
            </div>
            <div class=css::cardBody>
                <div class=css::cardHeader>
                    <h3>{item.name.clone()}</h3>
                    <span class=css::cardType>{item.item_type.clone()}</span>
                </div>
                <p class=css::cardDescription>{item.description.clone()}</p>
                <div class=css::cardMeta>
                    <span>
                        {format!(
                            "{} image{}",
                            image_count,
                            if image_count == 1 { "" } else { "s" },
                        )}
                    </span>
                </div>
            </div>
        </div>
    }
}
