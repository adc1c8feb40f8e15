//! Item detail modal with image carousel.
//!
//! The carousel itself is the pure state machine in
//! [`crate::core::carousel`]; this component wires it to pointer and
//! keyboard input and renders the two layers (modal and fullscreen image).
//!
//! Keyboard handling follows the focused-container pattern: the root element
//! is focused on mount and listens for keydown, so the listener's lifetime is
//! exactly the modal's. Background scroll is suppressed by a [`ScrollLock`]
//! guard dropped on unmount.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen::JsValue;

use crate::components::icons as ic;
use crate::core::Carousel;
use crate::models::Item;
use crate::utils::ScrollLock;

stylance::import_crate_style!(css, "src/components/gallery/modal.module.css");

/// Format a server timestamp for the details pane, falling back to the raw
/// string when it doesn't parse as a date.
fn format_date(raw: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(raw));
    if date.get_time().is_nan() {
        raw.to_string()
    } else {
        date.to_locale_date_string("en-US", &JsValue::UNDEFINED).into()
    }
}

#[component]
pub fn ItemModal(item: Item, on_close: Callback<()>) -> impl IntoView {
    let count = item.images.len();
    let name = item.name.clone();
    let alt_name = item.name.clone();
    let item_type = item.item_type.clone();
    let description = item.description.clone();
    let added = item.created_at.as_deref().map(format_date);
    let images = StoredValue::new(item.images);

    let carousel = RwSignal::new(Carousel::open(count));
    let index = Memo::new(move |_| carousel.get().index().unwrap_or(0));
    let current_src = move || {
        images.with_value(|imgs| imgs.get(index.get()).cloned().unwrap_or_default())
    };

    // Suppress background scroll for exactly as long as the modal lives
    let lock = ScrollLock::acquire();
    on_cleanup(move || drop(lock));

    // Focus the root on mount so keyboard events land here
    let root_ref = NodeRef::<leptos::html::Div>::new();
    Effect::new(move || {
        if let Some(el) = root_ref.get() {
            let _ = el.focus();
        }
    });

    // Two-tier dismissal shared by Escape and backdrop clicks: leave
    // fullscreen if fullscreen, close the modal otherwise
    let dismiss = move || {
        let next = carousel.get_untracked().dismiss();
        carousel.set(next);
        if !next.is_open() {
            on_close.run(());
        }
    };

    let close = move |_: ev::MouseEvent| {
        let next = carousel.get_untracked().close();
        carousel.set(next);
        if !next.is_open() {
            on_close.run(());
        }
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Escape" => {
            ev.prevent_default();
            dismiss();
        }
        "ArrowLeft" => carousel.update(|c| *c = c.previous()),
        "ArrowRight" => carousel.update(|c| *c = c.next()),
        _ => {}
    };

    // Dismiss only when the click lands on the backdrop layer itself, not on
    // a descendant
    let backdrop_click = move |ev: ev::MouseEvent| {
        if let (Some(target), Some(current)) = (ev.target(), ev.current_target())
            && target == current
        {
            dismiss();
        }
    };

    // Clicks inside the modal can move focus to buttons or nowhere at all;
    // pull it back so the arrow keys keep working
    let refocus = move |_: ev::MouseEvent| {
        if let Some(el) = root_ref.get_untracked() {
            let _ = el.focus();
        }
    };

    let previous = move |_: ev::MouseEvent| carousel.update(|c| *c = c.previous());
    let next = move |_: ev::MouseEvent| carousel.update(|c| *c = c.next());
    let enter_fullscreen = move |_: ev::MouseEvent| {
        carousel.update(|c| *c = c.toggle_fullscreen());
    };
    let exit_fullscreen = move |_: ev::MouseEvent| {
        carousel.update(|c| *c = c.exit_fullscreen());
    };

    view! {
        <div
            node_ref=root_ref
            tabindex="-1"
            class=css::root
            on:keydown=handle_keydown
            on:click=refocus
        >
            <div class=css::backdrop on:click=backdrop_click>
                <div class=css::container role="dialog" aria-label="Item details">
                    <div class=css::header>
                        <div class=css::title>
                            <h2>{name}</h2>
                            <span class=css::typeBadge>{item_type.clone()}</span>
                        </div>
                        <div class=css::actions>
                            <button class=css::actionButton title="Add to favorites">
                                <Icon icon=ic::HEART />
                            </button>
                            <button class=css::actionButton title="Share">
                                <Icon icon=ic::SHARE />
                            </button>
                            <button class=css::actionButton title="Download">
                                <Icon icon=ic::DOWNLOAD />
                            </button>
                            <button class=css::closeButton title="Close" on:click=close>
                                <Icon icon=ic::CLOSE />
                            </button>
                        </div>
                    </div>

                    <div class=css::content>
                        <div class=css::gallery>
                            <div class=css::mainImage>
                                <img
                                    src=current_src
                                    alt=move || format!("{} - Image {}", alt_name, index.get() + 1)
                                    on:click=enter_fullscreen
                                />
                                <button
                                    class=css::fullscreenButton
                                    title="View fullscreen"
                                    on:click=enter_fullscreen
                                >
                                    <Icon icon=ic::EXPAND />
                                </button>

                                <Show when=move || (count > 1)>
                                    <button
                                        class=format!("{} {}", css::navButton, css::navPrev)
                                        on:click=previous
                                    >
                                        <Icon icon=ic::CHEVRON_LEFT />
                                    </button>
                                    <button
                                        class=format!("{} {}", css::navButton, css::navNext)
                                        on:click=next
                                    >
                                        <Icon icon=ic::CHEVRON_RIGHT />
                                    </button>
                                </Show>

                                <div class=css::counter>
                                    {move || format!("{} / {}", index.get() + 1, count)}
                                </div>
                            </div>

                            <Show when=move || (count > 1)>
                                <div class=css::thumbnails>
                                    <For
                                        each=move || {
                                            images.with_value(|imgs| {
                                                imgs.iter().cloned().enumerate().collect::<Vec<_>>()
                                            })
                                        }
                                        key=|(i, _)| *i
                                        children=move |(i, url)| {
                                            let thumb_class = move || {
                                                if index.get() == i {
                                                    format!("{} {}", css::thumbnail, css::thumbnailActive)
                                                } else {
                                                    css::thumbnail.to_string()
                                                }
                                            };
                                            view! {
                                                <button
                                                    class=thumb_class
                                                    on:click=move |_| {
                                                        carousel.update(|c| *c = c.select(i))
                                                    }
                                                >
                                                    <img src=url alt=format!("Thumbnail {}", i + 1) />
                                                </button>
                                            }
                                        }
                                    />
                                </div>
                            </Show>
                        </div>

                        <div class=css::details>
                            <div class=css::detailSection>
                                <h3>"Description"</h3>
                                <p>{description}</p>
                            </div>

                            <div class=css::detailSection>
                                <h3>"Details"</h3>
                                <div class=css::detailGrid>
                                    <div class=css::detailItem>
                                        <span class=css::detailLabel>"Type:"</span>
                                        <span class=css::detailValue>{item_type}</span>
                                    </div>
                                    <div class=css::detailItem>
                                        <span class=css::detailLabel>"Images:"</span>
                                        <span class=css::detailValue>{count}</span>
                                    </div>
                                    {added.map(|added| view! {
                                        <div class=css::detailItem>
                                            <span class=css::detailLabel>"Added:"</span>
                                            <span class=css::detailValue>{added}</span>
                                        </div>
                                    })}
                                </div>
                            </div>

                            <div class=css::enquiry>
                                <button class=css::enquiryButton>"Enquire Now"</button>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <Show when=move || carousel.get().is_fullscreen()>
                <div class=css::fullscreenBackdrop on:click=backdrop_click>
                    <button
                        class=css::fullscreenClose
                        title="Exit fullscreen"
                        on:click=exit_fullscreen
                    >
                        <Icon icon=ic::CLOSE />
                    </button>

                    <img class=css::fullscreenImage src=current_src alt="Fullscreen view" />

                    <Show when=move || (count > 1)>
                        <button
                            class=format!("{} {}", css::fullscreenNav, css::navPrev)
                            on:click=previous
                        >
                            <Icon icon=ic::CHEVRON_LEFT />
                        </button>
                        <button
                            class=format!("{} {}", css::fullscreenNav, css::navNext)
                            on:click=next
                        >
                            <Icon icon=ic::CHEVRON_RIGHT />
                        </button>
                    </Show>

                    <div class=css::fullscreenCounter>
                        {move || format!("{} / {}", index.get() + 1, count)}
                    </div>
                </div>
            </Show>
        </div>
    }
}
