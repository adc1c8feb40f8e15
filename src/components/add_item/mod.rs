//! Create-item page.
//!
//! A form for name, type, description, and one or more images, POSTed to the
//! remote item service as multipart form data. The image picker lives in
//! [`uploader`]; this module owns the form state and the submit flow.

mod uploader;

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, FormData};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config;
use crate::core::error::SubmitError;
use crate::utils::{dom, post_form};
use uploader::{ImagePicker, PickerState};

stylance::import_crate_style!(css, "src/components/add_item/add_item.module.css");

/// Assemble the multipart body and POST it. The response body is not
/// consumed; only success/failure matters to the caller.
async fn submit_item(
    name: &str,
    item_type: &str,
    description: &str,
    files: &[File],
) -> Result<(), SubmitError> {
    let form = FormData::new().map_err(|_| SubmitError::FormAssembly)?;
    form.append_with_str("name", name)
        .map_err(|_| SubmitError::FormAssembly)?;
    form.append_with_str("type", item_type)
        .map_err(|_| SubmitError::FormAssembly)?;
    form.append_with_str("description", description)
        .map_err(|_| SubmitError::FormAssembly)?;
    for file in files {
        form.append_with_blob_and_filename("images", file, &file.name())
            .map_err(|_| SubmitError::FormAssembly)?;
    }

    post_form(&config::items_url(), &form).await?;
    Ok(())
}

#[component]
pub fn AddItemPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let (name, set_name) = signal(String::new());
    let (item_type, set_item_type) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    // Pending files and their previews, owned here so submit and picker
    // stay in sync. Local storage: File handles are not thread-safe.
    let files = RwSignal::new_local(Vec::<File>::new());
    let file_input_ref = NodeRef::<leptos::html::Input>::new();
    let picker = PickerState::new(files);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let pending = files.get_untracked();
        if pending.is_empty() {
            // The carousel relies on every item carrying at least one image;
            // this is where that invariant is enforced
            ctx.notify.error("Please select at least one image.");
            return;
        }

        set_submitting.set(true);
        let name_value = name.get_untracked();
        let type_value = item_type.get_untracked();
        let description_value = description.get_untracked();

        spawn_local(async move {
            let result = submit_item(&name_value, &type_value, &description_value, &pending).await;

            // The user may have navigated away while the POST was in flight;
            // a disposed signal means there is no form left to reset, but the
            // toast queue is app-level and still gets the outcome
            let form_alive = set_submitting.try_set(false).is_none();

            match result {
                Ok(()) => {
                    ctx.notify.success("Item successfully added!");
                    if form_alive {
                        set_name.set(String::new());
                        set_item_type.set(String::new());
                        set_description.set(String::new());
                        picker.clear();
                        if let Some(input) = file_input_ref.get_untracked() {
                            input.set_value("");
                        }
                    }
                }
                Err(err) => {
                    dom::log_error("create item", &err);
                    ctx.notify.error("Upload failed. Please try again.");
                }
            }
        });
    };

    view! {
        <div class=css::page>
            <div class=css::container>
                <div class=css::header>
                    <div class=css::headerIcon>
                        <Icon icon=ic::PLUS />
                    </div>
                    <h1>"Add New Item"</h1>
                    <p>"Fill in the details below to add a new item to your collection"</p>
                </div>

                <form class=css::form on:submit=on_submit>
                    <div class=css::formGroup>
                        <label for="name" class=css::label>
                            <Icon icon=ic::TAG />
                            "Item Name"
                        </label>
                        <input
                            type="text"
                            id="name"
                            class=css::input
                            placeholder="Enter item name"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class=css::formGroup>
                        <label for="type" class=css::label>
                            <Icon icon=ic::FILE_TEXT />
                            "Item Type"
                        </label>
                        <input
                            type="text"
                            id="type"
                            class=css::input
                            placeholder="Enter item type (e.g., Electronics, Clothing)"
                            prop:value=move || item_type.get()
                            on:input=move |ev| set_item_type.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class=css::formGroup>
                        <label for="description" class=css::label>
                            <Icon icon=ic::FILE_TEXT />
                            "Description"
                        </label>
                        <textarea
                            id="description"
                            class=css::textarea
                            placeholder="Describe your item in detail..."
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                            rows="4"
                            required
                        />
                    </div>

                    <div class=css::formGroup>
                        <label class=css::label>
                            <Icon icon=ic::IMAGE />
                            "Images"
                        </label>
                        <ImagePicker picker=picker input_ref=file_input_ref />
                    </div>

                    <button
                        type="submit"
                        class=move || {
                            if submitting.get() {
                                format!("{} {}", css::submit, css::submitting)
                            } else {
                                css::submit.to_string()
                            }
                        }
                        disabled=move || submitting.get()
                    >
                        <Show
                            when=move || submitting.get()
                            fallback=|| view! {
                                <Icon icon=ic::PLUS />
                                "Add Item"
                            }
                        >
                            <span class=css::spinner></span>
                            "Adding Item..."
                        </Show>
                    </button>
                </form>
            </div>
        </div>
    }
}
