//! Multi-image picker with drag-and-drop and client-side previews.
//!
//! Selected files are mirrored into the parent's `files` signal; previews are
//! data URLs produced by `FileReader` as each file finishes reading.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen::JsCast;
use web_sys::{File, FileList, FileReader};

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/add_item/uploader.module.css");

/// One pending image and its preview.
///
/// `url` is empty until the FileReader for this entry completes; entries are
/// matched by `id` rather than position so a late read cannot land on the
/// wrong slot after the user removes another image.
#[derive(Clone, Debug, PartialEq)]
pub struct ImagePreview {
    pub id: u64,
    pub name: String,
    pub url: String,
}

/// Picker state shared with the parent form.
///
/// `Copy` because all fields are Leptos signals.
#[derive(Clone, Copy)]
pub struct PickerState {
    /// Files to be submitted, in selection order. Locally stored because
    /// `File` handles are not thread-safe.
    files: RwSignal<Vec<File>, LocalStorage>,
    /// Preview entries, parallel to `files`.
    previews: RwSignal<Vec<ImagePreview>>,
    /// Next preview id.
    next_id: StoredValue<u64>,
}

impl PickerState {
    pub fn new(files: RwSignal<Vec<File>, LocalStorage>) -> Self {
        Self {
            files,
            previews: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Replace the pending set with the given list (file-input semantics:
    /// a new selection supersedes the old one).
    pub fn accept(&self, list: FileList) {
        let files: Vec<File> = (0..list.length()).filter_map(|i| list.get(i)).collect();

        let mut entries = Vec::with_capacity(files.len());
        for file in &files {
            let id = self.next_id.get_value();
            self.next_id.set_value(id + 1);
            entries.push(ImagePreview {
                id,
                name: file.name(),
                url: String::new(),
            });
        }

        for (file, entry) in files.iter().zip(&entries) {
            read_preview(file, entry.id, self.previews);
        }

        self.previews.set(entries);
        self.files.set(files);
    }

    /// Remove one pending image and its preview.
    pub fn remove(&self, id: u64) {
        let Some(index) = self
            .previews
            .with_untracked(|p| p.iter().position(|entry| entry.id == id))
        else {
            return;
        };
        self.previews.update(|p| {
            p.remove(index);
        });
        self.files.update(|f| {
            f.remove(index);
        });
    }

    /// Drop all pending images (after a successful submit).
    pub fn clear(&self) {
        self.previews.set(Vec::new());
        self.files.set(Vec::new());
    }

    fn is_empty(&self) -> bool {
        self.previews.with(|p| p.is_empty())
    }
}

/// Start an async data-URL read for one file; the result lands in the
/// preview entry with the given id.
fn read_preview(file: &File, id: u64, previews: RwSignal<Vec<ImagePreview>>) {
    let Ok(reader) = FileReader::new() else {
        return;
    };

    let reader_in_cb = reader.clone();
    let on_loaded = wasm_bindgen::closure::Closure::once_into_js(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_in_cb.result()
            && let Some(url) = result.as_string()
        {
            // The picker may be gone by the time the read completes
            let _ = previews.try_update(|p| {
                if let Some(entry) = p.iter_mut().find(|entry| entry.id == id) {
                    entry.url = url;
                }
            });
        }
    });

    reader.set_onloadend(Some(on_loaded.unchecked_ref()));
    let _ = reader.read_as_data_url(file);
}

/// Drop zone, hidden file input, and the preview grid.
#[component]
pub fn ImagePicker(picker: PickerState, input_ref: NodeRef<leptos::html::Input>) -> impl IntoView {
    let (drag_active, set_drag_active) = signal(false);

    let on_dragover = move |ev: ev::DragEvent| {
        ev.prevent_default();
        set_drag_active.set(true);
    };

    let on_dragleave = move |ev: ev::DragEvent| {
        ev.prevent_default();
        set_drag_active.set(false);
    };

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        set_drag_active.set(false);
        if let Some(list) = ev.data_transfer().and_then(|dt| dt.files()) {
            picker.accept(list);
        }
    };

    let on_file_input = move |_| {
        if let Some(list) = input_ref.get_untracked().and_then(|input| input.files()) {
            picker.accept(list);
        }
    };

    let zone_class = move || {
        if drag_active.get() {
            format!("{} {}", css::dropZone, css::dragActive)
        } else {
            css::dropZone.to_string()
        }
    };

    view! {
        <div
            class=zone_class
            on:dragenter=on_dragover
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            <input
                type="file"
                node_ref=input_ref
                class=css::fileInput
                multiple
                accept="image/*"
                on:change=on_file_input
            />
            <div class=css::uploadContent>
                <Icon icon=ic::UPLOAD />
                <h3>"Drop images here or click to browse"</h3>
                <p>"Support for multiple images (JPG, PNG, GIF)"</p>
            </div>
        </div>

        <Show when=move || !picker.is_empty()>
            <div class=css::previews>
                <h4>"Selected Images:"</h4>
                <div class=css::previewGrid>
                    <For
                        each=move || picker.previews.get()
                        key=|entry| entry.id
                        children=move |entry| {
                            let id = entry.id;
                            // Rows are keyed by id, so the data URL has to be
                            // read reactively: it fills in after the row is
                            // first rendered
                            let url = Memo::new(move |_| {
                                picker.previews.with(|p| {
                                    p.iter()
                                        .find(|e| e.id == id)
                                        .map(|e| e.url.clone())
                                        .unwrap_or_default()
                                })
                            });
                            let name = entry.name.clone();
                            let alt = entry.name.clone();
                            view! {
                                <div class=css::previewItem>
                                    <Show when=move || !url.get().is_empty()>
                                        <img src=move || url.get() alt=alt.clone() />
                                    </Show>
                                    <button
                                        type="button"
                                        class=css::removeButton
                                        title="Remove image"
                                        on:click=move |_| picker.remove(id)
                                    >
                                        <Icon icon=ic::CLOSE />
                                    </button>
                                    <span class=css::previewName>{name}</span>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}
