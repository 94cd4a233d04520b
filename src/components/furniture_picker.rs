//! Local furniture pick and the free-text description field.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::components::toast_stack::push_notice;
use crate::state::catalog::CatalogState;
#[cfg(feature = "hydrate")]
use crate::state::notify::NoticeLevel;
use crate::state::notify::NotifyState;
use crate::state::selection::{FurnitureSource, SelectionState};
use crate::util::files::FileSlot;

/// File input for one-off furniture plus the description textarea.
///
/// A local pick is not persisted to the library; its raw bytes travel
/// inline with the placement request. The picked file handle lives in the
/// page-provided `FileSlot` so the submit handler can reach it.
#[component]
pub fn FurniturePicker() -> impl IntoView {
    let selection = expect_context::<RwSignal<SelectionState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let furniture_file = expect_context::<RwSignal<FileSlot>>();

    let on_pick = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use crate::util::files;

            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                return;
            };

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let size = file.size() as u64;
            if let Err(err) = files::validate_image(&file.type_(), size) {
                push_notice(notify, NoticeLevel::Error, err.to_string());
                return;
            }

            let preview = files::preview_url(&file).unwrap_or_default();
            selection.update(|s| {
                s.select_furniture(FurnitureSource::LocalFile {
                    name: file.name(),
                    mime: file.type_(),
                    size,
                    preview_url: preview,
                });
            });
            furniture_file.update(|slot| slot.set(file));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, notify, furniture_file);
        }
    };

    // Preview for whichever furniture variant is selected.
    let preview = move || {
        let state = selection.get();
        match state.furniture {
            Some(FurnitureSource::LocalFile { preview_url, .. }) => Some(preview_url),
            Some(FurnitureSource::Library { id }) => {
                catalog.get().furniture.iter().find(|f| f.id == id).map(|f| f.image.clone())
            }
            None => None,
        }
    };

    view! {
        <div class="furniture-picker">
            <p class="furniture-picker__hint">"Upload an image of furniture or object"</p>
            <input
                class="furniture-picker__input"
                type="file"
                accept="image/*"
                on:change=on_pick
            />

            {move || {
                preview()
                    .map(|url| {
                        view! {
                            <img class="furniture-picker__preview" src=url alt="Furniture preview"/>
                        }
                    })
            }}

            <p class="furniture-picker__hint">"Describe the furniture (optional)"</p>
            <textarea
                class="furniture-picker__description"
                rows=3
                placeholder="e.g., Modern gray sofa, Wooden dining table, Floor lamp..."
                prop:value=move || selection.get().description
                on:input=move |ev| {
                    selection.update(|s| s.set_description(event_target_value(&ev)));
                }
            ></textarea>
        </div>
    }
}
