//! Furniture library: select, upload, and delete library entries.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::components::toast_stack::push_notice;
use crate::state::catalog::CatalogState;
#[cfg(feature = "hydrate")]
use crate::state::notify::NoticeLevel;
use crate::state::notify::NotifyState;
use crate::state::selection::{FurnitureSource, SelectionState};
use crate::state::session::Session;
use crate::util::files::FileSlot;

/// Library grid plus an add-to-library form.
///
/// Every mutation (upload, delete) is followed by a full list refetch; the
/// server owns ids and ordering. Deleting the currently selected entry
/// also clears the furniture selection.
#[component]
pub fn FurnitureLibrary() -> impl IntoView {
    let session = expect_context::<Session>();
    let selection = expect_context::<RwSignal<SelectionState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();

    let new_name = RwSignal::new(String::new());
    let pending_file = RwSignal::new(FileSlot::default());
    let uploading = RwSignal::new(false);

    let on_select = move |id: String| {
        selection.update(|s| s.select_furniture(FurnitureSource::Library { id }));
    };

    let on_delete = {
        let session = session.clone();
        move |id: String| {
            #[cfg(feature = "hydrate")]
            {
                let session = session.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::delete_furniture(&session, &id).await {
                        Ok(()) => {
                            selection.update(|s| s.drop_library_item(&id));
                            match crate::net::api::list_furniture(&session).await {
                                Ok(items) => catalog.update(|c| c.set_furniture(items)),
                                Err(err) => log::warn!("furniture refetch failed: {err}"),
                            }
                            push_notice(notify, NoticeLevel::Success, "Furniture removed");
                        }
                        Err(err) => {
                            log::warn!("furniture delete failed: {err}");
                            push_notice(notify, NoticeLevel::Error, "Failed to remove furniture");
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&session, id);
            }
        }
    };

    let on_pick = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use crate::util::files;

            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                return;
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Err(err) = files::validate_image(&file.type_(), file.size() as u64) {
                push_notice(notify, NoticeLevel::Error, err.to_string());
                return;
            }
            pending_file.update(|slot| slot.set(file));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, notify);
        }
    };

    let on_upload = move |_| {
        if uploading.get() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = pending_file.get().get() else {
                push_notice(notify, NoticeLevel::Error, "Please upload an image file");
                return;
            };
            let name = new_name.get().trim().to_owned();
            let session = session.clone();
            uploading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_furniture(&session, &file, &name).await {
                    Ok(()) => {
                        match crate::net::api::list_furniture(&session).await {
                            Ok(items) => catalog.update(|c| c.set_furniture(items)),
                            Err(err) => log::warn!("furniture refetch failed: {err}"),
                        }
                        new_name.set(String::new());
                        pending_file.update(FileSlot::clear);
                        push_notice(notify, NoticeLevel::Success, "Furniture added to library");
                    }
                    Err(err) => {
                        let message = if err.is_validation() {
                            err.to_string()
                        } else {
                            log::warn!("furniture upload failed: {err}");
                            "Failed to upload furniture".to_owned()
                        };
                        push_notice(notify, NoticeLevel::Error, message);
                    }
                }
                uploading.set(false);
            });
        }
    };

    view! {
        <div class="furniture-library">
            {move || {
                if catalog.get().loading_furniture {
                    return view! {
                        <div class="furniture-library__loading">"Loading library..."</div>
                    }
                        .into_any();
                }
                let items = catalog.get().furniture;
                if items.is_empty() {
                    return view! {
                        <div class="furniture-library__empty">"No furniture in your library yet"</div>
                    }
                        .into_any();
                }
                items
                    .iter()
                    .map(|item| {
                        let id = item.id.clone();
                        let delete_id = item.id.clone();
                        let is_selected = matches!(
                            &selection.get().furniture,
                            Some(FurnitureSource::Library { id: sel }) if *sel == id
                        );
                        let on_delete = on_delete.clone();
                        view! {
                            <div
                                class="furniture-library__item"
                                class:furniture-library__item--selected=is_selected
                            >
                                <button
                                    class="furniture-library__pick"
                                    on:click=move |_| on_select(id.clone())
                                >
                                    <img src=item.image.clone() alt=item.description.clone()/>
                                    <span>{item.description.clone()}</span>
                                </button>
                                <button
                                    class="furniture-library__delete"
                                    title="Remove from library"
                                    on:click=move |_| on_delete(delete_id.clone())
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}

            <div class="furniture-library__add">
                <input
                    class="furniture-library__name"
                    type="text"
                    placeholder="Name this furniture"
                    prop:value=move || new_name.get()
                    on:input=move |ev| new_name.set(event_target_value(&ev))
                />
                <input
                    class="furniture-library__file"
                    type="file"
                    accept="image/*"
                    on:change=on_pick
                />
                <button
                    class="btn"
                    on:click=on_upload
                    disabled=move || uploading.get() || pending_file.get().is_empty()
                >
                    {move || if uploading.get() { "Adding..." } else { "Add to library" }}
                </button>
            </div>
        </div>
    }
}
