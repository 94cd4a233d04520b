//! Uploaded-room picker and the immediate room upload path.
//!
//! A locally picked room photo is persisted right away: the preview shows
//! while the upload is in flight, then the rooms list is refetched and the
//! newest entry selected. Placement never submits raw room bytes.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::components::toast_stack::push_notice;
use crate::state::catalog::CatalogState;
#[cfg(feature = "hydrate")]
use crate::state::notify::NoticeLevel;
use crate::state::notify::NotifyState;
use crate::state::requests::Generation;
use crate::state::selection::{RoomSource, SelectionState};
use crate::state::session::Session;

/// Thumbnails of previously uploaded rooms plus a file input for new ones.
#[component]
pub fn RoomUploader() -> impl IntoView {
    let session = expect_context::<Session>();
    let selection = expect_context::<RwSignal<SelectionState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let room_image_gen = expect_context::<RwSignal<Generation>>();

    let select_room = move |room_id: String, image: String| {
        // Discard any in-flight design image fetch.
        room_image_gen.update(Generation::invalidate);
        selection.update(|s| {
            s.select_room(RoomSource::Uploaded { room_id });
            s.resolve_room_image(image);
        });
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

            let preview = files::preview_url(&file).unwrap_or_default();
            // Any newer room pick (a design, a saved room, a second file)
            // advances this token and the late completion is dropped.
            let mut token = 0;
            room_image_gen.update(|g| token = g.begin());
            selection.update(|s| {
                s.select_room(RoomSource::LocalFile {
                    name: file.name(),
                    preview_url: preview,
                });
            });

            let session = session.clone();
            leptos::task::spawn_local(async move {
                let uploaded =
                    crate::net::api::upload_room(&session, &file, &file.name(), None).await;
                match uploaded {
                    Ok(()) => {
                        match crate::net::api::list_rooms(&session).await {
                            Ok(rooms) => catalog.update(|c| c.set_rooms(rooms)),
                            Err(err) => log::warn!("rooms refetch failed: {err}"),
                        }
                        if !room_image_gen.get_untracked().is_current(token) {
                            return;
                        }
                        // Server ordering is newest-first; adopt the new id.
                        if let Some(room) = catalog.get_untracked().newest_room().cloned() {
                            selection.update(|s| {
                                s.select_room(RoomSource::Uploaded { room_id: room.id });
                                s.resolve_room_image(room.image);
                            });
                        }
                        push_notice(notify, NoticeLevel::Success, "Room photo uploaded");
                    }
                    Err(err) => {
                        log::warn!("room upload failed: {err}");
                        if room_image_gen.get_untracked().is_current(token) {
                            selection.update(SelectionState::clear_room);
                        }
                        push_notice(notify, NoticeLevel::Error, "Failed to upload room photo");
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, &session, notify);
        }
    };

    view! {
        <div class="room-uploader">
            <p class="room-uploader__hint">"Or use a photo of your own room"</p>
            <div class="room-uploader__grid">
                {move || {
                    catalog
                        .get()
                        .rooms
                        .iter()
                        .map(|room| {
                            let id = room.id.clone();
                            let image = room.image.clone();
                            let is_selected = matches!(
                                &selection.get().room,
                                Some(RoomSource::Uploaded { room_id }) if *room_id == id
                            );
                            let on_click = {
                                let select_room = select_room.clone();
                                let image = image.clone();
                                move |_| select_room(id.clone(), image.clone())
                            };
                            view! {
                                <button
                                    class="room-uploader__thumb"
                                    class:room-uploader__thumb--selected=is_selected
                                    on:click=on_click
                                >
                                    <img src=image alt="Uploaded room"/>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <input
                class="room-uploader__input"
                type="file"
                accept="image/*"
                on:change=on_pick
            />
        </div>
    }
}
