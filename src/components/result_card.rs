//! Latest composition result with its two follow-up affordances.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::components::toast_stack::push_notice;
use crate::state::catalog::CatalogState;
#[cfg(feature = "hydrate")]
use crate::state::notify::NoticeLevel;
use crate::state::notify::NotifyState;
use crate::state::result::ResultState;
use crate::state::selection::SelectionState;
use crate::state::session::Session;

/// Renders the current `CompositionResult` and offers exactly two paths
/// forward: start a fresh selection cycle, or persist the rendered image
/// back as a new uploaded room.
#[component]
pub fn ResultCard() -> impl IntoView {
    let session = expect_context::<Session>();
    let selection = expect_context::<RwSignal<SelectionState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let result = expect_context::<RwSignal<ResultState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();

    let on_reset = move |_| {
        selection.update(SelectionState::reset);
        result.update(ResultState::clear);
    };

    let on_save_as_room = move |_| {
        if result.get().saving_room {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            use crate::util::files;

            let Some(shown) = result.get().result else {
                return;
            };
            let Some((mime, bytes)) = files::parse_data_url(&shown.image) else {
                push_notice(notify, NoticeLevel::Error, "This result cannot be saved as a room");
                return;
            };
            let Some(blob) = files::bytes_to_blob(&bytes, &mime) else {
                push_notice(notify, NoticeLevel::Error, "This result cannot be saved as a room");
                return;
            };

            let session = session.clone();
            result.update(|r| r.saving_room = true);
            leptos::task::spawn_local(async move {
                let saved =
                    crate::net::api::upload_room(&session, &blob, "composition.png", shown.text.as_deref())
                        .await;
                match saved {
                    Ok(()) => {
                        match crate::net::api::list_rooms(&session).await {
                            Ok(rooms) => catalog.update(|c| c.set_rooms(rooms)),
                            Err(err) => log::warn!("rooms refetch failed: {err}"),
                        }
                        push_notice(notify, NoticeLevel::Success, "Saved as a new room");
                    }
                    Err(err) => {
                        log::warn!("saving result as room failed: {err}");
                        push_notice(notify, NoticeLevel::Error, "Failed to save result as a room");
                    }
                }
                result.update(|r| r.saving_room = false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, catalog, notify);
        }
    };

    view! {
        <div class="result-card">
            {move || {
                let on_save = on_save_as_room.clone();
                result
                    .get()
                    .result
                    .map(|shown| {
                        view! {
                            <div class="result-card__body">
                                <h3 class="result-card__title">"Result"</h3>
                                <img
                                    class="result-card__image"
                                    src=shown.image.clone()
                                    alt="Furniture placement result"
                                />
                                {shown
                                    .text
                                    .clone()
                                    .map(|text| {
                                        view! { <p class="result-card__text">{text}</p> }
                                    })}
                                <span class="result-card__timestamp">{shown.timestamp.clone()}</span>
                                <div class="result-card__actions">
                                    <button class="btn" on:click=on_reset>
                                        "New composition"
                                    </button>
                                    <button
                                        class="btn btn--primary"
                                        on:click=on_save
                                        disabled=move || result.get().saving_room
                                    >
                                        {move || {
                                            if result.get().saving_room {
                                                "Saving..."
                                            } else {
                                                "Save as room"
                                            }
                                        }}
                                    </button>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
