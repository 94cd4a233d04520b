//! Furniture placement page, the main composition workflow.
//!
//! LIFECYCLE
//! =========
//! On mount the three server-owned lists (designs, uploaded rooms,
//! furniture library) are fetched into `CatalogState`; they populate
//! disjoint slices, so ordering between them does not matter. Submission
//! is gated by `SelectionState::can_submit` plus the `placing` flag, which
//! clears on every exit path.

use leptos::prelude::*;

use crate::components::design_picker::DesignPicker;
use crate::components::furniture_library::FurnitureLibrary;
use crate::components::furniture_picker::FurniturePicker;
use crate::components::result_card::ResultCard;
use crate::components::room_uploader::RoomUploader;
use crate::components::toast_stack::push_notice;
use crate::state::catalog::CatalogState;
use crate::state::notify::{NoticeLevel, NotifyState};
use crate::state::requests::Generation;
use crate::state::result::ResultState;
use crate::state::selection::SelectionState;
use crate::state::session::Session;
use crate::util::files::FileSlot;

/// Placement page: pick a room, pick furniture, submit, view the result.
#[component]
pub fn PlacementPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let selection = expect_context::<RwSignal<SelectionState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let result = expect_context::<RwSignal<ResultState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();

    // Guards the lazy design-image fetch against stale responses.
    let room_image_gen = RwSignal::new(Generation::default());
    provide_context(room_image_gen);

    // Raw file handle backing a local furniture pick.
    let furniture_file = RwSignal::new(FileSlot::default());
    provide_context(furniture_file);

    let fetched = RwSignal::new(false);

    // Initial list fetches, once per page visit.
    {
        let session = session.clone();
        Effect::new(move || {
            if fetched.get() {
                return;
            }
            fetched.set(true);

            #[cfg(feature = "hydrate")]
            {
                catalog.update(|c| {
                    c.loading_designs = true;
                    c.loading_rooms = true;
                    c.loading_furniture = true;
                });
                let session = session.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::list_designs(&session).await {
                        Ok(designs) => {
                            if designs.is_empty() {
                                push_notice(
                                    notify,
                                    NoticeLevel::Info,
                                    "No designs found. Please generate a room design first.",
                                );
                            }
                            catalog.update(|c| c.set_designs(designs));
                        }
                        Err(err) => {
                            log::warn!("design list fetch failed: {err}");
                            catalog.update(|c| c.loading_designs = false);
                            push_notice(notify, NoticeLevel::Error, "Failed to fetch designs");
                        }
                    }

                    match crate::net::api::list_rooms(&session).await {
                        Ok(rooms) => catalog.update(|c| c.set_rooms(rooms)),
                        Err(err) => {
                            log::warn!("room list fetch failed: {err}");
                            catalog.update(|c| c.loading_rooms = false);
                        }
                    }

                    match crate::net::api::list_furniture(&session).await {
                        Ok(items) => catalog.update(|c| c.set_furniture(items)),
                        Err(err) => {
                            log::warn!("furniture list fetch failed: {err}");
                            catalog.update(|c| c.loading_furniture = false);
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&session, catalog);
            }
        });
    }

    let on_submit = move |_| {
        if result.get().placing {
            return;
        }
        let request = match selection.get().placement_request() {
            Ok(request) => request,
            Err(err) => {
                push_notice(notify, NoticeLevel::Error, err.to_string());
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let upload = furniture_file.get_untracked().get();
            result.update(|r| r.placing = true);
            leptos::task::spawn_local(async move {
                let placed =
                    crate::net::api::place_furniture(&session, &request, upload.as_ref()).await;
                match placed {
                    Ok(resp) => {
                        result.update(|r| {
                            r.apply(crate::state::result::CompositionResult {
                                image: resp.image,
                                text: resp.text,
                                timestamp: crate::util::format::now_string(),
                            });
                        });
                        push_notice(notify, NoticeLevel::Success, "Furniture placed successfully!");
                    }
                    Err(err) => {
                        result.update(ResultState::fail);
                        let message = if err.is_validation() {
                            err.to_string()
                        } else {
                            log::warn!("placement failed: {err}");
                            "Failed to place furniture".to_owned()
                        };
                        push_notice(notify, NoticeLevel::Error, message);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    let submit_disabled = move || result.get().placing || !selection.get().can_submit();

    view! {
        <div class="placement-page">
            <header class="placement-page__header">
                <h2>"Furniture Placement Tool"</h2>
                <p>"Select a room design and add your own furniture"</p>
            </header>

            <div class="placement-page__columns">
                <section class="card">
                    <h3 class="card__title">"Step 1: Select Room"</h3>
                    <DesignPicker/>
                    <RoomUploader/>
                    {move || {
                        selection
                            .get()
                            .room_image
                            .map(|url| {
                                view! {
                                    <img class="card__preview" src=url alt="Selected room"/>
                                }
                            })
                    }}
                </section>

                <section class="card">
                    <h3 class="card__title">"Step 2: Choose Furniture"</h3>
                    <FurnitureLibrary/>
                    <FurniturePicker/>
                </section>
            </div>

            <div class="placement-page__submit">
                <button
                    class="btn btn--primary placement-page__submit-button"
                    on:click=on_submit
                    disabled=submit_disabled
                >
                    {move || if result.get().placing { "Placing..." } else { "Place Furniture" }}
                </button>
            </div>

            <ResultCard/>
        </div>
    }
}
