//! Generated-design picker with lazy image resolution.

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

/// Dropdown over the session's generated designs.
///
/// Selecting one sets the room source immediately and fetches the design
/// image lazily; the fetch carries a generation token so a response that
/// lands after a newer pick is discarded instead of overwriting it.
#[component]
pub fn DesignPicker() -> impl IntoView {
    let session = expect_context::<Session>();
    let selection = expect_context::<RwSignal<SelectionState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let room_image_gen = expect_context::<RwSignal<Generation>>();

    let selected_id = move || match selection.get().room {
        Some(RoomSource::Generated { design_id }) => design_id,
        _ => String::new(),
    };

    let on_change = move |ev: leptos::ev::Event| {
        let id = event_target_value(&ev);
        if id.is_empty() {
            return;
        }
        selection.update(|s| {
            s.select_room(RoomSource::Generated {
                design_id: id.clone(),
            });
        });

        let mut token = 0;
        room_image_gen.update(|g| token = g.begin());

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_design_image(&session, &id).await {
                    Ok(url) => {
                        if room_image_gen.get_untracked().is_current(token) {
                            selection.update(|s| s.resolve_room_image(url));
                        }
                    }
                    Err(err) => {
                        log::warn!("design image fetch failed: {err}");
                        push_notice(notify, NoticeLevel::Error, "Failed to load design image");
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, &session, notify);
        }
    };

    view! {
        <div class="design-picker">
            <p class="design-picker__hint">"Choose from your generated designs"</p>
            {move || {
                if catalog.get().loading_designs {
                    view! { <div class="design-picker__loading">"Loading designs..."</div> }
                        .into_any()
                } else {
                    view! {
                        <select
                            class="design-picker__select"
                            prop:value=selected_id
                            on:change=on_change.clone()
                        >
                            <option value="">"Select a room design"</option>
                            {catalog
                                .get()
                                .designs
                                .iter()
                                .map(|design| {
                                    let id = design.id.clone();
                                    view! { <option value=id>{design.label()}</option> }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
