//! Image search page: upload a photo, get queries and product matches.

use leptos::prelude::*;

use crate::components::product_grid::ProductGrid;
use crate::components::query_list::QueryList;
#[cfg(feature = "hydrate")]
use crate::components::toast_stack::push_notice;
#[cfg(feature = "hydrate")]
use crate::state::notify::NoticeLevel;
use crate::state::notify::NotifyState;
use crate::state::requests::Generation;
use crate::state::search::SearchState;
use crate::state::session::Session;
use crate::util::files::FileSlot;

/// Search page: one uploaded image, one analyze-and-search round trip,
/// locally paginated results. Picking a new image discards the previous
/// session wholesale.
#[component]
pub fn SearchPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let search = expect_context::<RwSignal<SearchState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();

    let picked_file = RwSignal::new(FileSlot::default());
    // Guards against a stale search response landing after a new pick.
    let search_gen = RwSignal::new(Generation::default());

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
            search_gen.update(Generation::invalidate);
            search.update(|s| s.set_upload(file.name(), preview));
            picked_file.update(|slot| slot.set(file));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, notify);
        }
    };

    let on_search = move |_| {
        if search.get().loading {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = picked_file.get_untracked().get() else {
                push_notice(
                    notify,
                    NoticeLevel::Error,
                    "Please upload a photo of an item or room to analyze",
                );
                return;
            };

            let mut token = 0;
            search_gen.update(|g| token = g.begin());
            search.update(|s| {
                s.loading = true;
                s.session = None;
            });

            let session = session.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::analyze_and_search(&session, &file).await;
                if !search_gen.get_untracked().is_current(token) {
                    return;
                }
                match outcome {
                    Ok(resp) => {
                        search.update(|s| s.apply(resp.into()));
                        push_notice(notify, NoticeLevel::Success, "Analysis and search complete!");
                    }
                    Err(err) => {
                        search.update(SearchState::fail);
                        let message = if err.is_validation() {
                            err.to_string()
                        } else {
                            log::warn!("analyze-and-search failed: {err}");
                            "Search failed. Please try again.".to_owned()
                        };
                        push_notice(notify, NoticeLevel::Error, message);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, search_gen);
        }
    };

    view! {
        <div class="search-page">
            <header class="search-page__header">
                <h2>"Image-based Furniture Search"</h2>
            </header>

            <div class="search-page__columns">
                <section class="card">
                    <h3 class="card__title">"Analyzed photo"</h3>
                    {move || {
                        let state = search.get();
                        if let (Some(url), Some(session)) =
                            (state.preview_url.clone(), state.session.clone())
                        {
                            view! {
                                <div class="search-page__analysis">
                                    <img
                                        class="search-page__image"
                                        src=url
                                        alt="Analyzed photo"
                                    />
                                    <p class="search-page__description-label">"AI description:"</p>
                                    <p class="search-page__description">{session.description}</p>
                                    <QueryList/>
                                    <span class="search-page__file-name">
                                        {format!(
                                            "File: {}",
                                            state.uploaded_name.unwrap_or_else(|| "---".to_owned()),
                                        )}
                                    </span>
                                </div>
                            }
                                .into_any()
                        } else {
                            view! {
                                <div class="search-page__form">
                                    <input
                                        class="search-page__input"
                                        type="file"
                                        accept="image/*"
                                        on:change=on_pick
                                    />
                                    {state
                                        .preview_url
                                        .clone()
                                        .map(|url| {
                                            view! {
                                                <img
                                                    class="search-page__image"
                                                    src=url
                                                    alt="Upload preview"
                                                />
                                            }
                                        })}
                                    <button
                                        class="btn btn--primary search-page__submit"
                                        on:click=on_search.clone()
                                        disabled=move || {
                                            search.get().loading || picked_file.get().is_empty()
                                        }
                                    >
                                        {if state.loading { "Analyzing..." } else { "Analyze and search" }}
                                    </button>
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </section>

                <section class="card">
                    <h3 class="card__title">"Products found"</h3>
                    <ProductGrid/>
                </section>
            </div>
        </div>
    }
}
