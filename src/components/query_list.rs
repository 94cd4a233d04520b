//! AI-generated shopping queries for the analyzed photo.

use leptos::prelude::*;

use crate::state::search::SearchState;

/// List of the queries the backend ran, one per identified item.
#[component]
pub fn QueryList() -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();

    view! {
        <div class="query-list">
            {move || {
                let queries = search
                    .get()
                    .session
                    .map(|s| s.generated_queries)
                    .unwrap_or_default();
                if queries.is_empty() {
                    return view! {
                        <p class="query-list__empty">"No queries were generated."</p>
                    }
                        .into_any();
                }
                view! {
                    <p class="query-list__heading">"Queries the AI used:"</p>
                    {queries
                        .into_iter()
                        .map(|q| {
                            view! {
                                <code class="query-list__entry">
                                    {format!("{}: \"{}\"", q.item_name, q.query)}
                                </code>
                            }
                        })
                        .collect::<Vec<_>>()}
                }
                    .into_any()
            }}
        </div>
    }
}
