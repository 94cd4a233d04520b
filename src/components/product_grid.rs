//! Paginated, grouped grid of matched shopping products.

use leptos::prelude::*;

use crate::state::search::{SearchState, group_by_item};

/// Product results for the current page, grouped under the item each
/// match was searched for. Page changes are pure slices over the list the
/// search already returned; no network is involved.
#[component]
pub fn ProductGrid() -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();

    let page_count = move || search.get().page_count();
    let page = move || search.get().page;

    let prev = move |_| search.update(|s| s.go_to_page(s.page.saturating_sub(1)));
    let next = move |_| search.update(|s| s.go_to_page(s.page + 1));

    view! {
        <div class="product-grid">
            {move || {
                let state = search.get();
                if state.loading {
                    return view! { <div class="product-grid__loading">"Searching..."</div> }
                        .into_any();
                }
                let Some(session) = state.session.clone() else {
                    return view! { <div class="product-grid__idle"></div> }.into_any();
                };
                if session.product_links.is_empty() {
                    return view! {
                        <p class="product-grid__empty">
                            "No products found. Check the generated queries for what was searched."
                        </p>
                    }
                        .into_any();
                }

                let groups = group_by_item(state.current_page());
                view! {
                    {groups
                        .into_iter()
                        .map(|(item_name, products)| {
                            view! {
                                <section class="product-grid__group">
                                    <h4 class="product-grid__group-title">{item_name}</h4>
                                    {products
                                        .into_iter()
                                        .map(|product| {
                                            view! {
                                                <div class="product-card">
                                                    {product
                                                        .thumbnail
                                                        .clone()
                                                        .map(|thumb| {
                                                            view! {
                                                                <img
                                                                    class="product-card__thumb"
                                                                    src=thumb
                                                                    alt=product.title.clone()
                                                                />
                                                            }
                                                        })}
                                                    <div class="product-card__details">
                                                        <span class="product-card__title">
                                                            {product.title.clone()}
                                                        </span>
                                                        <span class="product-card__price">
                                                            {product.price.clone().unwrap_or_default()}
                                                        </span>
                                                        <span class="product-card__source">
                                                            {product.source.clone().unwrap_or_default()}
                                                        </span>
                                                        {product
                                                            .link
                                                            .clone()
                                                            .map(|link| {
                                                                view! {
                                                                    <a
                                                                        class="product-card__link"
                                                                        href=link
                                                                        target="_blank"
                                                                        rel="noreferrer"
                                                                    >
                                                                        "View product"
                                                                    </a>
                                                                }
                                                            })}
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </section>
                            }
                        })
                        .collect::<Vec<_>>()}
                }
                    .into_any()
            }}

            <Show when=move || { page_count() > 1 }>
                <div class="product-grid__pager">
                    <button class="btn" on:click=prev disabled=move || page() <= 1>
                        "Previous"
                    </button>
                    <span class="product-grid__page">
                        {move || format!("Page {} of {}", page(), page_count())}
                    </span>
                    <button class="btn" on:click=next disabled=move || page() >= page_count()>
                        "Next"
                    </button>
                </div>
            </Show>
        </div>
    }
}
