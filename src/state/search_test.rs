use super::*;

fn link(item: Option<&str>, title: &str) -> ProductLink {
    ProductLink {
        item_name: item.map(str::to_owned),
        title: title.to_owned(),
        ..ProductLink::default()
    }
}

fn links(n: usize) -> Vec<ProductLink> {
    (0..n).map(|i| link(Some("Sofa"), &format!("p{i}"))).collect()
}

fn session_with(n: usize) -> SearchSession {
    SearchSession {
        description: "Bohemian living room".to_owned(),
        generated_queries: vec![],
        product_links: links(n),
    }
}

// =============================================================
// Pagination arithmetic
// =============================================================

#[test]
fn page_count_is_ceil_over_page_size() {
    assert_eq!(page_count(0), 0);
    assert_eq!(page_count(1), 1);
    assert_eq!(page_count(10), 1);
    assert_eq!(page_count(11), 2);
    assert_eq!(page_count(95), 10);
    assert_eq!(page_count(100), 10);
}

#[test]
fn page_slice_contains_the_expected_window() {
    let items: Vec<usize> = (0..23).collect();
    assert_eq!(page_slice(&items, 1).to_vec(), (0..10).collect::<Vec<_>>());
    assert_eq!(page_slice(&items, 2).to_vec(), (10..20).collect::<Vec<_>>());
    assert_eq!(page_slice(&items, 3).to_vec(), (20..23).collect::<Vec<_>>());
}

#[test]
fn page_slice_past_the_end_is_empty() {
    let items: Vec<usize> = (0..5).collect();
    assert!(page_slice(&items, 2).is_empty());
    assert!(page_slice::<usize>(&[], 1).is_empty());
}

#[test]
fn go_to_page_clamps_to_valid_range() {
    let mut state = SearchState::default();
    state.apply(session_with(25));
    state.go_to_page(99);
    assert_eq!(state.page, 3);
    state.go_to_page(0);
    assert_eq!(state.page, 1);
}

#[test]
fn current_page_follows_the_page_field() {
    let mut state = SearchState::default();
    state.apply(session_with(12));
    assert_eq!(state.current_page().len(), 10);
    state.go_to_page(2);
    assert_eq!(state.current_page().len(), 2);
    assert_eq!(state.current_page()[0].title, "p10");
}

// =============================================================
// Session lifecycle
// =============================================================

#[test]
fn a_new_upload_discards_the_previous_session() {
    let mut state = SearchState::default();
    state.apply(session_with(3));
    state.set_upload("room.jpg".to_owned(), "blob:room".to_owned());
    assert!(state.session.is_none());
    assert_eq!(state.page, 1);
    assert_eq!(state.uploaded_name.as_deref(), Some("room.jpg"));
}

#[test]
fn apply_clears_loading_and_resets_the_page() {
    let mut state = SearchState {
        loading: true,
        page: 4,
        ..SearchState::default()
    };
    state.apply(session_with(30));
    assert!(!state.loading);
    assert_eq!(state.page, 1);
}

#[test]
fn repicking_during_a_search_clears_the_loading_flag() {
    let mut state = SearchState::default();
    state.set_upload("first.jpg".to_owned(), "blob:first".to_owned());
    state.loading = true;
    // New pick while the previous search is still in flight; the stale
    // response is discarded by token and never touches state again.
    state.set_upload("second.jpg".to_owned(), "blob:second".to_owned());
    assert!(!state.loading);
    assert!(state.session.is_none());
    assert_eq!(state.uploaded_name.as_deref(), Some("second.jpg"));
}

#[test]
fn fail_clears_loading_and_drops_the_preview() {
    let mut state = SearchState::default();
    state.set_upload("room.jpg".to_owned(), "blob:room".to_owned());
    state.loading = true;
    state.fail();
    assert!(!state.loading);
    assert!(state.preview_url.is_none());
}

// =============================================================
// Grouping
// =============================================================

#[test]
fn groups_preserve_first_seen_order() {
    let items = vec![
        link(Some("Sofa"), "a"),
        link(Some("Lamp"), "b"),
        link(Some("Sofa"), "c"),
    ];
    let groups = group_by_item(&items);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].0, "Sofa");
    assert_eq!(groups[0].1.len(), 2);
    assert_eq!(groups[1].0, "Lamp");
}

#[test]
fn untagged_products_fall_into_the_catch_all_group() {
    let items = vec![link(None, "a"), link(Some("Sofa"), "b")];
    let groups = group_by_item(&items);
    assert_eq!(groups[0].0, UNGROUPED_LABEL);
}
