#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::types::{GeneratedQuery, ProductLink, SearchResponse};

/// Fixed page size for the product grid. Pagination is purely local: the
/// wire call returns the full list and page changes are slices of it.
pub const PAGE_SIZE: usize = 10;

/// Group label for products the backend did not tag with an item name.
pub const UNGROUPED_LABEL: &str = "Other items";

/// One completed analyze-and-search round trip.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchSession {
    pub description: String,
    pub generated_queries: Vec<GeneratedQuery>,
    pub product_links: Vec<ProductLink>,
}

impl From<SearchResponse> for SearchSession {
    fn from(resp: SearchResponse) -> Self {
        Self {
            description: resp.description,
            generated_queries: resp.generated_queries,
            product_links: resp.product_links,
        }
    }
}

/// Image-search screen state. One active session per visit; replaced
/// wholesale on each new search.
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    pub uploaded_name: Option<String>,
    pub preview_url: Option<String>,
    pub session: Option<SearchSession>,
    pub loading: bool,
    /// 1-based current page over `session.product_links`.
    pub page: usize,
}

impl SearchState {
    /// Record a newly picked image; any previous session is discarded.
    /// Also clears `loading`: re-picking invalidates the in-flight search
    /// token, and the discarded response will never touch state again.
    pub fn set_upload(&mut self, name: String, preview_url: String) {
        self.uploaded_name = Some(name);
        self.preview_url = Some(preview_url);
        self.session = None;
        self.loading = false;
        self.page = 1;
    }

    /// Apply a completed search, resetting to the first page.
    pub fn apply(&mut self, session: SearchSession) {
        self.session = Some(session);
        self.loading = false;
        self.page = 1;
    }

    /// Record a failed search: flag cleared, preview dropped so the
    /// screen returns to the upload form.
    pub fn fail(&mut self) {
        self.loading = false;
        self.preview_url = None;
    }

    pub fn page_count(&self) -> usize {
        self.session
            .as_ref()
            .map_or(0, |s| page_count(s.product_links.len()))
    }

    /// Clamp-move to the given 1-based page.
    pub fn go_to_page(&mut self, page: usize) {
        let pages = self.page_count().max(1);
        self.page = page.clamp(1, pages);
    }

    /// Products on the current page, in wire order.
    pub fn current_page(&self) -> &[ProductLink] {
        self.session
            .as_ref()
            .map_or(&[], |s| page_slice(&s.product_links, self.page))
    }
}

/// `ceil(n / PAGE_SIZE)` pages over `n` items.
pub fn page_count(n: usize) -> usize {
    n.div_ceil(PAGE_SIZE)
}

/// Items on 1-based page `page`: the slice `[10(k-1), min(10k, n))`.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let start = PAGE_SIZE * page.saturating_sub(1);
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

/// Group products under their item name, preserving first-seen group
/// order and wire order within each group.
pub fn group_by_item(links: &[ProductLink]) -> Vec<(String, Vec<ProductLink>)> {
    let mut groups: Vec<(String, Vec<ProductLink>)> = Vec::new();
    for link in links {
        let key = link
            .item_name
            .clone()
            .unwrap_or_else(|| UNGROUPED_LABEL.to_owned());
        match groups.iter_mut().find(|(name, _)| *name == key) {
            Some((_, members)) => members.push(link.clone()),
            None => groups.push((key, vec![link.clone()])),
        }
    }
    groups
}
