use serde::Serialize;

use crate::category::CategoryFilter;

use super::filter::{apply_filters, Searchable};
use super::pagination::{page_window, paginate, total_pages, PageMarker};

/// Search, category, and page selection for a browse page.
///
/// Changing the query or category always returns to page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseState {
    query: String,
    category: CategoryFilter,
    page: usize,
    page_size: usize,
}

/// What a browse page renders for the current state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView<'a, T> {
    pub items: Vec<&'a T>,
    /// Items matching the filters across all pages.
    pub matched: usize,
    /// Items before filtering.
    pub available: usize,
    pub page: usize,
    pub total_pages: usize,
    pub markers: Vec<PageMarker>,
}

impl<T> PageView<'_, T> {
    /// True when the source list itself was empty (fetch failed or no data).
    pub fn is_unavailable(&self) -> bool {
        self.available == 0
    }

    /// True when data exists but the filters removed all of it.
    pub fn is_filtered_out(&self) -> bool {
        self.available > 0 && self.matched == 0
    }
}

impl BrowseState {
    /// Creates a state on page 1 with no query and no category filter.
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            category: CategoryFilter::All,
            page: 1,
            page_size,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Sets the search query and resets to page 1.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    /// Sets the category filter and resets to page 1.
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.page = 1;
    }

    /// Clears both filters.
    pub fn clear_filters(&mut self) {
        self.query.clear();
        self.category = CategoryFilter::All;
        self.page = 1;
    }

    /// Moves to `page`, clamped to the pages available for `items`.
    pub fn set_page<T: Searchable>(&mut self, page: usize, items: &[T]) {
        let matched = apply_filters(items, &self.query, self.category).len();
        let total = total_pages(matched, self.page_size).max(1);
        self.page = page.clamp(1, total);
    }

    /// Filters `items` and slices out the current page.
    pub fn view<'a, T: Searchable>(&self, items: &'a [T]) -> PageView<'a, T> {
        let filtered = apply_filters(items, &self.query, self.category);
        let total = total_pages(filtered.len(), self.page_size);
        let page_items = paginate(&filtered, self.page, self.page_size).to_vec();

        PageView {
            items: page_items,
            matched: filtered.len(),
            available: items.len(),
            page: self.page,
            total_pages: total,
            markers: page_window(self.page, total),
        }
    }
}
