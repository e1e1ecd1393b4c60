//! Search, category filtering, and pagination for list pages.

mod filter;
mod pagination;
mod state;

pub use filter::{apply_filters, filter_by_category, filter_by_query, Searchable};
pub use pagination::{
    page_window, paginate, total_pages, PageMarker, EVENTS_PER_PAGE, SERMONS_PER_PAGE,
};
pub use state::{BrowseState, PageView};
