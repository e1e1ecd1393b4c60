use serde::{Deserialize, Serialize};

/// Sermons shown per page.
pub const SERMONS_PER_PAGE: usize = 12;

/// Events shown per page.
pub const EVENTS_PER_PAGE: usize = 20;

/// One entry in the page-number bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "page", rename_all = "snake_case")]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

/// Number of pages needed for `len` items.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Returns the items on a 1-based page.
///
/// Page 0 is treated as page 1; pages past the end are empty.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page_size == 0 {
        return &[];
    }
    let start = page.max(1).saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Page numbers to display: first, last, current and its neighbours.
///
/// A gap of exactly one page shows that page; larger gaps become a single
/// ellipsis.
pub fn page_window(current: usize, total: usize) -> Vec<PageMarker> {
    if total == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);

    let mut shown: Vec<usize> = vec![1, current.saturating_sub(1), current, current + 1, total]
        .into_iter()
        .filter(|page| (1..=total).contains(page))
        .collect();
    shown.sort_unstable();
    shown.dedup();

    let mut markers = Vec::with_capacity(shown.len() + 2);
    let mut previous: Option<usize> = None;
    for page in shown {
        if let Some(prev) = previous {
            match page - prev {
                1 => {}
                2 => markers.push(PageMarker::Page(prev + 1)),
                _ => markers.push(PageMarker::Ellipsis),
            }
        }
        markers.push(PageMarker::Page(page));
        previous = Some(page);
    }
    markers
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageMarker::{Ellipsis, Page};

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 12), 0);
        assert_eq!(total_pages(1, 12), 1);
        assert_eq!(total_pages(12, 12), 1);
        assert_eq!(total_pages(13, 12), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_paginate_slices() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(paginate(&items, 1, 12), &items[0..12]);
        assert_eq!(paginate(&items, 2, 12), &items[12..24]);
        assert_eq!(paginate(&items, 3, 12), &[25u32]);
        assert!(paginate(&items, 4, 12).is_empty());
        assert_eq!(paginate(&items, 0, 12), &items[0..12]);
    }

    #[test]
    fn test_pages_partition_the_list() {
        for len in [0usize, 1, 11, 12, 13, 24, 25, 100] {
            for size in [1usize, 5, 12, 20] {
                let items: Vec<usize> = (0..len).collect();
                let pages = total_pages(len, size);

                let mut seen = Vec::new();
                for page in 1..=pages {
                    let slice = paginate(&items, page, size);
                    assert!(!slice.is_empty() && slice.len() <= size);
                    seen.extend_from_slice(slice);
                }
                assert_eq!(seen, items, "len={len} size={size}");
            }
        }
    }

    #[test]
    fn test_page_window_small_totals() {
        assert!(page_window(1, 0).is_empty());
        assert_eq!(page_window(1, 1), vec![Page(1)]);
        assert_eq!(page_window(1, 3), vec![Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn test_page_window_ellipsis_on_both_sides() {
        assert_eq!(
            page_window(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_page_window_single_page_gap_is_shown() {
        // 1 _ 3 4 5: page 2 fills a one-page gap.
        assert_eq!(
            page_window(4, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_window(7, 9),
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9)]
        );
    }

    #[test]
    fn test_page_window_edges() {
        assert_eq!(page_window(1, 10), vec![Page(1), Page(2), Ellipsis, Page(10)]);
        assert_eq!(page_window(10, 10), vec![Page(1), Ellipsis, Page(9), Page(10)]);
        // Out-of-range current is clamped.
        assert_eq!(page_window(99, 3), vec![Page(1), Page(2), Page(3)]);
    }
}
