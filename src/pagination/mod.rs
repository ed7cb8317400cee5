//! Generic pagination over ordered collections
//!
//! Used identically for blog posts and shows: filtering (by tag) always
//! happens before pagination, never against an already-paginated slice.

use serde::Serialize;

/// One page of an ordered collection.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    /// The slice of items on this page.
    pub items: Vec<T>,
    /// The page actually returned, clamped into valid range.
    pub current_page: usize,
    /// Total number of pages (0 when there are no valid pages).
    pub total_pages: usize,
    /// Total number of items before slicing.
    pub total_items: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// Slice `items` into the requested page.
///
/// The requested page is clamped to `[1, max(1, total_pages)]`, so page 0
/// and an overshooting page number both return a valid page. A `page_size`
/// of zero means there are no valid pages: `total_pages` is 0 and the
/// slice is empty.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let total_items = items.len();
    let total_pages = if page_size == 0 {
        0
    } else {
        total_items.div_ceil(page_size)
    };

    let current_page = page.clamp(1, total_pages.max(1));

    let page_items = if total_pages == 0 {
        Vec::new()
    } else {
        let start = (current_page - 1) * page_size;
        let end = (start + page_size).min(total_items);
        items[start..end].to_vec()
    };

    Page {
        items: page_items,
        current_page,
        total_pages,
        total_items,
        has_next_page: current_page < total_pages,
        has_prev_page: current_page > 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forty_five_items_across_three_pages() {
        let items: Vec<usize> = (0..45).collect();

        let first = paginate(&items, 1, 20);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.total_items, 45);
        assert_eq!(first.items.len(), 20);
        assert!(!first.has_prev_page);
        assert!(first.has_next_page);

        let last = paginate(&items, 3, 20);
        assert_eq!(last.items.len(), 5);
        assert!(last.has_prev_page);
        assert!(!last.has_next_page);
    }

    #[test]
    fn test_out_of_range_pages_clamp() {
        let items: Vec<usize> = (0..45).collect();

        let low = paginate(&items, 0, 20);
        assert_eq!(low.current_page, 1);
        assert_eq!(low.items[0], 0);

        let high = paginate(&items, 999, 20);
        assert_eq!(high.current_page, 3);
        assert_eq!(high.items, vec![40, 41, 42, 43, 44]);
    }

    #[test]
    fn test_pages_reconstruct_input() {
        let items: Vec<usize> = (0..47).collect();
        let total = paginate(&items, 1, 10).total_pages;

        let mut rebuilt = Vec::new();
        for page in 1..=total {
            rebuilt.extend(paginate(&items, page, 10).items);
        }
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn test_zero_page_size() {
        let items = vec![1, 2, 3];
        let page = paginate(&items, 1, 0);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.current_page, 1);
        assert!(page.items.is_empty());
        assert!(!page.has_next_page);
        assert!(!page.has_prev_page);
    }

    #[test]
    fn test_empty_input() {
        let items: Vec<u8> = Vec::new();
        let page = paginate(&items, 5, 20);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_items, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_exact_multiple_has_no_phantom_page() {
        let items: Vec<usize> = (0..40).collect();
        let page = paginate(&items, 2, 20);
        assert_eq!(page.total_pages, 2);
        assert!(!page.has_next_page);
    }
}
