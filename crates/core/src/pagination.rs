//! Page-window arithmetic for article listings.

use serde::Serialize;

/// Articles per page when the caller does not ask for a size.
pub const POSTS_PER_PAGE: i64 = 6;

/// Upper bound on a caller-requested page size.
pub const MAX_PER_PAGE: i64 = 50;

/// Clamp a user-provided 1-based page number (default 1).
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Clamp a user-provided page size to `1..=MAX_PER_PAGE`.
pub fn clamp_per_page(per_page: Option<i64>) -> i64 {
    per_page.unwrap_or(POSTS_PER_PAGE).clamp(1, MAX_PER_PAGE)
}

/// Row offset of the first item on `page`.
///
/// Saturates for absurdly large page numbers, which then simply land past
/// the end of the listing.
pub fn page_offset(page: i64, per_page: i64) -> i64 {
    (page - 1).saturating_mul(per_page)
}

/// Number of pages needed for `total` items. An empty listing still has one
/// (empty) page.
pub fn total_pages(total: i64, per_page: i64) -> i64 {
    if total <= 0 {
        return 1;
    }
    (total + per_page - 1) / per_page
}

/// Navigation metadata returned alongside a page of summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page: i64,
    pub per_page: i64,
    pub total_count: i64,
    pub total_pages: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageInfo {
    pub fn new(page: i64, per_page: i64, total_count: i64) -> Self {
        let total_pages = total_pages(total_count, per_page);
        Self {
            page,
            per_page,
            total_count,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_page_defaults_and_floors() {
        assert_eq!(clamp_page(None), 1);
        assert_eq!(clamp_page(Some(0)), 1);
        assert_eq!(clamp_page(Some(-3)), 1);
        assert_eq!(clamp_page(Some(4)), 4);
    }

    #[test]
    fn clamp_per_page_bounds() {
        assert_eq!(clamp_per_page(None), POSTS_PER_PAGE);
        assert_eq!(clamp_per_page(Some(0)), 1);
        assert_eq!(clamp_per_page(Some(500)), MAX_PER_PAGE);
        assert_eq!(clamp_per_page(Some(10)), 10);
    }

    #[test]
    fn offsets_follow_page_number() {
        assert_eq!(page_offset(1, 6), 0);
        assert_eq!(page_offset(2, 6), 6);
        assert_eq!(page_offset(4, 6), 18);
        assert_eq!(page_offset(i64::MAX, 50), i64::MAX);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 6), 1);
        assert_eq!(total_pages(6, 6), 1);
        assert_eq!(total_pages(7, 6), 2);
        assert_eq!(total_pages(23, 6), 4);
    }

    #[test]
    fn page_info_navigation_flags() {
        let first = PageInfo::new(1, 6, 23);
        assert!(first.has_next);
        assert!(!first.has_prev);

        let last = PageInfo::new(4, 6, 23);
        assert!(!last.has_next);
        assert!(last.has_prev);

        let empty = PageInfo::new(1, 6, 0);
        assert_eq!(empty.total_pages, 1);
        assert!(!empty.has_next);
        assert!(!empty.has_prev);
    }
}
