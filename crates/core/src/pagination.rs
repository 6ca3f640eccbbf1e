//! Page metadata for listing responses.

use serde::Serialize;

/// Computed page window attached to listing responses.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u64,
    pub size: u64,
    pub pages: u64,
    pub total: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Listing payload: one window of results plus its page metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub result: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Compute page metadata from the total row count and the requested window.
///
/// Requires `page >= 1` and `size >= 1`; callers validate this before
/// reaching here (see the listing extractor in `enigma-api`).
///
/// `has_next` and `has_previous` are derived from `total`, `page` and `size`
/// only, never from how many rows the query actually returned.
///
/// `has_next` is `total > page * size`: rows remain after the current
/// window. Counting rows before the window (`total > (page - 1) * size`)
/// would report a next page while on the last one.
pub fn paginate(total: u64, page: u64, size: u64) -> PaginationMeta {
    debug_assert!(page >= 1, "page is 1-based");
    debug_assert!(size >= 1, "size must be positive");

    let pages = if total == 0 { 0 } else { total.div_ceil(size) };

    PaginationMeta {
        page,
        size,
        pages,
        total,
        has_next: total > page.saturating_mul(size),
        has_previous: page > 1 && total > 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn last_partial_page() {
        let meta = paginate(45, 3, 20);
        assert_eq!(meta.pages, 3);
        assert!(!meta.has_next);
        assert!(meta.has_previous);
    }

    #[test]
    fn empty_listing() {
        let meta = paginate(0, 1, 20);
        assert_eq!(meta.pages, 0);
        assert!(!meta.has_next);
        assert!(!meta.has_previous);
    }

    #[test]
    fn first_page_of_many() {
        let meta = paginate(45, 1, 20);
        assert_eq!(meta.pages, 3);
        assert!(meta.has_next);
        assert!(!meta.has_previous);
    }

    #[test]
    fn exact_multiple_boundary() {
        // Page 2 of 40/20 is the last page: nothing remains after it.
        let last = paginate(40, 2, 20);
        assert_eq!(last.pages, 2);
        assert!(!last.has_next);
        assert!(last.has_previous);

        // One row past the boundary opens a third page.
        let spill = paginate(41, 2, 20);
        assert_eq!(spill.pages, 3);
        assert!(spill.has_next);
    }

    #[test]
    fn last_page_never_reports_next() {
        // Rows exist before page 2, but none after it.
        let meta = paginate(21, 2, 20);
        assert_eq!(meta.pages, 2);
        assert!(!meta.has_next);

        let meta = paginate(20, 1, 20);
        assert_eq!(meta.pages, 1);
        assert!(!meta.has_next);
    }

    #[test]
    fn page_past_the_end_is_reported_arithmetically() {
        // The query for page 5 returns zero rows, but the metadata is
        // still derived from the total alone.
        let meta = paginate(45, 5, 20);
        assert_eq!(meta.pages, 3);
        assert!(!meta.has_next);
        assert!(meta.has_previous);
    }

    #[test]
    fn page_beyond_empty_listing_has_no_previous() {
        let meta = paginate(0, 4, 10);
        assert!(!meta.has_previous);
        assert!(!meta.has_next);
    }

    #[test]
    fn serializes_camel_case() {
        let page = Page {
            result: vec![1, 2],
            pagination: paginate(2, 1, 20),
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "result": [1, 2],
                "pagination": {
                    "page": 1,
                    "size": 20,
                    "pages": 1,
                    "total": 2,
                    "hasNext": false,
                    "hasPrevious": false,
                }
            })
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: pages is the ceiling of total/size, and zero iff total is zero.
        #[test]
        fn pages_is_ceiling(total in 0u64..1_000_000, page in 1u64..10_000, size in 1u64..1_000) {
            let meta = paginate(total, page, size);
            prop_assert_eq!(meta.pages == 0, total == 0);
            prop_assert!(meta.pages * size >= total);
            if meta.pages > 0 {
                prop_assert!((meta.pages - 1) * size < total);
            }
        }

        /// Property: the flags depend only on the arithmetic inputs.
        #[test]
        fn flags_follow_formula(
            total in 0u64..1_000_000,
            page in 1u64..10_000,
            size in 1u64..1_000,
        ) {
            let meta = paginate(total, page, size);
            prop_assert_eq!(meta.has_previous, page > 1 && total > 0);
            prop_assert_eq!(meta.has_next, total > page * size);
            prop_assert_eq!(meta.has_next, page < meta.pages);
        }
    }
}
