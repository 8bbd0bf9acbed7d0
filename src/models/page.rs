//! Paginated result shape.

use serde::{Deserialize, Serialize};

/// A bounded slice of a result set plus total-count metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Rows on this page
    pub data: Vec<T>,
    /// Number of rows matching the query across all pages
    pub total: u64,
    /// Page size used to slice the result set
    pub per_page: u32,
    /// 1-based page number
    pub current_page: u32,
    /// Last page number, never less than 1
    pub last_page: u32,
}

impl<T> Page<T> {
    /// Creates a new Page, deriving `last_page` from the total and page size.
    pub fn new(data: Vec<T>, total: u64, per_page: u32, current_page: u32) -> Self {
        let last_page = if per_page == 0 {
            1
        } else {
            total.div_ceil(u64::from(per_page)).max(1) as u32
        };
        Self {
            data,
            total,
            per_page,
            current_page,
            last_page,
        }
    }

    /// Zero-based offset of the first row of `page` for the given page size.
    pub fn offset(page: u32, per_page: u32) -> u64 {
        u64::from(page.saturating_sub(1)) * u64::from(per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_page_rounds_up() {
        let page: Page<u8> = Page::new(vec![], 21, 10, 1);
        assert_eq!(page.last_page, 3);
    }

    #[test]
    fn test_last_page_empty_result() {
        let page: Page<u8> = Page::new(vec![], 0, 10, 1);
        assert_eq!(page.last_page, 1);
    }

    #[test]
    fn test_offset() {
        assert_eq!(Page::<u8>::offset(1, 10), 0);
        assert_eq!(Page::<u8>::offset(3, 10), 20);
    }
}
