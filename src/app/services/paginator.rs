//! Pagination over a filtered record sequence
//!
//! The page window is always derived, never stored: given the current
//! filtered length, the paginator yields a half-open index range. Whenever
//! the filtered sequence or the page size changes, the current page is
//! re-clamped into the valid range instead of going stale.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Bounds-checked page navigation over a sequence of known length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginator {
    page_size: usize,
    current_page: usize,
}

impl Paginator {
    /// Create a paginator starting on page 1
    ///
    /// A zero page size is a configuration error.
    pub fn new(page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(Error::configuration(
                "Page size must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            page_size,
            current_page: 1,
        })
    }

    /// The configured page size
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The current page (1-based)
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Total pages for a sequence of the given length, at least 1
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size).max(1)
    }

    /// Request a page change
    ///
    /// Accepted only when `1 <= page <= total_pages(len)`; otherwise the
    /// current page is left unchanged and `false` is returned. Out-of-range
    /// navigation is an expected interaction, not an error.
    pub fn set_page(&mut self, page: usize, len: usize) -> bool {
        if page >= 1 && page <= self.total_pages(len) {
            self.current_page = page;
            true
        } else {
            false
        }
    }

    /// Change the page size and re-clamp the current page
    pub fn set_page_size(&mut self, page_size: usize, len: usize) -> Result<()> {
        if page_size == 0 {
            return Err(Error::configuration(
                "Page size must be greater than 0".to_string(),
            ));
        }
        self.page_size = page_size;
        self.clamp(len);
        Ok(())
    }

    /// Clamp the current page into range for a (possibly new) length
    pub fn clamp(&mut self, len: usize) {
        let total = self.total_pages(len);
        if self.current_page > total {
            self.current_page = total;
        }
        if self.current_page == 0 {
            self.current_page = 1;
        }
    }

    /// Return to page 1
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Half-open index window of the current page
    pub fn window(&self, len: usize) -> std::ops::Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(len);
        let end = (start + self.page_size).min(len);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_page_size_is_rejected() {
        assert!(Paginator::new(0).is_err());
        let mut pager = Paginator::new(10).unwrap();
        assert!(pager.set_page_size(0, 23).is_err());
        assert_eq!(pager.page_size(), 10);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let pager = Paginator::new(10).unwrap();
        assert_eq!(pager.total_pages(23), 3);
        assert_eq!(pager.total_pages(30), 3);
        assert_eq!(pager.total_pages(31), 4);
        assert_eq!(pager.total_pages(1), 1);
    }

    #[test]
    fn test_empty_sequence_still_has_one_page() {
        let pager = Paginator::new(10).unwrap();
        assert_eq!(pager.total_pages(0), 1);
        assert_eq!(pager.window(0), 0..0);
    }

    #[test]
    fn test_last_page_window_is_partial() {
        // 23 records at 10 per page: 3 pages, page 3 holds records 21-23
        let mut pager = Paginator::new(10).unwrap();
        assert!(pager.set_page(3, 23));
        assert_eq!(pager.window(23), 20..23);
        assert_eq!(pager.window(23).len(), 3);
    }

    #[test]
    fn test_full_page_window() {
        let mut pager = Paginator::new(10).unwrap();
        assert!(pager.set_page(2, 23));
        assert_eq!(pager.window(23), 10..20);
    }

    #[test]
    fn test_out_of_range_navigation_is_ignored() {
        let mut pager = Paginator::new(10).unwrap();
        assert!(pager.set_page(2, 23));

        assert!(!pager.set_page(0, 23));
        assert_eq!(pager.current_page(), 2);

        assert!(!pager.set_page(4, 23));
        assert_eq!(pager.current_page(), 2);
    }

    #[test]
    fn test_page_size_change_reclamps_current_page() {
        let mut pager = Paginator::new(10).unwrap();
        assert!(pager.set_page(3, 23));

        // 23 records at 25 per page collapse to one page
        pager.set_page_size(25, 23).unwrap();
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.window(23), 0..23);
    }

    #[test]
    fn test_shrinking_sequence_reclamps_current_page() {
        let mut pager = Paginator::new(10).unwrap();
        assert!(pager.set_page(3, 23));

        // The filtered view shrank under the pager
        pager.clamp(5);
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.window(5), 0..5);
    }

    #[test]
    fn test_reset_returns_to_first_page() {
        let mut pager = Paginator::new(10).unwrap();
        assert!(pager.set_page(2, 40));
        pager.reset();
        assert_eq!(pager.current_page(), 1);
    }
}
