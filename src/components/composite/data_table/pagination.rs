//! Pagination
//!
//! Page navigation for the DataTable. Pagination is a pure function of the
//! row count, page size and requested page.

use std::ops::Range;

/// `max(1, ceil(total_items / items_per_page))`; a page size of 0 means one page.
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 1;
    }
    total_items.div_ceil(items_per_page).max(1)
}

/// Resolved pagination for one view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page, clamped to `1..=total_pages`
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
}

impl Pagination {
    /// Resolve the requested page against the row count
    pub fn new(current_page: usize, total_items: usize, items_per_page: usize) -> Self {
        let total_pages = total_pages(total_items, items_per_page);
        Self {
            current_page: current_page.clamp(1, total_pages),
            total_pages,
            total_items,
            items_per_page,
        }
    }

    /// Index range of the visible rows
    pub fn range(&self) -> Range<usize> {
        if self.items_per_page == 0 {
            return 0..self.total_items;
        }
        let start = (self.current_page - 1) * self.items_per_page;
        let end = (start + self.items_per_page).min(self.total_items);
        start.min(end)..end
    }

    pub fn can_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Footer text, e.g. `120 items · page 3 / 3`
    pub fn label(&self, items_label: &str) -> String {
        format!(
            "{} {} · page {} / {}",
            self.total_items, items_label, self.current_page, self.total_pages
        )
    }

    /// 1-based, inclusive row numbers shown (`None` when empty)
    pub fn showing(&self) -> Option<(usize, usize)> {
        let range = self.range();
        if range.is_empty() {
            None
        } else {
            Some((range.start + 1, range.end))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_matches_ceiling_with_minimum_one() {
        for items_per_page in 1..=13 {
            for total in 0..=60 {
                let expected = std::cmp::max(1, (total + items_per_page - 1) / items_per_page);
                assert_eq!(total_pages(total, items_per_page), expected);
            }
        }
        assert_eq!(total_pages(0, 50), 1);
        assert_eq!(total_pages(500, 0), 1);
    }

    #[test]
    fn last_page_shows_remainder() {
        let pagination = Pagination::new(3, 120, 50);
        assert_eq!(pagination.total_pages, 3);
        assert_eq!(pagination.range(), 100..120);
        assert_eq!(pagination.showing(), Some((101, 120)));
        assert!(pagination.can_prev());
        assert!(!pagination.can_next());
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        assert_eq!(Pagination::new(9, 120, 50).current_page, 3);
        assert_eq!(Pagination::new(0, 120, 50).current_page, 1);
    }

    #[test]
    fn empty_dataset_has_one_empty_page() {
        let pagination = Pagination::new(1, 0, 50);
        assert_eq!(pagination.total_pages, 1);
        assert!(pagination.range().is_empty());
        assert_eq!(pagination.showing(), None);
        assert!(!pagination.can_prev() && !pagination.can_next());
    }

    #[test]
    fn zero_page_size_shows_everything() {
        let pagination = Pagination::new(1, 7, 0);
        assert_eq!(pagination.range(), 0..7);
        assert_eq!(pagination.label("rows"), "7 rows · page 1 / 1");
    }
}
