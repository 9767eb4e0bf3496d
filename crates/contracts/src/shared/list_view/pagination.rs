use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// 1-based page number with a fixed page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    /// A zero page size falls back to `DEFAULT_PAGE_SIZE`.
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: if page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `max(1, ceil(total / page_size))`
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Moves to `page`, clamped into `[1, total_pages]`.
    pub fn set_page(&mut self, page: usize, total: usize) {
        self.page = page.clamp(1, self.total_pages(total));
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        if page_size == 0 {
            return;
        }
        self.page_size = page_size;
        self.page = 1;
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Re-clamps the current page after the total changed.
    pub fn clamp(&mut self, total: usize) {
        self.set_page(self.page, total);
    }

    /// Index range of the current page within a collection of `total` items.
    pub fn range(&self, total: usize) -> std::ops::Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    /// Page buttons for a pager: first, last and the neighbours of the
    /// current page, with gaps collapsed into ellipses.
    pub fn links(&self, total: usize) -> Vec<PageLink> {
        let last = self.total_pages(total);
        let mut links = Vec::new();
        for n in 1..=last {
            if n == 1 || n == last || (n + 1 >= self.page && n <= self.page + 1) {
                links.push(PageLink::Page(n));
            } else if n + 2 == self.page || n == self.page + 2 {
                links.push(PageLink::Ellipsis);
            }
        }
        links
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_minimum_one() {
        let p = Pagination::new(10);
        assert_eq!(p.total_pages(0), 1);
        assert_eq!(p.total_pages(10), 1);
        assert_eq!(p.total_pages(11), 2);
        assert_eq!(p.total_pages(30), 3);
    }

    #[test]
    fn test_set_page_clamps() {
        let mut p = Pagination::new(2);
        p.set_page(7, 5);
        assert_eq!(p.page(), 3);
        p.set_page(0, 5);
        assert_eq!(p.page(), 1);
    }

    #[test]
    fn test_range_of_last_page() {
        let mut p = Pagination::new(2);
        p.set_page(3, 5);
        assert_eq!(p.range(5), 4..5);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut p = Pagination::new(2);
        p.set_page(2, 5);
        p.set_page_size(50);
        assert_eq!(p.page(), 1);
        assert_eq!(p.page_size(), 50);
        p.set_page_size(0);
        assert_eq!(p.page_size(), 50);
    }

    #[test]
    fn test_links_collapse_gaps() {
        use PageLink::*;
        let mut p = Pagination::new(10);
        p.set_page(5, 100);
        assert_eq!(
            p.links(100),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        p.set_page(1, 100);
        assert_eq!(p.links(100), vec![Page(1), Page(2), Ellipsis, Page(10)]);
        assert_eq!(Pagination::new(10).links(0), vec![Page(1)]);
    }
}
