use serde::Serialize;
use std::ops::RangeInclusive;

/// How many page links surround the current page on either side.
const PAGE_LINK_RADIUS: usize = 2;

/// Display window over an already ranked sequence. The engine always ranks
/// everything; paging is purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub start: usize,
}

impl PageWindow {
    /// Pages are 1-based; anything below 1 is treated as the first page.
    pub fn new(page: usize, per_page: usize, total_items: usize) -> Self {
        let page = page.max(1);
        let per_page = per_page.max(1);

        Self {
            page,
            per_page,
            total_items,
            total_pages: total_items.div_ceil(per_page),
            start: (page - 1).saturating_mul(per_page),
        }
    }

    /// Same as [`PageWindow::new`] for a signed page number taken from a
    /// query or request body.
    pub fn from_requested(page: i64, per_page: usize, total_items: usize) -> Self {
        let page = usize::try_from(page.max(1)).unwrap_or(usize::MAX);
        Self::new(page, per_page, total_items)
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        match items.get(self.start..) {
            Some(rest) => rest.get(..self.per_page).unwrap_or(rest),
            None => &[],
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Up to five page numbers centred on the current one.
    pub fn visible_pages(&self) -> RangeInclusive<usize> {
        let first = self.page.saturating_sub(PAGE_LINK_RADIUS).max(1);
        let last = self.total_pages.min(self.page.saturating_add(PAGE_LINK_RADIUS));
        first..=last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_into_pages_of_ten() {
        let items: Vec<usize> = (0..23).collect();
        let first = PageWindow::new(1, 10, items.len());
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.slice(&items), &items[..10]);

        let last = PageWindow::new(3, 10, items.len());
        assert_eq!(last.start, 20);
        assert_eq!(last.slice(&items), &[20, 21, 22]);
        assert!(last.has_previous());
        assert!(!last.has_next());
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items = [1, 2, 3];
        let window = PageWindow::new(4, 2, items.len());
        assert!(window.slice(&items).is_empty());
    }

    #[test]
    fn non_positive_pages_clamp_to_first() {
        let window = PageWindow::from_requested(-3, 10, 5);
        assert_eq!(window.page, 1);
        assert_eq!(window.start, 0);
        assert!(!window.has_previous());
    }

    #[test]
    fn empty_sequence_has_no_pages() {
        let window = PageWindow::new(1, 10, 0);
        assert_eq!(window.total_pages, 0);
        assert!(window.slice::<u8>(&[]).is_empty());
        assert!(window.visible_pages().is_empty());
    }

    #[test]
    fn visible_pages_window_around_current() {
        assert_eq!(PageWindow::new(5, 10, 100).visible_pages(), 3..=7);
        assert_eq!(PageWindow::new(1, 10, 100).visible_pages(), 1..=3);
        assert_eq!(PageWindow::new(10, 10, 100).visible_pages(), 8..=10);
    }
}
