//! Client-side pagination over an in-memory list.
//!
//! The paginator never owns the items; it only tracks the list length and the
//! 1-based current page, and hands out index ranges / slices on demand.

use std::ops::Range;

/// Rows shown per page.
pub const ROWS_PER_PAGE: usize = 10;

/// Page cursor over a list of `len` items.
///
/// Invariant: `1 <= current <= max(total_pages(), 1)`.  An empty list has zero
/// pages and the cursor rests on page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    len: usize,
    current: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(ROWS_PER_PAGE)
    }
}

impl Paginator {
    /// A paginator over an empty list.  `page_size` is raised to 1 if zero.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            len: 0,
            current: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn current_page(&self) -> usize {
        self.current
    }

    /// `ceil(len / page_size)`.
    pub fn total_pages(&self) -> usize {
        self.len.div_ceil(self.page_size)
    }

    /// Replace the list length and re-clamp the cursor.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.current = self.clamp(self.current);
    }

    /// Index range of the rows on the current page.
    pub fn page_range(&self) -> Range<usize> {
        let start = ((self.current - 1) * self.page_size).min(self.len);
        let end = (start + self.page_size).min(self.len);
        start..end
    }

    /// The rows of `items` on the current page.
    ///
    /// `items` is expected to have `len()` elements; a shorter slice is cut
    /// to what it holds.
    pub fn page_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.page_range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages()
    }

    /// Step back one page.  Returns `false` when already on the first page.
    pub fn prev(&mut self) -> bool {
        self.go_to(self.current.saturating_sub(1))
    }

    /// Step forward one page.  Returns `false` when already on the last page.
    pub fn next(&mut self) -> bool {
        self.go_to(self.current + 1)
    }

    pub fn first(&mut self) -> bool {
        self.go_to(1)
    }

    pub fn last(&mut self) -> bool {
        self.go_to(self.total_pages())
    }

    /// Jump to page `page`, clamped into range.  Returns whether the current
    /// page changed.
    pub fn go_to(&mut self, page: usize) -> bool {
        let target = self.clamp(page);
        let changed = target != self.current;
        self.current = target;
        changed
    }

    /// Page numbers to offer as buttons: a contiguous run of at most `max`
    /// pages that contains the current page, centred where the bounds allow.
    pub fn page_window(&self, max: usize) -> Range<usize> {
        let total = self.total_pages();
        if total == 0 || max == 0 {
            return 1..1;
        }
        let width = max.min(total);
        let half = (width - 1) / 2;
        let start = self
            .current
            .saturating_sub(half)
            .clamp(1, total - width + 1);
        start..start + width
    }

    fn clamp(&self, page: usize) -> usize {
        page.clamp(1, self.total_pages().max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_len(len: usize) -> Paginator {
        let mut p = Paginator::default();
        p.set_len(len);
        p
    }

    #[test]
    fn total_pages_is_ceiling() {
        for (len, pages) in [(0, 0), (1, 1), (9, 1), (10, 1), (11, 2), (20, 2), (46, 5)] {
            assert_eq!(with_len(len).total_pages(), pages, "len={len}");
        }
    }

    #[test]
    fn page_k_covers_its_rows() {
        let items: Vec<usize> = (0..46).collect();
        let mut p = with_len(items.len());

        p.go_to(3);
        assert_eq!(p.page_range(), 20..30);
        assert_eq!(p.page_slice(&items), &items[20..30]);

        p.go_to(5);
        assert_eq!(p.page_slice(&items), &items[40..46]);
    }

    #[test]
    fn prev_on_first_page_is_noop() {
        let mut p = with_len(25);
        assert!(!p.prev());
        assert_eq!(p.current_page(), 1);
        assert!(!p.has_prev());
    }

    #[test]
    fn next_on_last_page_is_noop() {
        let mut p = with_len(25);
        assert!(p.next());
        assert!(p.next());
        assert_eq!(p.current_page(), 3);
        assert!(!p.next());
        assert_eq!(p.current_page(), 3);
        assert!(!p.has_next());
    }

    #[test]
    fn go_to_clamps_both_ends() {
        let mut p = with_len(25);
        p.go_to(99);
        assert_eq!(p.current_page(), 3);
        p.go_to(0);
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn empty_list_stays_on_page_one() {
        let mut p = with_len(0);
        assert_eq!(p.current_page(), 1);
        assert!(!p.next());
        assert!(!p.last());
        assert!(!p.has_next());
        assert!(!p.has_prev());
        assert_eq!(p.page_range(), 0..0);
        assert!(p.page_slice::<u8>(&[]).is_empty());
    }

    #[test]
    fn shrinking_list_reclamps_cursor() {
        let mut p = with_len(100);
        p.go_to(8);
        p.set_len(35);
        assert_eq!(p.current_page(), 4);
    }

    #[test]
    fn early_page_request_is_clamped_when_list_arrives() {
        let mut p = Paginator::default();
        p.go_to(4);
        assert_eq!(p.current_page(), 1);
        p.set_len(50);
        assert!(p.go_to(4));
        assert_eq!(p.current_page(), 4);
    }

    #[test]
    fn first_and_last_jump_to_bounds() {
        let mut p = with_len(61);
        assert!(p.last());
        assert_eq!(p.current_page(), 7);
        assert!(p.first());
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn window_stays_centred_and_in_bounds() {
        let mut p = with_len(200);
        assert_eq!(p.page_window(5), 1..6);
        p.go_to(10);
        assert_eq!(p.page_window(5), 8..13);
        p.go_to(20);
        assert_eq!(p.page_window(5), 16..21);
        assert_eq!(p.page_window(50), 1..21);
        assert_eq!(with_len(0).page_window(5), 1..1);
    }

    #[test]
    fn zero_page_size_is_raised() {
        let mut p = Paginator::new(0);
        p.set_len(3);
        assert_eq!(p.total_pages(), 3);
    }
}
