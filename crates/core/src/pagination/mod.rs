//! Page cursor and the windowing function.
//!
//! A single cursor is shared by every query on a service: switching from the
//! full listing to a search or a year filter does not reset it.

mod types;

pub use types::*;

use tracing::debug;

/// Pagination state: page size (always >= 1) and zero-based page index.
///
/// The index has no upper bound at mutation time. Whether it fits a given
/// sequence is only checked when a window is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page_size: usize,
    page_index: usize,
}

impl PageCursor {
    /// Create a cursor at page 0. A zero page size is raised to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            page_index: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Move to the next page. Never fails; a later window may.
    pub fn next_page(&mut self) {
        self.page_index = self.page_index.saturating_add(1);
    }

    /// Move to the previous page, stopping at page 0.
    pub fn previous_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    /// Jump straight to `page_index`.
    pub fn set_page_index(&mut self, page_index: usize) {
        self.page_index = page_index;
    }

    /// Set the page size. Anything below 1 (including negatives) becomes 1.
    pub fn set_page_size(&mut self, page_size: i64) {
        self.page_size = usize::try_from(page_size.max(1)).unwrap_or(usize::MAX);
    }

    /// Return the page of `items` visible at this cursor.
    ///
    /// With `n = items.len()`, `p = page_size`, `i = page_index`:
    /// - `i < n / p` (exact division, i.e. `i * p < n`): `items[i*p .. min(i*p + p, n)]`
    /// - `i == 0` and `n < p`: all of `items` (covers the empty sequence)
    /// - otherwise: [`PageError::OutOfRange`]
    pub fn window<'a, T>(&self, items: &'a [T]) -> Result<&'a [T], PageError> {
        let len = items.len();
        let out_of_range = PageError::OutOfRange {
            page_index: self.page_index,
            page_size: self.page_size,
            len,
        };

        match self.page_index.checked_mul(self.page_size) {
            Some(first) if first < len => {
                let last = first.saturating_add(self.page_size).min(len);
                Ok(&items[first..last])
            }
            _ if self.page_index == 0 && len < self.page_size => Ok(items),
            _ => {
                debug!(
                    page_index = self.page_index,
                    page_size = self.page_size,
                    len,
                    "Page window out of range"
                );
                Err(out_of_range)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    fn cursor_at(page_size: usize, page_index: usize) -> PageCursor {
        let mut cursor = PageCursor::new(page_size);
        cursor.set_page_index(page_index);
        cursor
    }

    #[test]
    fn test_window_first_page() {
        let items = numbers(100);
        let window = cursor_at(10, 0).window(&items).unwrap();
        assert_eq!(window, &items[0..10]);
    }

    #[test]
    fn test_window_middle_page() {
        let items = numbers(100);
        let window = cursor_at(10, 4).window(&items).unwrap();
        assert_eq!(window, &items[40..50]);
    }

    #[test]
    fn test_window_partial_last_page() {
        let items = numbers(25);
        let window = cursor_at(10, 2).window(&items).unwrap();
        assert_eq!(window, &items[20..25]);
        assert_eq!(window.len(), 5);
    }

    #[test]
    fn test_window_past_evenly_divided_end_fails() {
        let items = numbers(30);
        let result = cursor_at(10, 3).window(&items);
        assert_eq!(
            result,
            Err(PageError::OutOfRange {
                page_index: 3,
                page_size: 10,
                len: 30
            })
        );
    }

    #[test]
    fn test_window_higher_than_maximum_page_index() {
        let items = numbers(70);
        assert!(cursor_at(10, 8).window(&items).is_err());
    }

    #[test]
    fn test_window_short_sequence_returns_everything() {
        let items = numbers(5);
        let window = cursor_at(10, 0).window(&items).unwrap();
        assert_eq!(window, &items[..]);
    }

    #[test]
    fn test_window_short_sequence_beyond_first_page_fails() {
        let items = numbers(5);
        assert!(cursor_at(10, 1).window(&items).is_err());
    }

    #[test]
    fn test_window_empty_sequence() {
        let items: Vec<usize> = Vec::new();
        assert!(cursor_at(10, 0).window(&items).unwrap().is_empty());
        assert!(cursor_at(1, 0).window(&items).unwrap().is_empty());
        assert!(cursor_at(10, 1).window(&items).is_err());
    }

    #[test]
    fn test_window_exact_page_size_sequence() {
        let items = numbers(10);
        assert_eq!(cursor_at(10, 0).window(&items).unwrap(), &items[..]);
        assert!(cursor_at(10, 1).window(&items).is_err());
    }

    #[test]
    fn test_window_every_valid_index_matches_slice() {
        for len in 0..40usize {
            for page_size in 1..12usize {
                for page_index in 0..(len / page_size + 2) {
                    let items = numbers(len);
                    let result = cursor_at(page_size, page_index).window(&items);
                    let first = page_index * page_size;
                    if first < len {
                        let last = (first + page_size).min(len);
                        assert_eq!(result.unwrap(), &items[first..last]);
                    } else if page_index == 0 && len < page_size {
                        assert_eq!(result.unwrap(), &items[..]);
                    } else {
                        assert!(result.is_err(), "len={len} p={page_size} i={page_index}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_window_huge_index_does_not_overflow() {
        let items = numbers(10);
        assert!(cursor_at(10, usize::MAX).window(&items).is_err());
    }

    #[test]
    fn test_next_page_increments() {
        let mut cursor = cursor_at(10, 1);
        cursor.next_page();
        assert_eq!(cursor.page_index(), 2);
    }

    #[test]
    fn test_previous_page_decrements() {
        let mut cursor = cursor_at(10, 3);
        cursor.previous_page();
        assert_eq!(cursor.page_index(), 2);
    }

    #[test]
    fn test_previous_page_not_going_to_negative() {
        let mut cursor = cursor_at(10, 0);
        cursor.previous_page();
        cursor.previous_page();
        assert_eq!(cursor.page_index(), 0);
    }

    #[test]
    fn test_set_page_size() {
        let mut cursor = PageCursor::new(5);
        cursor.set_page_size(10);
        assert_eq!(cursor.page_size(), 10);
    }

    #[test]
    fn test_set_page_size_with_non_positive_numbers() {
        let mut cursor = PageCursor::new(5);
        cursor.set_page_size(-10);
        assert_eq!(cursor.page_size(), 1);
        cursor.set_page_size(0);
        assert_eq!(cursor.page_size(), 1);
    }

    #[test]
    fn test_new_with_zero_page_size() {
        assert_eq!(PageCursor::new(0).page_size(), 1);
    }

    #[test]
    fn test_set_page_size_keeps_page_index() {
        let mut cursor = cursor_at(10, 3);
        cursor.set_page_size(2);
        assert_eq!(cursor.page_index(), 3);
    }
}
