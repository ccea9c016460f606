use std::num::IntErrorKind;

use serde::Serialize;

/// Posts per listing page.
pub const PAGE_SIZE: u64 = 10;

/// Resolved position of one page inside a listing of `count` items.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub number: u64,
    pub num_pages: u64,
    pub count: u64,
    pub per_page: u64,
}

impl PageWindow {
    /// Resolves a raw `?page=` value. Missing or unparsable values give the
    /// first page, `"last"` the last one, and out-of-range numbers clamp to
    /// the nearest valid page. An empty listing still has one page.
    pub fn resolve(requested: Option<&str>, count: u64, per_page: u64) -> Self {
        let per_page = per_page.max(1);
        let num_pages = count.div_ceil(per_page).max(1);

        let number = match requested.map(str::trim) {
            Some("last") => num_pages,
            Some(raw) => match raw.parse::<i64>() {
                Ok(n) if n < 1 => 1,
                Ok(n) => (n as u64).min(num_pages),
                Err(e) if *e.kind() == IntErrorKind::PosOverflow => num_pages,
                Err(_) => 1,
            },
            None => 1,
        };

        Self {
            number,
            num_pages,
            count,
            per_page,
        }
    }

    pub fn offset(&self) -> u64 {
        (self.number - 1) * self.per_page
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn into_page<T>(self, items: Vec<T>) -> Page<T> {
        Page {
            items,
            number: self.number,
            num_pages: self.num_pages,
            count: self.count,
            has_next: self.has_next(),
            has_previous: self.has_previous(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: u64,
    pub num_pages: u64,
    pub count: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            number: self.number,
            num_pages: self.num_pages,
            count: self.count,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_page_is_first() {
        let w = PageWindow::resolve(None, 35, PAGE_SIZE);
        assert_eq!(w.number, 1);
        assert_eq!(w.num_pages, 4);
        assert_eq!(w.offset(), 0);
        assert!(w.has_next());
        assert!(!w.has_previous());
    }

    #[test]
    fn test_page_beyond_last_clamps_to_last() {
        let w = PageWindow::resolve(Some("99"), 35, PAGE_SIZE);
        assert_eq!(w.number, 4);
        assert_eq!(w.offset(), 30);
        assert!(!w.has_next());
        assert!(w.has_previous());
    }

    #[test]
    fn test_overflowing_page_number_clamps_to_last() {
        assert_eq!(PageWindow::resolve(Some("99999999999999999999"), 35, PAGE_SIZE).number, 4);
        assert_eq!(PageWindow::resolve(Some("-99999999999999999999"), 35, PAGE_SIZE).number, 1);
    }

    #[test]
    fn test_page_below_one_clamps_to_first() {
        assert_eq!(PageWindow::resolve(Some("0"), 35, PAGE_SIZE).number, 1);
        assert_eq!(PageWindow::resolve(Some("-3"), 35, PAGE_SIZE).number, 1);
    }

    #[test]
    fn test_garbage_page_is_first() {
        assert_eq!(PageWindow::resolve(Some("abc"), 35, PAGE_SIZE).number, 1);
        assert_eq!(PageWindow::resolve(Some(""), 35, PAGE_SIZE).number, 1);
    }

    #[test]
    fn test_last_keyword() {
        assert_eq!(PageWindow::resolve(Some("last"), 21, PAGE_SIZE).number, 3);
    }

    #[test]
    fn test_empty_listing_has_one_page() {
        let w = PageWindow::resolve(Some("5"), 0, PAGE_SIZE);
        assert_eq!(w.number, 1);
        assert_eq!(w.num_pages, 1);
        assert!(!w.has_next());
        assert!(!w.has_previous());
    }

    #[test]
    fn test_exact_multiple_of_page_size() {
        let w = PageWindow::resolve(Some("2"), 20, PAGE_SIZE);
        assert_eq!(w.num_pages, 2);
        assert_eq!(w.offset(), 10);
        assert!(!w.has_next());
    }

    #[test]
    fn test_into_page_carries_metadata() {
        let page = PageWindow::resolve(Some("2"), 25, PAGE_SIZE).into_page(vec![1, 2, 3]);
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.number, 2);
        assert!(page.has_next);
        assert!(page.has_previous);

        let mapped = page.map(|n| n * 10);
        assert_eq!(mapped.items, vec![10, 20, 30]);
        assert_eq!(mapped.num_pages, 3);
    }
}
