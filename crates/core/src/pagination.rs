//! Page-number pagination used by the doubt history endpoint.
//!
//! The history contract is forgiving: malformed or out-of-range `page` /
//! `page_size` values silently fall back to defaults instead of producing a
//! 400. Handlers therefore receive the raw query strings and resolve them
//! here rather than letting the extractor reject the request.

/// Default number of rows per history page.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Maximum number of rows per history page.
pub const MAX_PAGE_SIZE: i64 = 100;

/// A resolved pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based page number, always >= 1.
    pub page: i64,
    /// Rows per page, always in `[1, MAX_PAGE_SIZE]`.
    pub page_size: i64,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageWindow {
    /// Resolve raw query-string values into a valid window.
    ///
    /// - `page`: defaults to 1; non-numeric or < 1 falls back to 1.
    /// - `page_size`: defaults to [`DEFAULT_PAGE_SIZE`]; non-numeric or
    ///   outside `[1, MAX_PAGE_SIZE]` falls back to the default.
    pub fn from_raw(page: Option<&str>, page_size: Option<&str>) -> Self {
        let page = match page.map(str::parse::<i64>) {
            Some(Ok(p)) if p >= 1 => p,
            _ => 1,
        };
        let page_size = match page_size.map(str::parse::<i64>) {
            Some(Ok(s)) if (1..=MAX_PAGE_SIZE).contains(&s) => s,
            _ => DEFAULT_PAGE_SIZE,
        };
        Self { page, page_size }
    }

    /// Row offset of the first item on this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }

    /// Exclusive end index of the slice, `page * page_size`.
    ///
    /// `has_more` is defined against this bound, not against the number of
    /// rows actually returned.
    pub fn slice_end(&self) -> i64 {
        self.page * self.page_size
    }

    /// Whether rows exist beyond this page.
    pub fn has_more(&self, total: i64) -> bool {
        self.slice_end() < total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_absent() {
        let w = PageWindow::from_raw(None, None);
        assert_eq!(w, PageWindow::default());
    }

    #[test]
    fn valid_values_pass_through() {
        let w = PageWindow::from_raw(Some("3"), Some("50"));
        assert_eq!(w.page, 3);
        assert_eq!(w.page_size, 50);
        assert_eq!(w.offset(), 100);
    }

    #[test]
    fn non_numeric_falls_back_to_defaults() {
        let w = PageWindow::from_raw(Some("abc"), Some("ten"));
        assert_eq!(w, PageWindow::default());
    }

    #[test]
    fn page_floored_at_one() {
        assert_eq!(PageWindow::from_raw(Some("0"), None).page, 1);
        assert_eq!(PageWindow::from_raw(Some("-5"), None).page, 1);
    }

    #[test]
    fn page_size_out_of_range_falls_back() {
        assert_eq!(
            PageWindow::from_raw(None, Some("0")).page_size,
            DEFAULT_PAGE_SIZE
        );
        assert_eq!(
            PageWindow::from_raw(None, Some("101")).page_size,
            DEFAULT_PAGE_SIZE
        );
    }

    #[test]
    fn page_size_boundaries_accepted() {
        assert_eq!(PageWindow::from_raw(None, Some("1")).page_size, 1);
        assert_eq!(PageWindow::from_raw(None, Some("100")).page_size, 100);
    }

    #[test]
    fn has_more_against_slice_end() {
        let w = PageWindow {
            page: 2,
            page_size: 10,
        };
        // Slice covers rows [10, 20).
        assert!(w.has_more(21));
        assert!(!w.has_more(20));
        assert!(!w.has_more(15));
    }

    #[test]
    fn has_more_on_empty_table() {
        assert!(!PageWindow::default().has_more(0));
    }
}
