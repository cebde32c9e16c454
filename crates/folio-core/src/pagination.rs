//! Pagination types for list operations.

use serde::{Deserialize, Serialize};

/// A request for a page of results, as clients express it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// The page number (1-indexed).
    pub page: i64,
    /// The number of items per page. Negative means "no limit".
    pub limit: i64,
}

impl PageRequest {
    /// The default page size.
    pub const DEFAULT_LIMIT: i64 = 20;
    /// The first page.
    pub const FIRST_PAGE: i64 = 1;

    /// Creates a new page request.
    ///
    /// A zero limit falls back to [`Self::DEFAULT_LIMIT`] and a page below
    /// one falls back to [`Self::FIRST_PAGE`].
    #[must_use]
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: if page < Self::FIRST_PAGE { Self::FIRST_PAGE } else { page },
            limit: if limit == 0 { Self::DEFAULT_LIMIT } else { limit },
        }
    }

    /// Creates a page request for the first page with default size.
    #[must_use]
    pub fn first() -> Self {
        Self::new(Self::FIRST_PAGE, Self::DEFAULT_LIMIT)
    }

    /// Returns the zero-based row window for database queries.
    #[must_use]
    pub fn window(&self) -> PageWindow {
        PageWindow::new(self.limit, (self.page - 1).saturating_mul(self.limit))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// A `(limit, offset)` row window.
///
/// `limit <= 0` is the "no limit" sentinel: every matching row is returned
/// and the offset is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    pub limit: i64,
    pub offset: i64,
}

impl PageWindow {
    /// Creates a new window.
    #[must_use]
    pub const fn new(limit: i64, offset: i64) -> Self {
        Self { limit, offset }
    }

    /// A window returning every row.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(0, 0)
    }

    /// Returns true if the window restricts the number of rows.
    #[must_use]
    pub const fn is_bounded(&self) -> bool {
        self.limit > 0
    }
}

/// A page of results together with the total number of matching rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    pub content: Vec<T>,
    /// The number of rows matching the filter, independent of the window.
    pub total_elements: u64,
    /// The window this page was fetched with.
    pub window: PageWindow,
}

impl<T> Page<T> {
    /// Creates a new page.
    #[must_use]
    pub fn new(content: Vec<T>, total_elements: u64, window: PageWindow) -> Self {
        Self {
            content,
            total_elements,
            window,
        }
    }

    /// Creates an empty page.
    #[must_use]
    pub fn empty(window: PageWindow) -> Self {
        Self::new(Vec::new(), 0, window)
    }

    /// Maps the page content to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            window: self.window,
        }
    }

    /// Returns true if the page is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.into_iter()
    }
}
