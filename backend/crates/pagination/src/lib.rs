//! Page-number pagination primitives.
//!
//! Listings in the trivia backend are addressed by a 1-based page number and a
//! fixed page size. [`PageRequest`] validates that pair and translates it into
//! the offset/limit window a repository needs, while [`Page`] carries one
//! window of results together with the total row count so adapters can render
//! their envelopes.
//!
//! ```
//! use pagination::{Page, PageRequest};
//!
//! let request = PageRequest::new(2, 10)?;
//! assert_eq!(request.offset(), 10);
//!
//! let rows: Vec<u32> = (1..=25).collect();
//! let page = Page::new(request.slice(&rows).to_vec(), request, 25);
//! assert_eq!(page.items().first(), Some(&11));
//! assert_eq!(page.total(), 25);
//! # Ok::<(), pagination::PageRequestError>(())
//! ```

use serde::Serialize;

/// Page size used when callers do not configure one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Validation failures raised while building a [`PageRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PageRequestError {
    /// Page numbers are 1-based.
    #[error("page numbers start at 1")]
    ZeroPage,
    /// A page must hold at least one item.
    #[error("page size must be greater than zero")]
    ZeroPageSize,
}

/// A validated request for one page of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    /// Build a request for `page` (1-based) holding `per_page` items.
    ///
    /// # Errors
    ///
    /// Returns [`PageRequestError::ZeroPage`] when `page` is zero and
    /// [`PageRequestError::ZeroPageSize`] when `per_page` is zero.
    pub const fn new(page: u32, per_page: u32) -> Result<Self, PageRequestError> {
        if page == 0 {
            return Err(PageRequestError::ZeroPage);
        }
        if per_page == 0 {
            return Err(PageRequestError::ZeroPageSize);
        }
        Ok(Self { page, per_page })
    }

    /// The 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Number of items a full page holds.
    #[must_use]
    pub const fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Number of items preceding this page.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.per_page as u64
    }

    /// Maximum number of items on this page.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.per_page as u64
    }

    /// Cut this page out of an already loaded, ordered collection.
    ///
    /// Pages past the end yield an empty slice.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let len = items.len();
        let start = usize::try_from(self.offset()).map_or(len, |offset| offset.min(len));
        let end = usize::try_from(self.limit())
            .map_or(len, |limit| start.saturating_add(limit).min(len));
        items.get(start..end).unwrap_or_default()
    }
}

/// One page of results plus the size of the full listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    items: Vec<T>,
    request: PageRequest,
    total: u64,
}

impl<T> Page<T> {
    /// Wrap the items returned for `request` out of `total` rows.
    #[must_use]
    pub const fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            request,
            total,
        }
    }

    /// Items on this page.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Total number of rows in the listing, across all pages.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }
}
