//! Page-count arithmetic shared by both envelope designs.
//!
//! `total_pages = ceil(total_items / page_size)`, computed with floating-point
//! division. The designs disagree on a non-positive page size:
//! [`BasicResponse`](crate::BasicResponse) short-circuits to zero pages,
//! while the literal division of the detailed design has no guard. Both
//! behaviors are available through [`PageSizeMode`].

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// How a non-positive page size is handled when deriving the page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSizeMode {
    /// `page_size <= 0` yields zero pages and no division is attempted.
    #[default]
    Guarded,
    /// Divide unconditionally.
    ///
    /// The float-to-integer cast saturates, so `n / 0` with `n > 0` yields
    /// `i64::MAX`, `0 / 0` yields `0` and negative sizes yield non-positive
    /// counts. Kept only to reproduce the unguarded behavior in tests.
    Unguarded,
}

impl PageSizeMode {
    pub fn total_pages(self, total_items: i64, page_size: i64) -> i64 {
        match self {
            PageSizeMode::Guarded => total_pages(total_items, page_size),
            PageSizeMode::Unguarded => total_pages_unguarded(total_items, page_size),
        }
    }
}

/// Number of pages needed to hold `total_items` at `page_size` per page.
///
/// Returns `0` when `page_size <= 0`.
///
/// # Examples
///
/// ```
/// use envelope_core::pagination::total_pages;
///
/// assert_eq!(total_pages(100, 10), 10);
/// assert_eq!(total_pages(101, 10), 11);
/// assert_eq!(total_pages(0, 10), 0);
/// assert_eq!(total_pages(100, 0), 0);
/// ```
pub fn total_pages(total_items: i64, page_size: i64) -> i64 {
    if page_size <= 0 {
        return 0;
    }
    total_pages_unguarded(total_items, page_size)
}

/// Page count without the `page_size <= 0` guard. See [`PageSizeMode::Unguarded`].
pub fn total_pages_unguarded(total_items: i64, page_size: i64) -> i64 {
    (total_items as f64 / page_size as f64).ceil() as i64
}

/// Nested pagination block of a [`DetailedResponse`](crate::DetailedResponse).
///
/// `has_previous` and `has_next` are computed literally from `current_page`;
/// an out-of-range page is not corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub total_items: i64,
    pub current_page: i64,
    pub page_size: i64,
    pub total_pages: i64,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PaginationInfo {
    /// Build pagination metadata with the guarded page count.
    pub fn new(total_items: i64, current_page: i64, page_size: i64) -> Self {
        Self::with_mode(total_items, current_page, page_size, PageSizeMode::Guarded)
    }

    pub fn with_mode(
        total_items: i64,
        current_page: i64,
        page_size: i64,
        mode: PageSizeMode,
    ) -> Self {
        let total_pages = mode.total_pages(total_items, page_size);
        Self {
            total_items,
            current_page,
            page_size,
            total_pages,
            has_previous: current_page > 1,
            has_next: current_page < total_pages,
        }
    }

    /// Like [`PaginationInfo::new`], but rejects `page_size <= 0` before any
    /// arithmetic.
    pub fn checked(total_items: i64, current_page: i64, page_size: i64) -> Result<Self, CoreError> {
        if page_size <= 0 {
            return Err(CoreError::InvalidPageSize { page_size });
        }
        Ok(Self::new(total_items, current_page, page_size))
    }
}
