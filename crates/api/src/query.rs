//! Shared query parameter types for API handlers.

use envelope_core::CoreError;
use serde::Deserialize;

use crate::config::ServerConfig;

/// Page-number pagination parameters (`?page=&page_size=`).
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// Resolved page request: `page >= 1`, `1 <= page_size <= max_page_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub page_size: i64,
}

impl PaginationParams {
    /// Apply defaults and limits from `config`.
    ///
    /// A page below 1 is raised to 1 and an oversized page size is lowered
    /// to the maximum. An explicit page size of zero or less is rejected,
    /// since no page count can be derived from it.
    pub fn resolve(&self, config: &ServerConfig) -> Result<PageRequest, CoreError> {
        let page_size = match self.page_size {
            Some(size) if size <= 0 => return Err(CoreError::InvalidPageSize { page_size: size }),
            Some(size) => size.min(config.max_page_size),
            None => config.default_page_size,
        };

        Ok(PageRequest {
            page: self.page.unwrap_or(1).max(1),
            page_size,
        })
    }
}

impl PageRequest {
    /// Slice out this page of `items`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = usize::try_from((self.page - 1).saturating_mul(self.page_size))
            .unwrap_or(usize::MAX)
            .min(items.len());
        let end = start
            .saturating_add(usize::try_from(self.page_size).unwrap_or(usize::MAX))
            .min(items.len());
        &items[start..end]
    }
}
