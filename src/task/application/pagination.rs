//! Optional pagination input from callers.

use crate::task::ports::Page;
use serde::Deserialize;

/// Pagination as supplied by a caller; omitted fields fall back to the
/// defaults of [`Page`] (offset 0, limit 100).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PageRequest {
    /// Number of rows to skip.
    #[serde(default)]
    pub offset: Option<u32>,
    /// Maximum number of rows to return.
    #[serde(default)]
    pub limit: Option<u32>,
}

impl PageRequest {
    /// Creates a request with explicit values.
    #[must_use]
    pub const fn new(offset: u32, limit: u32) -> Self {
        Self {
            offset: Some(offset),
            limit: Some(limit),
        }
    }

    /// Resolves the request into a concrete page window.
    #[must_use]
    pub fn resolve(self) -> Page {
        Page::new(
            self.offset.unwrap_or(Page::DEFAULT_OFFSET),
            self.limit.unwrap_or(Page::DEFAULT_LIMIT),
        )
    }
}
