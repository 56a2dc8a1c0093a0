//! Offset pagination parameters shared by list operations.

/// Window over a stable ordering of stored entities.
///
/// Adapters skip `offset` matching rows and return at most `limit` of them.
/// Both adapters order rows by `(created_at, id)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Page {
    offset: u32,
    limit: u32,
}

impl Page {
    /// Offset used when callers do not supply one.
    pub const DEFAULT_OFFSET: u32 = 0;

    /// Limit used when callers do not supply one.
    pub const DEFAULT_LIMIT: u32 = 100;

    /// Creates a page window.
    #[must_use]
    pub const fn new(offset: u32, limit: u32) -> Self {
        Self { offset, limit }
    }

    /// Returns the number of rows to skip.
    #[must_use]
    pub const fn offset(self) -> u32 {
        self.offset
    }

    /// Returns the maximum number of rows to return.
    #[must_use]
    pub const fn limit(self) -> u32 {
        self.limit
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OFFSET, Self::DEFAULT_LIMIT)
    }
}
