//! Page descriptor for bounded search windows.

use crate::error::RococoError;

/// A validated (page, size, optional filter) triple.
///
/// Invariants: page >= 0, size > 0, filter is `None` when blank. A page
/// index past the last page is not an error; the store answers it with an
/// empty slice and the true total count.
#[derive(Debug, Clone)]
pub struct PageRequest {
    page: u32,
    size: u32,
    filter: Option<String>,
}

impl PageRequest {
    pub fn new(page: i32, size: i32, filter: Option<String>) -> Result<Self, RococoError> {
        if page < 0 {
            return Err(RococoError::InvalidArgument(format!(
                "page must be >= 0, got {page}"
            )));
        }
        if size <= 0 {
            return Err(RococoError::InvalidArgument(format!(
                "size must be > 0, got {size}"
            )));
        }
        Ok(Self {
            page: page as u32,
            size: size as u32,
            filter: filter.filter(|f| !f.is_empty()),
        })
    }

    /// Case-insensitive substring filter, if one was supplied.
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }
}

/// One window of matching records plus the total match count across all
/// pages. Callers use `total_count` to compute page counts, so it reflects
/// every match, not just the returned slice.
#[derive(Debug, Clone)]
pub struct Page<R> {
    pub records: Vec<R>,
    pub total_count: u64,
}
