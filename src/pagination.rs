//! Page-number arithmetic shared by the two archive listings.

use serde::Serialize;

/// Records per page for every listing.
pub const PAGE_SIZE: u64 = 5;

/// A validated, 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
}

impl PageRequest {
    /// Build a request for `page`, clamping anything below 1 to 1.
    pub fn new(page: i64) -> Self {
        Self {
            page: page.max(1) as u64,
        }
    }

    /// Interpret a raw `page` query value.
    ///
    /// Missing, blank, non-integer and non-positive values all mean page 1.
    pub fn from_query(raw: Option<&str>) -> Self {
        let page = raw
            .map(str::trim)
            .and_then(|s| s.parse::<i64>().ok())
            .unwrap_or(1);
        Self::new(page)
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    /// Index of the first record on this page.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(PAGE_SIZE)
    }

    pub fn limit(&self) -> u64 {
        PAGE_SIZE
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Pagination metadata returned with every listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// The requested page, echoed back even when out of range.
    pub current_page: u64,
    pub total_pages: u64,
    pub total_count: u64,
    pub per_page: u64,
}

impl Pagination {
    pub fn new(request: PageRequest, total_count: u64) -> Self {
        Self {
            current_page: request.page(),
            total_pages: total_count.div_ceil(PAGE_SIZE),
            total_count,
            per_page: PAGE_SIZE,
        }
    }
}

/// One page of records plus its metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}
