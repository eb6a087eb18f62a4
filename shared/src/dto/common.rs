use serde::{Deserialize, Serialize};

/// Common error response body returned by the league API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// One page of a filtered list endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaginatedDto<T> {
    /// Items on the current page
    pub data: Vec<T>,
    /// 1-based page number
    pub page: u32,
    /// Page size the server applied
    pub per_page: u32,
    /// Total matching items across all pages
    pub total: u32,
}

impl<T> PaginatedDto<T> {
    /// Number of pages implied by `total` and `per_page`. Zero `per_page`
    /// (a defensive server default) counts as a single page.
    pub fn page_count(&self) -> u32 {
        if self.per_page == 0 {
            return 1;
        }
        self.total.div_ceil(self.per_page).max(1)
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.page_count()
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 1
    }
}
