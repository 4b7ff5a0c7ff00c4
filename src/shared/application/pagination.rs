/// Pagination support for queries
///
/// Standard pagination model used by every listing read path
use serde::{Deserialize, Serialize};

/// Pagination parameters for queries (1-based page)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    pub page: u32,
    pub limit: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

impl PaginationParams {
    /// Page 0 and limit 0 are clamped to 1
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    /// Calculate offset for database queries
    pub fn offset(&self) -> i64 {
        (self.page.max(1) as i64 - 1) * self.limit as i64
    }

    /// Get limit for database queries
    pub fn limit(&self) -> i64 {
        self.limit as i64
    }
}

/// Paginated result wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total: u64, params: &PaginationParams) -> Self {
        let total_pages = total.div_ceil(params.limit.max(1) as u64) as u32;

        Self {
            items,
            total,
            page: params.page,
            limit: params.limit,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_and_pages() {
        let params = PaginationParams::new(3, 10);
        assert_eq!(params.offset(), 20);

        let result = PaginatedResult::new(vec![1, 2, 3], 21, &params);
        assert_eq!(result.total_pages, 3);
        assert_eq!(result.page, 3);
    }

    #[test]
    fn test_zero_page_is_clamped() {
        let params = PaginationParams::new(0, 0);
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 1);
        assert_eq!(params.offset(), 0);
    }
}
