// Database models for the estate listing platform

pub mod admin_user;
pub mod facility;
pub mod filters;
pub mod inquiry;
pub mod media;
pub mod property;

pub use admin_user::*;
pub use facility::*;
pub use filters::*;
pub use inquiry::*;
pub use media::*;
pub use property::*;

use serde::{Deserialize, Serialize};

/// Page size applied when the caller supplies no usable limit.
pub const DEFAULT_PAGE_SIZE: i64 = 9;

/// Pagination parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

impl Pagination {
    pub fn new(limit: i64, offset: i64) -> Self {
        Self { limit, offset }
    }

    /// Build pagination from 1-indexed page parameters, normalizing
    /// non-positive values to page 1 and the default page size.
    pub fn from_page(page: i64, limit: i64) -> Self {
        let page = if page < 1 { 1 } else { page };
        let limit = if limit < 1 { DEFAULT_PAGE_SIZE } else { limit };
        Self {
            limit,
            offset: (page - 1) * limit,
        }
    }

    pub fn page(&self) -> i64 {
        (self.offset / self.limit) + 1
    }
}

/// Paginated response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total: i64, pagination: &Pagination) -> Self {
        Self {
            items,
            total,
            limit: pagination.limit,
            offset: pagination.offset,
        }
    }

    pub fn has_more(&self) -> bool {
        self.offset + self.limit < self.total
    }

    pub fn page(&self) -> i64 {
        (self.offset / self.limit) + 1
    }

    pub fn total_pages(&self) -> i64 {
        (self.total + self.limit - 1) / self.limit
    }
}
