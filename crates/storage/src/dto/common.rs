use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Copy, Deserialize, IntoParams, ToSchema)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

pub(crate) fn default_page() -> u32 {
    1
}

pub(crate) fn default_page_size() -> u32 {
    50
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl PaginationParams {
    pub fn validate(&self) -> Result<(), String> {
        if self.page < 1 {
            return Err("page must be >= 1".to_string());
        }
        if self.page_size < 1 || self.page_size > 200 {
            return Err("page_size must be between 1 and 200".to_string());
        }
        Ok(())
    }

    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize).saturating_mul(self.page_size as usize)
    }

    pub fn limit(&self) -> usize {
        self.page_size as usize
    }

    /// Slices one page out of an already ranked sequence.
    pub fn paginate<T>(&self, items: Vec<T>) -> (Vec<T>, usize) {
        let total = items.len();
        let page = items
            .into_iter()
            .skip(self.offset())
            .take(self.limit())
            .collect();
        (page, total)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: usize,
    pub total_pages: u32,
}

impl PaginationMeta {
    pub fn new(page: u32, page_size: u32, total_items: usize) -> Self {
        let total_pages = ((total_items as f64) / (page_size as f64)).ceil() as u32;
        Self {
            page,
            page_size,
            total_items,
            total_pages,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, page: u32, page_size: u32, total_items: usize) -> Self {
        Self {
            data,
            pagination: PaginationMeta::new(page, page_size, total_items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate() {
        let params = PaginationParams {
            page: 2,
            page_size: 3,
        };
        let (page, total) = params.paginate((1..=8).collect::<Vec<_>>());
        assert_eq!(page, vec![4, 5, 6]);
        assert_eq!(total, 8);

        let meta = PaginationMeta::new(2, 3, total);
        assert_eq!(meta.total_pages, 3);
    }

    #[test]
    fn test_far_page_is_empty() {
        let params = PaginationParams {
            page: u32::MAX,
            page_size: 200,
        };
        assert!(params.validate().is_ok());

        let (page, total) = params.paginate(vec![1, 2, 3]);
        assert!(page.is_empty());
        assert_eq!(total, 3);
    }

    #[test]
    fn test_validate_bounds() {
        assert!(PaginationParams::default().validate().is_ok());
        assert!(
            PaginationParams {
                page: 0,
                page_size: 10
            }
            .validate()
            .is_err()
        );
        assert!(
            PaginationParams {
                page: 1,
                page_size: 500
            }
            .validate()
            .is_err()
        );
    }
}
