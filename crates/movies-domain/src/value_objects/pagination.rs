//! Pagination Value Objects

use crate::constants::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
use crate::error::{Error, Result};
use crate::value_objects::query::Window;
use serde::Serialize;

/// Validated 1-based page request
///
/// Both `number` and `size` are at least 1; the constructor is the only way
/// to build one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    number: u64,
    size: u64,
}

impl PageRequest {
    /// Create a page request, rejecting a number or size below 1
    pub fn new(number: u64, size: u64) -> Result<Self> {
        if number < 1 {
            return Err(Error::invalid_argument(
                "page[number] must be greater than or equal to 1",
            ));
        }
        if size < 1 {
            return Err(Error::invalid_argument(
                "page[size] must be greater than or equal to 1",
            ));
        }
        Ok(Self { number, size })
    }

    /// 1-based page number
    pub fn number(&self) -> u64 {
        self.number
    }

    /// Page size
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Window covering this page: `offset = (number - 1) * size`, `limit = size`
    pub fn window(&self) -> Window {
        Window {
            offset: (self.number - 1).saturating_mul(self.size),
            limit: self.size,
        }
    }

    /// Number of pages needed for `total_hits`, never less than 1
    pub fn pages_count(&self, total_hits: u64) -> u64 {
        total_hits.div_ceil(self.size).max(1)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            number: DEFAULT_PAGE_NUMBER,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    /// Total number of pages, at least 1
    pub pages_count: u64,
    /// 1-based number of this page
    pub page_number: u64,
    /// Records on this page
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Pair a window's records with the envelope's total hit count
    pub fn new(request: PageRequest, total_hits: u64, results: Vec<T>) -> Self {
        Self {
            pages_count: request.pages_count(total_hits),
            page_number: request.number(),
            results,
        }
    }

    /// Convert the records, keeping the page metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            pages_count: self.pages_count,
            page_number: self.page_number,
            results: self.results.into_iter().map(f).collect(),
        }
    }
}
