//! Page arithmetic and the page container returned by collection queries.

use crate::{
    model::{
        link::LinkDto,
        page::{PagedResponseDto, PaginationQuery},
    },
    server::error::AppError,
};

const DEFAULT_PAGE_NUMBER: u64 = 1;
const DEFAULT_PAGE_SIZE: u64 = 10;

/// Validated pagination request.
///
/// Both values are guaranteed to be at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-indexed page number.
    pub page_number: u64,
    /// Maximum number of items on the page.
    pub page_size: u64,
}

impl PageRequest {
    /// Converts the pagination query string into a validated request.
    ///
    /// Missing values default to page 1 with 10 items per page.
    ///
    /// # Arguments
    /// - `query` - Raw `pageNumber`/`pageSize` query values
    ///
    /// # Returns
    /// - `Ok(PageRequest)` - Validated pagination request
    /// - `Err(AppError::BadRequest)` - Either value is less than 1
    pub fn from_query(query: PaginationQuery) -> Result<Self, AppError> {
        let defaults = Self::default();

        Ok(Self {
            page_number: Self::positive("pageNumber", query.page_number, defaults.page_number)?,
            page_size: Self::positive("pageSize", query.page_size, defaults.page_size)?,
        })
    }

    /// Zero-based index of the page for the database paginator.
    ///
    /// Returns `None` when the page starts at or past the end of `total_records`, so
    /// callers skip the query instead of computing an offset that may not fit in a `u64`.
    pub fn index_within(&self, total_records: u64) -> Option<u64> {
        let index = self.page_number.saturating_sub(1);
        (index < total_records.div_ceil(self.page_size.max(1))).then_some(index)
    }

    fn positive(field: &str, value: Option<i64>, default: u64) -> Result<u64, AppError> {
        match value {
            None => Ok(default),
            Some(v) if v >= 1 => Ok(v as u64),
            Some(_) => Err(AppError::BadRequest(format!(
                "{} must be greater than or equal to 1",
                field
            ))),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of items plus the metadata needed to navigate the rest.
///
/// `page_number` may exceed `total_pages`, in which case `items` is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page_number: u64,
    pub page_size: u64,
    pub total_pages: u64,
    pub total_records: u64,
}

impl<T> PageResult<T> {
    /// Builds a page from a total count and the already-fetched page items.
    ///
    /// `total_pages` is the ceiling of `total_records / page_size`, and is 0 only when
    /// there are no records, in which case the items are dropped regardless of the
    /// requested page.
    ///
    /// # Arguments
    /// - `total_records` - Count of all rows matching the query
    /// - `page_number` - 1-indexed requested page
    /// - `page_size` - Requested page size
    /// - `items` - Rows of the requested page
    ///
    /// # Returns
    /// - `PageResult<T>` - Page with computed `total_pages`
    pub fn paginate(total_records: u64, page_number: u64, page_size: u64, items: Vec<T>) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total_records.div_ceil(page_size)
        };

        let items = if total_records == 0 { Vec::new() } else { items };

        Self {
            items,
            page_number,
            page_size,
            total_pages,
            total_records,
        }
    }

    /// Converts every item while keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_pages: self.total_pages,
            total_records: self.total_records,
        }
    }

    /// Wraps the page in the response envelope with the given collection links.
    pub fn into_dto(self, links: Vec<LinkDto>) -> PagedResponseDto<T> {
        PagedResponseDto {
            page_number: self.page_number,
            page_size: self.page_size,
            total_pages: self.total_pages,
            total_records: self.total_records,
            data: self.items,
            links,
        }
    }
}
