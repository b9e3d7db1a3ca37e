use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::link::LinkDto;

/// Response envelope for every collection endpoint.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponseDto<T> {
    pub page_number: u64,
    pub page_size: u64,
    pub total_pages: u64,
    pub total_records: u64,
    pub data: Vec<T>,
    pub links: Vec<LinkDto>,
}

/// Pagination query string shared by the collection endpoints.
///
/// Values are taken as signed integers so that zero and negative values reach the
/// validation layer and are rejected with a 400 instead of a deserialization error.
#[derive(Deserialize, Debug, Default, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// 1-indexed page number (default: 1)
    pub page_number: Option<i64>,
    /// Items per page (default: 10)
    pub page_size: Option<i64>,
}
