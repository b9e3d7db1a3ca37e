use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        page::{PagedResponseDto, PaginationQuery},
        yard::{CreateYardDto, UpdateYardDto, YardDto},
    },
    server::{
        error::AppError,
        middleware::payload::{ApiJson, ApiQuery},
        model::{
            page::PageRequest,
            yard::{CreateYardParams, UpdateYardParams},
        },
        service::{
            link::{LinkBuilder, YARDS},
            yard::YardService,
        },
        state::AppState,
    },
};

/// Tag for grouping yard endpoints in OpenAPI documentation
pub static YARD_TAG: &str = "yard";

/// Create a new yard.
///
/// Creates the yard and its inline address in a single transaction. Either both rows
/// are stored or neither is.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `links` - Link builder for the current request
/// - `payload` - Owner and address of the new yard
///
/// # Returns
/// - `201 Created` - Yard created, `Location` points at it
/// - `400 Bad Request` - A required field is blank
/// - `500 Internal Server Error` - Database error, nothing was stored
#[utoipa::path(
    post,
    path = "/api/yards",
    tag = YARD_TAG,
    request_body = CreateYardDto,
    responses(
        (status = 201, description = "Successfully created yard", body = YardDto),
        (status = 400, description = "Invalid yard data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_yard(
    State(state): State<AppState>,
    links: LinkBuilder,
    ApiJson(payload): ApiJson<CreateYardDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateYardParams::from_dto(payload)?;

    let yard = YardService::new(&state.db).create(params).await?;
    let location = format!("/api/{}/{}", YARDS, yard.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(yard.into_dto(&links)),
    ))
}

/// Get paginated yards.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `links` - Link builder for the current request
/// - `query` - Pagination parameters (`pageNumber`, `pageSize`)
///
/// # Returns
/// - `200 OK` - Page of yards with collection links
/// - `400 Bad Request` - Pagination value below 1
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/yards",
    tag = YARD_TAG,
    params(PaginationQuery),
    responses(
        (status = 200, description = "Successfully retrieved yards", body = PagedResponseDto<YardDto>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_yards(
    State(state): State<AppState>,
    links: LinkBuilder,
    ApiQuery(query): ApiQuery<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = PageRequest::from_query(query)?;

    let yards = YardService::new(&state.db).get_paginated(page).await?;

    let collection_links =
        links.collection_links(YARDS, yards.page_number, yards.page_size, yards.total_pages);
    let dto = yards
        .map(|yard| yard.into_dto(&links))
        .into_dto(collection_links);

    Ok((StatusCode::OK, Json(dto)))
}

/// Get a specific yard by ID.
///
/// # Returns
/// - `200 OK` - Yard with its address and links
/// - `404 Not Found` - Yard not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/yards/{yard_id}",
    tag = YARD_TAG,
    params(
        ("yard_id" = String, Path, description = "Yard ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved yard", body = YardDto),
        (status = 404, description = "Yard not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_yard_by_id(
    State(state): State<AppState>,
    links: LinkBuilder,
    Path(yard_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let yard = YardService::new(&state.db).get_by_id(&yard_id).await?;

    match yard {
        Some(yard) => Ok((StatusCode::OK, Json(yard.into_dto(&links)))),
        None => Err(AppError::NotFound("Yard not found".to_string())),
    }
}

/// Update a yard.
///
/// Only the yard's own fields can be changed; the address is not updated here.
///
/// # Returns
/// - `200 OK` - Updated yard
/// - `400 Bad Request` - A provided field is blank
/// - `404 Not Found` - Yard not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/yards/{yard_id}",
    tag = YARD_TAG,
    params(
        ("yard_id" = String, Path, description = "Yard ID")
    ),
    request_body = UpdateYardDto,
    responses(
        (status = 200, description = "Successfully updated yard", body = YardDto),
        (status = 400, description = "Invalid yard data", body = ErrorDto),
        (status = 404, description = "Yard not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_yard(
    State(state): State<AppState>,
    links: LinkBuilder,
    Path(yard_id): Path<String>,
    ApiJson(payload): ApiJson<UpdateYardDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateYardParams::from_dto(payload)?;

    let yard = YardService::new(&state.db).update(&yard_id, params).await?;

    match yard {
        Some(yard) => Ok((StatusCode::OK, Json(yard.into_dto(&links)))),
        None => Err(AppError::NotFound("Yard not found".to_string())),
    }
}

/// Delete a yard.
///
/// Removes the yard, its address, and every employee, yard vehicle and QR code of
/// the yard.
///
/// # Returns
/// - `204 No Content` - Yard deleted
/// - `404 Not Found` - Yard not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/yards/{yard_id}",
    tag = YARD_TAG,
    params(
        ("yard_id" = String, Path, description = "Yard ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted yard"),
        (status = 404, description = "Yard not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_yard(
    State(state): State<AppState>,
    Path(yard_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = YardService::new(&state.db).delete(&yard_id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Yard not found".to_string()))
    }
}

/// Fails with `404 Yard not found` unless the parent yard of a nested route exists.
pub(super) async fn ensure_yard_exists(state: &AppState, yard_id: &str) -> Result<(), AppError> {
    if YardService::new(&state.db).exists(yard_id).await? {
        Ok(())
    } else {
        Err(AppError::NotFound("Yard not found".to_string()))
    }
}
