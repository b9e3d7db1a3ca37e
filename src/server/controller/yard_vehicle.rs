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
        yard_vehicle::{CreateYardVehicleDto, UpdateYardVehicleDto, YardVehicleDto},
    },
    server::{
        controller::yard::ensure_yard_exists,
        error::AppError,
        middleware::payload::{ApiJson, ApiQuery},
        model::{
            page::PageRequest,
            yard_vehicle::{CreateYardVehicleParams, UpdateYardVehicleParams},
        },
        service::{
            link::{yard_vehicles_path, LinkBuilder},
            yard_vehicle::YardVehicleService,
        },
        state::AppState,
    },
};

/// Tag for grouping yard vehicle endpoints in OpenAPI documentation
pub static YARD_VEHICLE_TAG: &str = "yard-vehicle";

/// Record a vehicle's stay in a yard.
///
/// The vehicle is either referenced by `vehicleId` or described inline with `vehicle`,
/// which may itself reference or describe its model. Every row created for the request
/// is stored in a single transaction.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `links` - Link builder for the current request
/// - `yard_id` - ID of the yard
/// - `payload` - Stay data and vehicle reference
///
/// # Returns
/// - `201 Created` - Yard vehicle created, `Location` points at it
/// - `400 Bad Request` - Missing or conflicting vehicle reference, or blank field
/// - `404 Not Found` - Yard, referenced vehicle or referenced model not found
/// - `500 Internal Server Error` - Database error, nothing was stored
#[utoipa::path(
    post,
    path = "/api/yards/{yard_id}/vehicles",
    tag = YARD_VEHICLE_TAG,
    params(
        ("yard_id" = String, Path, description = "Yard ID")
    ),
    request_body = CreateYardVehicleDto,
    responses(
        (status = 201, description = "Successfully created yard vehicle", body = YardVehicleDto),
        (status = 400, description = "Invalid yard vehicle data", body = ErrorDto),
        (status = 404, description = "Yard, vehicle or vehicle model not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_yard_vehicle(
    State(state): State<AppState>,
    links: LinkBuilder,
    Path(yard_id): Path<String>,
    ApiJson(payload): ApiJson<CreateYardVehicleDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateYardVehicleParams::from_dto(yard_id, payload)?;

    let yard_vehicle = YardVehicleService::new(&state.db).create(params).await?;
    let location = format!(
        "/api/{}/{}",
        yard_vehicles_path(&yard_vehicle.yard_id),
        yard_vehicle.id
    );

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(yard_vehicle.into_dto(&links)),
    ))
}

/// Get paginated vehicles of a yard.
///
/// # Returns
/// - `200 OK` - Page of yard vehicles with collection links
/// - `400 Bad Request` - Pagination value below 1
/// - `404 Not Found` - Yard not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/yards/{yard_id}/vehicles",
    tag = YARD_VEHICLE_TAG,
    params(
        ("yard_id" = String, Path, description = "Yard ID"),
        PaginationQuery
    ),
    responses(
        (status = 200, description = "Successfully retrieved yard vehicles", body = PagedResponseDto<YardVehicleDto>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 404, description = "Yard not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_yard_vehicles(
    State(state): State<AppState>,
    links: LinkBuilder,
    Path(yard_id): Path<String>,
    ApiQuery(query): ApiQuery<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = PageRequest::from_query(query)?;
    ensure_yard_exists(&state, &yard_id).await?;

    let yard_vehicles = YardVehicleService::new(&state.db)
        .get_paginated(&yard_id, page)
        .await?;

    let collection_links = links.collection_links(
        &yard_vehicles_path(&yard_id),
        yard_vehicles.page_number,
        yard_vehicles.page_size,
        yard_vehicles.total_pages,
    );
    let dto = yard_vehicles
        .map(|yard_vehicle| yard_vehicle.into_dto(&links))
        .into_dto(collection_links);

    Ok((StatusCode::OK, Json(dto)))
}

/// Get a vehicle's stay in a yard.
///
/// # Returns
/// - `200 OK` - Yard vehicle with its vehicle and model
/// - `404 Not Found` - Yard not found, or no such yard vehicle in this yard
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/yards/{yard_id}/vehicles/{yard_vehicle_id}",
    tag = YARD_VEHICLE_TAG,
    params(
        ("yard_id" = String, Path, description = "Yard ID"),
        ("yard_vehicle_id" = String, Path, description = "Yard vehicle ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved yard vehicle", body = YardVehicleDto),
        (status = 404, description = "Yard or yard vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_yard_vehicle_by_id(
    State(state): State<AppState>,
    links: LinkBuilder,
    Path((yard_id, yard_vehicle_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    ensure_yard_exists(&state, &yard_id).await?;

    let yard_vehicle = YardVehicleService::new(&state.db)
        .get_in_yard(&yard_id, &yard_vehicle_id)
        .await?;

    match yard_vehicle {
        Some(yard_vehicle) => Ok((StatusCode::OK, Json(yard_vehicle.into_dto(&links)))),
        None => Err(AppError::NotFound("Yard vehicle not found".to_string())),
    }
}

/// Update status or timestamps of a vehicle's stay.
///
/// # Returns
/// - `200 OK` - Updated yard vehicle
/// - `404 Not Found` - Yard not found, or no such yard vehicle in this yard
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/yards/{yard_id}/vehicles/{yard_vehicle_id}",
    tag = YARD_VEHICLE_TAG,
    params(
        ("yard_id" = String, Path, description = "Yard ID"),
        ("yard_vehicle_id" = String, Path, description = "Yard vehicle ID")
    ),
    request_body = UpdateYardVehicleDto,
    responses(
        (status = 200, description = "Successfully updated yard vehicle", body = YardVehicleDto),
        (status = 404, description = "Yard or yard vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_yard_vehicle(
    State(state): State<AppState>,
    links: LinkBuilder,
    Path((yard_id, yard_vehicle_id)): Path<(String, String)>,
    ApiJson(payload): ApiJson<UpdateYardVehicleDto>,
) -> Result<impl IntoResponse, AppError> {
    ensure_yard_exists(&state, &yard_id).await?;

    let params = UpdateYardVehicleParams::from_dto(payload);
    let yard_vehicle = YardVehicleService::new(&state.db)
        .update(&yard_id, &yard_vehicle_id, params)
        .await?;

    match yard_vehicle {
        Some(yard_vehicle) => Ok((StatusCode::OK, Json(yard_vehicle.into_dto(&links)))),
        None => Err(AppError::NotFound("Yard vehicle not found".to_string())),
    }
}

/// Delete a vehicle's stay. The vehicle itself is kept.
///
/// # Returns
/// - `204 No Content` - Yard vehicle deleted
/// - `404 Not Found` - Yard not found, or no such yard vehicle in this yard
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/yards/{yard_id}/vehicles/{yard_vehicle_id}",
    tag = YARD_VEHICLE_TAG,
    params(
        ("yard_id" = String, Path, description = "Yard ID"),
        ("yard_vehicle_id" = String, Path, description = "Yard vehicle ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted yard vehicle"),
        (status = 404, description = "Yard or yard vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_yard_vehicle(
    State(state): State<AppState>,
    Path((yard_id, yard_vehicle_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    ensure_yard_exists(&state, &yard_id).await?;

    let deleted = YardVehicleService::new(&state.db)
        .delete(&yard_id, &yard_vehicle_id)
        .await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Yard vehicle not found".to_string()))
    }
}
