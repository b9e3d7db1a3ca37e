use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        vehicle::{CreateVehicleDto, VehicleDto, VehicleLookupQuery},
    },
    server::{
        error::AppError,
        middleware::payload::{ApiJson, ApiQuery},
        model::vehicle::CreateVehicleParams,
        service::{
            link::{LinkBuilder, VEHICLES},
            vehicle::VehicleService,
        },
        state::AppState,
        util::validate::non_blank_id,
    },
};

/// Tag for grouping vehicle endpoints in OpenAPI documentation
pub static VEHICLE_TAG: &str = "vehicle";

/// Create a vehicle.
///
/// The model is either referenced by `modelId` or described inline with `model`.
///
/// # Returns
/// - `201 Created` - Vehicle created, `Location` points at it
/// - `400 Bad Request` - Missing or conflicting model reference, or blank field
/// - `404 Not Found` - Referenced model not found
/// - `500 Internal Server Error` - Database error, nothing was stored
#[utoipa::path(
    post,
    path = "/api/vehicles",
    tag = VEHICLE_TAG,
    request_body = CreateVehicleDto,
    responses(
        (status = 201, description = "Successfully created vehicle", body = VehicleDto),
        (status = 400, description = "Invalid vehicle data", body = ErrorDto),
        (status = 404, description = "Vehicle model not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    links: LinkBuilder,
    ApiJson(payload): ApiJson<CreateVehicleDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateVehicleParams::from_dto(payload)?;

    let vehicle = VehicleService::new(&state.db).create(params).await?;
    let location = format!("/api/{}/{}", VEHICLES, vehicle.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(vehicle.into_dto(&links)),
    ))
}

/// Find the vehicle a QR code is attached to.
///
/// # Returns
/// - `200 OK` - Vehicle the code is attached to
/// - `400 Bad Request` - `qrCodeId` missing or blank
/// - `404 Not Found` - Unknown code, or the code is not attached to a vehicle
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/vehicles",
    tag = VEHICLE_TAG,
    params(VehicleLookupQuery),
    responses(
        (status = 200, description = "Successfully retrieved vehicle", body = VehicleDto),
        (status = 400, description = "Missing QR code ID", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle_by_qr_code(
    State(state): State<AppState>,
    links: LinkBuilder,
    ApiQuery(query): ApiQuery<VehicleLookupQuery>,
) -> Result<impl IntoResponse, AppError> {
    let Some(qr_code_id) = non_blank_id(query.qr_code_id) else {
        return Err(AppError::BadRequest("qrCodeId is required".to_string()));
    };

    let vehicle = VehicleService::new(&state.db)
        .get_by_qr_code(&qr_code_id)
        .await?;

    match vehicle {
        Some(vehicle) => Ok((StatusCode::OK, Json(vehicle.into_dto(&links)))),
        None => Err(AppError::NotFound("Vehicle not found".to_string())),
    }
}

/// Get a vehicle by ID.
///
/// # Returns
/// - `200 OK` - Vehicle with its model
/// - `404 Not Found` - Vehicle not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/vehicles/{vehicle_id}",
    tag = VEHICLE_TAG,
    params(
        ("vehicle_id" = String, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved vehicle", body = VehicleDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle_by_id(
    State(state): State<AppState>,
    links: LinkBuilder,
    Path(vehicle_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let vehicle = VehicleService::new(&state.db).get_by_id(&vehicle_id).await?;

    match vehicle {
        Some(vehicle) => Ok((StatusCode::OK, Json(vehicle.into_dto(&links)))),
        None => Err(AppError::NotFound("Vehicle not found".to_string())),
    }
}
