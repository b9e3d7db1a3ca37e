use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        employee::{CreateYardEmployeeDto, UpdateYardEmployeeDto, YardEmployeeDto},
        page::{PagedResponseDto, PaginationQuery},
    },
    server::{
        controller::yard::ensure_yard_exists,
        error::AppError,
        middleware::payload::{ApiJson, ApiQuery},
        model::{
            employee::{CreateYardEmployeeParams, UpdateYardEmployeeParams},
            page::PageRequest,
        },
        service::{
            employee::YardEmployeeService,
            link::{yard_employees_path, LinkBuilder},
        },
        state::AppState,
    },
};

/// Tag for grouping yard employee endpoints in OpenAPI documentation
pub static EMPLOYEE_TAG: &str = "employee";

/// Add an employee to a yard.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `links` - Link builder for the current request
/// - `yard_id` - ID of the yard the employee works at
/// - `payload` - Employee data
///
/// # Returns
/// - `201 Created` - Employee created, `Location` points at it
/// - `400 Bad Request` - A required field is blank
/// - `404 Not Found` - Yard not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/yards/{yard_id}/employees",
    tag = EMPLOYEE_TAG,
    params(
        ("yard_id" = String, Path, description = "Yard ID")
    ),
    request_body = CreateYardEmployeeDto,
    responses(
        (status = 201, description = "Successfully created employee", body = YardEmployeeDto),
        (status = 400, description = "Invalid employee data", body = ErrorDto),
        (status = 404, description = "Yard not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_employee(
    State(state): State<AppState>,
    links: LinkBuilder,
    Path(yard_id): Path<String>,
    ApiJson(payload): ApiJson<CreateYardEmployeeDto>,
) -> Result<impl IntoResponse, AppError> {
    ensure_yard_exists(&state, &yard_id).await?;

    let params = CreateYardEmployeeParams::from_dto(yard_id, payload)?;
    let employee = YardEmployeeService::new(&state.db).create(params).await?;
    let location = format!(
        "/api/{}/{}",
        yard_employees_path(&employee.yard_id),
        employee.id
    );

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(employee.into_dto(&links)),
    ))
}

/// Get paginated employees of a yard.
///
/// # Returns
/// - `200 OK` - Page of employees with collection links
/// - `400 Bad Request` - Pagination value below 1
/// - `404 Not Found` - Yard not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/yards/{yard_id}/employees",
    tag = EMPLOYEE_TAG,
    params(
        ("yard_id" = String, Path, description = "Yard ID"),
        PaginationQuery
    ),
    responses(
        (status = 200, description = "Successfully retrieved employees", body = PagedResponseDto<YardEmployeeDto>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 404, description = "Yard not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_employees(
    State(state): State<AppState>,
    links: LinkBuilder,
    Path(yard_id): Path<String>,
    ApiQuery(query): ApiQuery<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = PageRequest::from_query(query)?;
    ensure_yard_exists(&state, &yard_id).await?;

    let employees = YardEmployeeService::new(&state.db)
        .get_paginated(&yard_id, page)
        .await?;

    let collection_links = links.collection_links(
        &yard_employees_path(&yard_id),
        employees.page_number,
        employees.page_size,
        employees.total_pages,
    );
    let dto = employees
        .map(|employee| employee.into_dto(&links))
        .into_dto(collection_links);

    Ok((StatusCode::OK, Json(dto)))
}

/// Get an employee of a yard.
///
/// # Returns
/// - `200 OK` - Employee
/// - `404 Not Found` - Yard not found, or no such employee in this yard
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/yards/{yard_id}/employees/{employee_id}",
    tag = EMPLOYEE_TAG,
    params(
        ("yard_id" = String, Path, description = "Yard ID"),
        ("employee_id" = String, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved employee", body = YardEmployeeDto),
        (status = 404, description = "Yard or employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_employee_by_id(
    State(state): State<AppState>,
    links: LinkBuilder,
    Path((yard_id, employee_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    ensure_yard_exists(&state, &yard_id).await?;

    let employee = YardEmployeeService::new(&state.db)
        .get_in_yard(&yard_id, &employee_id)
        .await?;

    match employee {
        Some(employee) => Ok((StatusCode::OK, Json(employee.into_dto(&links)))),
        None => Err(AppError::NotFound("Employee not found".to_string())),
    }
}

/// Update an employee of a yard.
///
/// # Returns
/// - `200 OK` - Updated employee
/// - `400 Bad Request` - A provided field is blank
/// - `404 Not Found` - Yard not found, or no such employee in this yard
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/yards/{yard_id}/employees/{employee_id}",
    tag = EMPLOYEE_TAG,
    params(
        ("yard_id" = String, Path, description = "Yard ID"),
        ("employee_id" = String, Path, description = "Employee ID")
    ),
    request_body = UpdateYardEmployeeDto,
    responses(
        (status = 200, description = "Successfully updated employee", body = YardEmployeeDto),
        (status = 400, description = "Invalid employee data", body = ErrorDto),
        (status = 404, description = "Yard or employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_employee(
    State(state): State<AppState>,
    links: LinkBuilder,
    Path((yard_id, employee_id)): Path<(String, String)>,
    ApiJson(payload): ApiJson<UpdateYardEmployeeDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateYardEmployeeParams::from_dto(payload)?;
    ensure_yard_exists(&state, &yard_id).await?;

    let employee = YardEmployeeService::new(&state.db)
        .update(&yard_id, &employee_id, params)
        .await?;

    match employee {
        Some(employee) => Ok((StatusCode::OK, Json(employee.into_dto(&links)))),
        None => Err(AppError::NotFound("Employee not found".to_string())),
    }
}

/// Remove an employee from a yard.
///
/// # Returns
/// - `204 No Content` - Employee deleted
/// - `404 Not Found` - Yard not found, or no such employee in this yard
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/yards/{yard_id}/employees/{employee_id}",
    tag = EMPLOYEE_TAG,
    params(
        ("yard_id" = String, Path, description = "Yard ID"),
        ("employee_id" = String, Path, description = "Employee ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted employee"),
        (status = 404, description = "Yard or employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path((yard_id, employee_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    ensure_yard_exists(&state, &yard_id).await?;

    let deleted = YardEmployeeService::new(&state.db)
        .delete(&yard_id, &employee_id)
        .await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Employee not found".to_string()))
    }
}
