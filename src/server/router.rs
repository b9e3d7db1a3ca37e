use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, HealthDto},
        employee::{
            CreateYardEmployeeDto, EmployeeRoleDto, UpdateYardEmployeeDto, YardEmployeeDto,
        },
        link::LinkDto,
        vehicle::{CreateVehicleDto, CreateVehicleModelDto, VehicleDto, VehicleModelDto},
        yard::{AddressDto, CreateAddressDto, CreateYardDto, UpdateYardDto, YardDto},
        yard_vehicle::{
            CreateYardVehicleDto, UpdateYardVehicleDto, YardVehicleDto, YardVehicleStatusDto,
        },
    },
    server::{
        controller::{employee, health, vehicle, yard, yard_vehicle},
        state::AppState,
    },
};

/// OpenAPI document for the REST API, served by Swagger UI at `/swagger-ui`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "AutoInsight API",
        description = "Yards, vehicles and employees of vehicle service yards."
    ),
    paths(
        health::health,
        yard::create_yard,
        yard::get_yards,
        yard::get_yard_by_id,
        yard::update_yard,
        yard::delete_yard,
        employee::create_employee,
        employee::get_employees,
        employee::get_employee_by_id,
        employee::update_employee,
        employee::delete_employee,
        yard_vehicle::create_yard_vehicle,
        yard_vehicle::get_yard_vehicles,
        yard_vehicle::get_yard_vehicle_by_id,
        yard_vehicle::update_yard_vehicle,
        yard_vehicle::delete_yard_vehicle,
        vehicle::create_vehicle,
        vehicle::get_vehicle_by_qr_code,
        vehicle::get_vehicle_by_id,
    ),
    components(schemas(
        ErrorDto,
        HealthDto,
        LinkDto,
        CreateAddressDto,
        AddressDto,
        CreateYardDto,
        UpdateYardDto,
        YardDto,
        CreateVehicleModelDto,
        VehicleModelDto,
        CreateVehicleDto,
        VehicleDto,
        YardVehicleStatusDto,
        CreateYardVehicleDto,
        UpdateYardVehicleDto,
        YardVehicleDto,
        EmployeeRoleDto,
        CreateYardEmployeeDto,
        UpdateYardEmployeeDto,
        YardEmployeeDto,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "yard", description = "Yard management"),
        (name = "employee", description = "Employees of a yard"),
        (name = "yard-vehicle", description = "Vehicle stays in a yard"),
        (name = "vehicle", description = "Vehicles and QR code lookup"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/yards", get(yard::get_yards).post(yard::create_yard))
        .route(
            "/api/yards/{yard_id}",
            get(yard::get_yard_by_id)
                .patch(yard::update_yard)
                .delete(yard::delete_yard),
        )
        .route(
            "/api/yards/{yard_id}/employees",
            get(employee::get_employees).post(employee::create_employee),
        )
        .route(
            "/api/yards/{yard_id}/employees/{employee_id}",
            get(employee::get_employee_by_id)
                .patch(employee::update_employee)
                .delete(employee::delete_employee),
        )
        .route(
            "/api/yards/{yard_id}/vehicles",
            get(yard_vehicle::get_yard_vehicles).post(yard_vehicle::create_yard_vehicle),
        )
        .route(
            "/api/yards/{yard_id}/vehicles/{yard_vehicle_id}",
            get(yard_vehicle::get_yard_vehicle_by_id)
                .patch(yard_vehicle::update_yard_vehicle)
                .delete(yard_vehicle::delete_yard_vehicle),
        )
        .route(
            "/api/vehicles",
            post(vehicle::create_vehicle).get(vehicle::get_vehicle_by_qr_code),
        )
        .route("/api/vehicles/{vehicle_id}", get(vehicle::get_vehicle_by_id))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
