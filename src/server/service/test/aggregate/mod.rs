use crate::server::{
    error::AppError,
    model::{
        reference::Reference,
        vehicle::{CreateVehicleModelParams, CreateVehicleParams},
        yard::{CreateAddressParams, CreateYardParams},
        yard_vehicle::CreateYardVehicleParams,
    },
    service::aggregate::AggregateCreationCoordinator,
};
use chrono::Utc;
use entity::{prelude::*, sea_orm_active_enums::YardVehicleStatus};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod abandoned_transaction;
mod create_vehicle;
mod create_yard;
mod create_yard_vehicle;

fn new_model() -> CreateVehicleModelParams {
    CreateVehicleModelParams {
        name: "Mottu Sport".to_string(),
        year: 2023,
    }
}

fn new_vehicle(model: Reference<String, CreateVehicleModelParams>) -> CreateVehicleParams {
    CreateVehicleParams {
        plate: "ABC1D23".to_string(),
        user_id: "usr_1".to_string(),
        model,
    }
}

fn new_yard_vehicle(
    yard_id: &str,
    vehicle: Reference<String, CreateVehicleParams>,
) -> CreateYardVehicleParams {
    CreateYardVehicleParams {
        yard_id: yard_id.to_string(),
        status: YardVehicleStatus::Waiting,
        entered_at: Utc::now(),
        left_at: None,
        vehicle,
    }
}
