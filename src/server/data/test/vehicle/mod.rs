use crate::server::{
    data::{
        qr_code::QrCodeRepository, vehicle::VehicleRepository,
        vehicle_model::VehicleModelRepository,
    },
    model::vehicle::CreateVehicleModelParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_id;
mod qr_code;
