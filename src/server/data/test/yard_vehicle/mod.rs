use crate::server::{
    data::{
        vehicle::VehicleRepository,
        yard_vehicle::{NewYardVehicle, YardVehicleRepository},
    },
    model::{page::PageRequest, yard_vehicle::UpdateYardVehicleParams},
};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::YardVehicleStatus;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_yard_paginated;
mod update;
