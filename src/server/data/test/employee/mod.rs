use crate::server::{
    data::employee::YardEmployeeRepository,
    model::{
        employee::{CreateYardEmployeeParams, UpdateYardEmployeeParams},
        page::PageRequest,
    },
};
use entity::sea_orm_active_enums::EmployeeRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_yard_paginated;
mod update;
