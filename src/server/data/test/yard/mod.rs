use crate::server::{
    data::yard::YardRepository,
    model::{
        page::PageRequest,
        yard::{CreateAddressParams, UpdateYardParams},
    },
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_id;
mod get_paginated;
mod update;

fn address_params() -> CreateAddressParams {
    CreateAddressParams {
        country: "Brazil".to_string(),
        state: "SP".to_string(),
        city: "Sao Paulo".to_string(),
        zip_code: "01310-100".to_string(),
        neighborhood: "Bela Vista".to_string(),
        complement: None,
    }
}
