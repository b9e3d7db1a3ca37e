//! SeaORM entity definitions for the yard management schema.

pub mod prelude;

pub mod address;
pub mod qr_code;
pub mod sea_orm_active_enums;
pub mod vehicle;
pub mod vehicle_model;
pub mod yard;
pub mod yard_employee;
pub mod yard_vehicle;
