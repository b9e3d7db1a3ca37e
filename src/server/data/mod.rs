//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Every repository is generic over `ConnectionTrait`, so the same code runs against the
//! shared connection pool or inside a `DatabaseTransaction` opened by the service layer.

pub mod employee;
pub mod qr_code;
pub mod vehicle;
pub mod vehicle_model;
pub mod yard;
pub mod yard_vehicle;

#[cfg(test)]
mod test;
