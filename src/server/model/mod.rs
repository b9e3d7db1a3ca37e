//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types are built from request DTOs through `from_dto`, which is where request
//! validation happens.

pub mod employee;
pub mod link;
pub mod page;
pub mod reference;
pub mod vehicle;
pub mod yard;
pub mod yard_vehicle;
