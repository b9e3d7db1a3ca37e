//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Parent/child ownership checks and not-found handling
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Multi-row creates and deletes run in one transaction

pub mod aggregate;
pub mod employee;
pub mod link;
pub mod vehicle;
pub mod yard;
pub mod yard_vehicle;

#[cfg(test)]
mod test;
