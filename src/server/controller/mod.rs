//! HTTP request handlers.
//!
//! Controllers convert request DTOs into validated parameters, call the service layer,
//! and convert domain models back into DTOs decorated with hypermedia links. Each
//! module also carries the `utoipa` path annotations used to build the OpenAPI document.

pub mod employee;
pub mod health;
pub mod vehicle;
pub mod yard;
pub mod yard_vehicle;

#[cfg(test)]
mod test;
