//! Wire DTOs shared by the HTTP handlers and the OpenAPI document.
//!
//! Every type here is serialized as camelCase JSON. Request DTOs are converted into
//! validated server parameters by the `from_dto` constructors under `server::model`,
//! and server domain models are converted back into response DTOs via `into_dto`.

pub mod api;
pub mod employee;
pub mod link;
pub mod page;
pub mod vehicle;
pub mod yard;
pub mod yard_vehicle;
