//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the parent IDs they need as arguments,
//! and the helpers module builds whole yard hierarchies in one call.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let model = factory::create_vehicle_model(&db).await?;
//!     let vehicle = factory::create_vehicle(&db, &model.id).await?;
//!
//!     // Create with all dependencies
//!     let (address, yard) = factory::helpers::create_yard_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let employee = factory::yard_employee::YardEmployeeFactory::new(&db, &yard.id)
//!     .name("Maria")
//!     .role(EmployeeRole::Admin)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `address` - Create address entities
//! - `yard` - Create yard entities
//! - `vehicle_model` - Create vehicle model entities
//! - `vehicle` - Create vehicle entities
//! - `yard_vehicle` - Create yard vehicle entities
//! - `yard_employee` - Create yard employee entities
//! - `qr_code` - Create QR code entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod address;
pub mod helpers;
pub mod qr_code;
pub mod vehicle;
pub mod vehicle_model;
pub mod yard;
pub mod yard_employee;
pub mod yard_vehicle;

// Re-export commonly used factory functions for concise usage
pub use address::create_address;
pub use qr_code::create_qr_code;
pub use vehicle::create_vehicle;
pub use vehicle_model::create_vehicle_model;
pub use yard::create_yard;
pub use yard_employee::create_yard_employee;
pub use yard_vehicle::create_yard_vehicle;
