//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds a unique prefixed identifier such as `yrd_test42`.
///
/// The prefix matches the one the server uses for the same entity so test rows
/// look like production rows.
///
/// # Arguments
/// - `prefix` - Entity prefix without the trailing underscore
///
/// # Returns
/// - `String` - Unique identifier for a test entity
pub fn next_prefixed_id(prefix: &str) -> String {
    format!("{}_test{}", prefix, next_id())
}

/// Creates a yard together with the address it requires.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((address, yard))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_yard_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::address::Model, entity::yard::Model), DbErr> {
    let address = crate::factory::address::create_address(db).await?;
    let yard = crate::factory::yard::create_yard(db, &address.id).await?;

    Ok((address, yard))
}

/// Creates a vehicle together with the model it requires.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((model, vehicle))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_vehicle_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::vehicle_model::Model, entity::vehicle::Model), DbErr> {
    let model = crate::factory::vehicle_model::create_vehicle_model(db).await?;
    let vehicle = crate::factory::vehicle::create_vehicle(db, &model.id).await?;

    Ok((model, vehicle))
}

/// Creates a yard vehicle along with its yard, address, vehicle, and model.
///
/// This creates:
/// 1. Address
/// 2. Yard
/// 3. Vehicle Model
/// 4. Vehicle
/// 5. Yard Vehicle
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((yard, vehicle, yard_vehicle))` - Tuple of the entities tests usually need
/// - `Err(DbErr)` - Database error during creation
pub async fn create_yard_vehicle_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::yard::Model,
        entity::vehicle::Model,
        entity::yard_vehicle::Model,
    ),
    DbErr,
> {
    let (_, yard) = create_yard_with_dependencies(db).await?;
    let (_, vehicle) = create_vehicle_with_dependencies(db).await?;
    let yard_vehicle =
        crate::factory::yard_vehicle::create_yard_vehicle(db, &yard.id, &vehicle.id).await?;

    Ok((yard, vehicle, yard_vehicle))
}
