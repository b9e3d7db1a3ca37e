//! Vehicle factory for creating test vehicle entities.

use crate::factory::helpers::{next_id, next_prefixed_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test vehicles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::vehicle::VehicleFactory;
///
/// let vehicle = VehicleFactory::new(&db, &model.id)
///     .plate("ABC1D23")
///     .build()
///     .await?;
/// ```
pub struct VehicleFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    plate: String,
    model_id: String,
    user_id: String,
}

impl<'a> VehicleFactory<'a> {
    /// Creates a new VehicleFactory with default values.
    ///
    /// Defaults:
    /// - plate: `"TST{id}"` where id is auto-incremented
    /// - user_id: `"user_{id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `model_id` - Vehicle model ID
    ///
    /// # Returns
    /// - `VehicleFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, model_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            id: next_prefixed_id("veh"),
            plate: format!("TST{:04}", id),
            model_id: model_id.into(),
            user_id: format!("user_{}", id),
        }
    }

    /// Sets the plate.
    ///
    /// # Arguments
    /// - `plate` - License plate
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn plate(mut self, plate: impl Into<String>) -> Self {
        self.plate = plate.into();
        self
    }

    /// Sets the owning user ID.
    ///
    /// # Arguments
    /// - `user_id` - Identity provider ID of the vehicle owner
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Builds and inserts the vehicle entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::vehicle::Model)` - Created vehicle entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::vehicle::Model, DbErr> {
        entity::vehicle::ActiveModel {
            id: ActiveValue::Set(self.id),
            plate: ActiveValue::Set(self.plate),
            model_id: ActiveValue::Set(self.model_id),
            user_id: ActiveValue::Set(self.user_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a vehicle with default values for the given model.
///
/// # Arguments
/// - `db` - Database connection
/// - `model_id` - Vehicle model ID
///
/// # Returns
/// - `Ok(entity::vehicle::Model)` - Created vehicle entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_vehicle(
    db: &DatabaseConnection,
    model_id: impl Into<String>,
) -> Result<entity::vehicle::Model, DbErr> {
    VehicleFactory::new(db, model_id).build().await
}
