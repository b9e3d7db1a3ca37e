//! Vehicle model factory for creating test vehicle model entities.

use crate::factory::helpers::{next_id, next_prefixed_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test vehicle models with customizable fields.
pub struct VehicleModelFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    year: i32,
}

impl<'a> VehicleModelFactory<'a> {
    /// Creates a new VehicleModelFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Model {id}"` where id is auto-incremented
    /// - year: `2020`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `VehicleModelFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: next_prefixed_id("mdl"),
            name: format!("Model {}", next_id()),
            year: 2020,
        }
    }

    /// Sets the model name.
    ///
    /// # Arguments
    /// - `name` - Display name of the model
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the model year.
    ///
    /// # Arguments
    /// - `year` - Model year
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Builds and inserts the vehicle model entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::vehicle_model::Model)` - Created vehicle model entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::vehicle_model::Model, DbErr> {
        entity::vehicle_model::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            year: ActiveValue::Set(self.year),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a vehicle model with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::vehicle_model::Model)` - Created vehicle model entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_vehicle_model(
    db: &DatabaseConnection,
) -> Result<entity::vehicle_model::Model, DbErr> {
    VehicleModelFactory::new(db).build().await
}
