//! Yard vehicle factory for creating test yard vehicle entities.

use crate::factory::helpers::next_prefixed_id;
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::YardVehicleStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test yard vehicles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::yard_vehicle::YardVehicleFactory;
///
/// let yard_vehicle = YardVehicleFactory::new(&db, &yard.id, &vehicle.id)
///     .status(YardVehicleStatus::OnService)
///     .build()
///     .await?;
/// ```
pub struct YardVehicleFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    status: YardVehicleStatus,
    entered_at: DateTime<Utc>,
    left_at: Option<DateTime<Utc>>,
    vehicle_id: String,
    yard_id: String,
}

impl<'a> YardVehicleFactory<'a> {
    /// Creates a new YardVehicleFactory with default values.
    ///
    /// Defaults:
    /// - status: `YardVehicleStatus::Waiting`
    /// - entered_at: now
    /// - left_at: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `yard_id` - Yard the vehicle is in
    /// - `vehicle_id` - Vehicle being tracked
    ///
    /// # Returns
    /// - `YardVehicleFactory` - New factory instance with defaults
    pub fn new(
        db: &'a DatabaseConnection,
        yard_id: impl Into<String>,
        vehicle_id: impl Into<String>,
    ) -> Self {
        Self {
            db,
            id: next_prefixed_id("yvh"),
            status: YardVehicleStatus::Waiting,
            entered_at: Utc::now(),
            left_at: None,
            vehicle_id: vehicle_id.into(),
            yard_id: yard_id.into(),
        }
    }

    /// Sets the status.
    ///
    /// # Arguments
    /// - `status` - Status of the vehicle within the yard
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn status(mut self, status: YardVehicleStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the entry time.
    ///
    /// # Arguments
    /// - `entered_at` - Time the vehicle entered the yard
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn entered_at(mut self, entered_at: DateTime<Utc>) -> Self {
        self.entered_at = entered_at;
        self
    }

    /// Sets the exit time.
    ///
    /// # Arguments
    /// - `left_at` - Time the vehicle left the yard, if it has
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn left_at(mut self, left_at: Option<DateTime<Utc>>) -> Self {
        self.left_at = left_at;
        self
    }

    /// Builds and inserts the yard vehicle entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::yard_vehicle::Model)` - Created yard vehicle entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::yard_vehicle::Model, DbErr> {
        entity::yard_vehicle::ActiveModel {
            id: ActiveValue::Set(self.id),
            status: ActiveValue::Set(self.status),
            entered_at: ActiveValue::Set(self.entered_at),
            left_at: ActiveValue::Set(self.left_at),
            vehicle_id: ActiveValue::Set(self.vehicle_id),
            yard_id: ActiveValue::Set(self.yard_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a yard vehicle with default values.
///
/// # Arguments
/// - `db` - Database connection
/// - `yard_id` - Yard ID
/// - `vehicle_id` - Vehicle ID
///
/// # Returns
/// - `Ok(entity::yard_vehicle::Model)` - Created yard vehicle entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_yard_vehicle(
    db: &DatabaseConnection,
    yard_id: impl Into<String>,
    vehicle_id: impl Into<String>,
) -> Result<entity::yard_vehicle::Model, DbErr> {
    YardVehicleFactory::new(db, yard_id, vehicle_id)
        .build()
        .await
}
