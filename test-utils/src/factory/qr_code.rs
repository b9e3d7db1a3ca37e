//! QR code factory for creating test QR code entities.

use crate::factory::helpers::next_prefixed_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test QR codes issued by a yard.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::qr_code::QrCodeFactory;
///
/// let qr_code = QrCodeFactory::new(&db, &yard.id)
///     .vehicle_id(&vehicle.id)
///     .build()
///     .await?;
/// ```
pub struct QrCodeFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    vehicle_id: Option<String>,
    yard_id: String,
}

impl<'a> QrCodeFactory<'a> {
    /// Creates a new QrCodeFactory for a code not attached to any vehicle.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `yard_id` - Yard that issued the QR code
    ///
    /// # Returns
    /// - `QrCodeFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, yard_id: impl Into<String>) -> Self {
        Self {
            db,
            id: next_prefixed_id("qr"),
            vehicle_id: None,
            yard_id: yard_id.into(),
        }
    }

    /// Attaches the code to a vehicle.
    pub fn vehicle_id(mut self, vehicle_id: impl Into<String>) -> Self {
        self.vehicle_id = Some(vehicle_id.into());
        self
    }

    /// Builds and inserts the QR code entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::qr_code::Model)` - Created QR code entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::qr_code::Model, DbErr> {
        entity::qr_code::ActiveModel {
            id: ActiveValue::Set(self.id),
            vehicle_id: ActiveValue::Set(self.vehicle_id),
            yard_id: ActiveValue::Set(self.yard_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a QR code in a yard, optionally attached to a vehicle.
///
/// # Arguments
/// - `db` - Database connection
/// - `yard_id` - Yard that issued the QR code
/// - `vehicle_id` - Vehicle the code is attached to, if any
///
/// # Returns
/// - `Ok(entity::qr_code::Model)` - Created QR code entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_qr_code(
    db: &DatabaseConnection,
    yard_id: impl Into<String>,
    vehicle_id: Option<String>,
) -> Result<entity::qr_code::Model, DbErr> {
    let factory = QrCodeFactory::new(db, yard_id);

    match vehicle_id {
        Some(vehicle_id) => factory.vehicle_id(vehicle_id).build().await,
        None => factory.build().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::helpers::{
        create_yard_vehicle_with_dependencies, create_yard_with_dependencies,
    };

    #[tokio::test]
    async fn creates_qr_code_attached_to_vehicle() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_yard_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (yard, vehicle, _) = create_yard_vehicle_with_dependencies(db).await?;
        let qr_code = create_qr_code(db, &yard.id, Some(vehicle.id.clone())).await?;

        assert!(qr_code.id.starts_with("qr_"));
        assert_eq!(qr_code.vehicle_id, Some(vehicle.id));

        Ok(())
    }

    #[tokio::test]
    async fn creates_unattached_qr_code() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_yard_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, yard) = create_yard_with_dependencies(db).await?;
        let qr_code = QrCodeFactory::new(db, &yard.id).build().await?;

        assert_eq!(qr_code.yard_id, yard.id);
        assert!(qr_code.vehicle_id.is_none());

        Ok(())
    }
}
