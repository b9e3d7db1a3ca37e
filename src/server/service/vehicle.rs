use sea_orm::DatabaseConnection;

use crate::server::{
    data::{qr_code::QrCodeRepository, vehicle::VehicleRepository},
    error::AppError,
    model::vehicle::{CreateVehicleParams, Vehicle},
    service::aggregate::AggregateCreationCoordinator,
};

pub struct VehicleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a vehicle, linking or creating its model
    pub async fn create(&self, params: CreateVehicleParams) -> Result<Vehicle, AppError> {
        AggregateCreationCoordinator::new(self.db)
            .create_vehicle(params)
            .await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Vehicle>, AppError> {
        Ok(VehicleRepository::new(self.db).get_by_id(id).await?)
    }

    /// Looks up the vehicle a QR code is attached to.
    ///
    /// # Arguments
    /// - `qr_code_id` - QR code identifier
    ///
    /// # Returns
    /// - `Ok(Some(Vehicle))` - The QR code exists and is attached to a vehicle
    /// - `Ok(None)` - Unknown QR code, or the code is not attached to any vehicle
    /// - `Err(AppError::DbErr)` - Query failed
    pub async fn get_by_qr_code(&self, qr_code_id: &str) -> Result<Option<Vehicle>, AppError> {
        let qr_code = QrCodeRepository::new(self.db).get_by_id(qr_code_id).await?;

        let Some(vehicle_id) = qr_code.and_then(|code| code.vehicle_id) else {
            return Ok(None);
        };

        self.get_by_id(&vehicle_id).await
    }
}
