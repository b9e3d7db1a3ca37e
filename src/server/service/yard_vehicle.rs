use sea_orm::DatabaseConnection;

use crate::server::{
    data::yard_vehicle::YardVehicleRepository,
    error::AppError,
    model::{
        page::{PageRequest, PageResult},
        yard_vehicle::{CreateYardVehicleParams, UpdateYardVehicleParams, YardVehicle},
    },
    service::aggregate::AggregateCreationCoordinator,
};

pub struct YardVehicleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> YardVehicleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a vehicle in a yard, linking or creating the vehicle and its model
    pub async fn create(&self, params: CreateYardVehicleParams) -> Result<YardVehicle, AppError> {
        AggregateCreationCoordinator::new(self.db)
            .create_yard_vehicle(params)
            .await
    }

    /// Gets a yard vehicle only if it belongs to the given yard
    pub async fn get_in_yard(
        &self,
        yard_id: &str,
        id: &str,
    ) -> Result<Option<YardVehicle>, AppError> {
        let yard_vehicle = YardVehicleRepository::new(self.db).get_by_id(id).await?;

        Ok(yard_vehicle.filter(|yv| yv.yard_id == yard_id))
    }

    pub async fn get_paginated(
        &self,
        yard_id: &str,
        page: PageRequest,
    ) -> Result<PageResult<YardVehicle>, AppError> {
        Ok(YardVehicleRepository::new(self.db)
            .get_by_yard_paginated(yard_id, page)
            .await?)
    }

    /// Updates status and timestamps of a yard vehicle.
    /// Returns None if it doesn't exist or doesn't belong to the yard
    pub async fn update(
        &self,
        yard_id: &str,
        id: &str,
        params: UpdateYardVehicleParams,
    ) -> Result<Option<YardVehicle>, AppError> {
        if self.get_in_yard(yard_id, id).await?.is_none() {
            return Ok(None);
        }

        Ok(YardVehicleRepository::new(self.db).update(id, params).await?)
    }

    /// Deletes a yard vehicle record; the vehicle itself is kept.
    /// Returns false if not found or doesn't belong to the yard
    pub async fn delete(&self, yard_id: &str, id: &str) -> Result<bool, AppError> {
        if self.get_in_yard(yard_id, id).await?.is_none() {
            return Ok(false);
        }

        Ok(YardVehicleRepository::new(self.db).delete(id).await?)
    }
}
