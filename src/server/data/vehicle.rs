use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::{
    model::vehicle::Vehicle,
    util::id::{generate_id, VEHICLE_PREFIX},
};

pub struct VehicleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a vehicle referencing an already persisted model.
    ///
    /// # Arguments
    /// - `plate` - License plate
    /// - `user_id` - Identity provider ID of the owner
    /// - `model` - Model row the vehicle references
    ///
    /// # Returns
    /// - `Ok(Vehicle)` - Inserted vehicle with its model
    /// - `Err(DbErr)` - Insert failed
    pub async fn create(
        &self,
        plate: String,
        user_id: String,
        model: entity::vehicle_model::Model,
    ) -> Result<Vehicle, DbErr> {
        let vehicle = entity::vehicle::ActiveModel {
            id: ActiveValue::Set(generate_id(VEHICLE_PREFIX)),
            plate: ActiveValue::Set(plate),
            model_id: ActiveValue::Set(model.id.clone()),
            user_id: ActiveValue::Set(user_id),
        }
        .insert(self.db)
        .await?;

        Ok(Vehicle::from_entity(vehicle, model))
    }

    /// Gets a vehicle by ID with its model
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Vehicle>, DbErr> {
        let result = entity::prelude::Vehicle::find_by_id(id)
            .find_also_related(entity::prelude::VehicleModel)
            .one(self.db)
            .await?;

        result.map(with_model).transpose()
    }
}

/// Pairs a vehicle row with its model row, failing when the model is missing.
pub(super) fn with_model(
    (vehicle, model): (entity::vehicle::Model, Option<entity::vehicle_model::Model>),
) -> Result<Vehicle, DbErr> {
    let model = model.ok_or_else(|| {
        DbErr::RecordNotFound(format!(
            "Model {} of vehicle {} not found",
            vehicle.model_id, vehicle.id
        ))
    })?;

    Ok(Vehicle::from_entity(vehicle, model))
}
