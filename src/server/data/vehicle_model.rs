use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::{
    model::vehicle::CreateVehicleModelParams,
    util::id::{generate_id, VEHICLE_MODEL_PREFIX},
};

pub struct VehicleModelRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleModelRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new vehicle model with a generated id
    pub async fn create(
        &self,
        params: CreateVehicleModelParams,
    ) -> Result<entity::vehicle_model::Model, DbErr> {
        entity::vehicle_model::ActiveModel {
            id: ActiveValue::Set(generate_id(VEHICLE_MODEL_PREFIX)),
            name: ActiveValue::Set(params.name),
            year: ActiveValue::Set(params.year),
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<entity::vehicle_model::Model>, DbErr> {
        entity::prelude::VehicleModel::find_by_id(id)
            .one(self.db)
            .await
    }
}
