use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::YardVehicleStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::{
    data::vehicle::with_model,
    model::{
        page::{PageRequest, PageResult},
        vehicle::Vehicle,
        yard_vehicle::{UpdateYardVehicleParams, YardVehicle},
    },
    util::id::{generate_id, YARD_VEHICLE_PREFIX},
};

/// Fields of a new yard vehicle row once its vehicle has been resolved.
pub struct NewYardVehicle {
    pub yard_id: String,
    pub status: YardVehicleStatus,
    pub entered_at: DateTime<Utc>,
    pub left_at: Option<DateTime<Utc>>,
}

pub struct YardVehicleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> YardVehicleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a yard vehicle for an already persisted vehicle.
    ///
    /// # Arguments
    /// - `new` - Yard vehicle fields
    /// - `vehicle` - Vehicle the record refers to
    ///
    /// # Returns
    /// - `Ok(YardVehicle)` - Inserted record with its vehicle
    /// - `Err(DbErr)` - Insert failed, e.g. the yard does not exist
    pub async fn create(&self, new: NewYardVehicle, vehicle: Vehicle) -> Result<YardVehicle, DbErr> {
        let yard_vehicle = entity::yard_vehicle::ActiveModel {
            id: ActiveValue::Set(generate_id(YARD_VEHICLE_PREFIX)),
            status: ActiveValue::Set(new.status),
            entered_at: ActiveValue::Set(new.entered_at),
            left_at: ActiveValue::Set(new.left_at),
            vehicle_id: ActiveValue::Set(vehicle.id.clone()),
            yard_id: ActiveValue::Set(new.yard_id),
        }
        .insert(self.db)
        .await?;

        Ok(YardVehicle::from_entity(yard_vehicle, vehicle))
    }

    /// Gets a yard vehicle by ID with its vehicle and model
    pub async fn get_by_id(&self, id: &str) -> Result<Option<YardVehicle>, DbErr> {
        let Some(yard_vehicle) = entity::prelude::YardVehicle::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut loaded = self.load_vehicles(vec![yard_vehicle]).await?;

        Ok(loaded.pop())
    }

    /// Gets one page of the vehicles recorded in a yard, ordered by ID.
    ///
    /// # Arguments
    /// - `yard_id` - Yard to list
    /// - `page` - Validated 1-indexed page request
    ///
    /// # Returns
    /// - `Ok(PageResult<YardVehicle>)` - Requested page and total counts
    /// - `Err(DbErr)` - Query failed
    pub async fn get_by_yard_paginated(
        &self,
        yard_id: &str,
        page: PageRequest,
    ) -> Result<PageResult<YardVehicle>, DbErr> {
        let paginator = entity::prelude::YardVehicle::find()
            .filter(entity::yard_vehicle::Column::YardId.eq(yard_id))
            .order_by_asc(entity::yard_vehicle::Column::Id)
            .paginate(self.db, page.page_size);

        let total = paginator.num_items().await?;
        let rows = match page.index_within(total) {
            Some(index) => paginator.fetch_page(index).await?,
            None => Vec::new(),
        };

        let items = self.load_vehicles(rows).await?;

        Ok(PageResult::paginate(
            total,
            page.page_number,
            page.page_size,
            items,
        ))
    }

    /// Updates a yard vehicle's own fields.
    ///
    /// Fields left as `None` are not changed.
    ///
    /// # Returns
    /// - `Ok(Some(YardVehicle))` - Updated record
    /// - `Ok(None)` - No yard vehicle with that ID
    /// - `Err(DbErr)` - Query or update failed
    pub async fn update(
        &self,
        id: &str,
        params: UpdateYardVehicleParams,
    ) -> Result<Option<YardVehicle>, DbErr> {
        let Some(yard_vehicle) = entity::prelude::YardVehicle::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::yard_vehicle::ActiveModel = yard_vehicle.into();
        if let Some(status) = params.status {
            active_model.status = ActiveValue::Set(status);
        }
        if let Some(entered_at) = params.entered_at {
            active_model.entered_at = ActiveValue::Set(entered_at);
        }
        if let Some(left_at) = params.left_at {
            active_model.left_at = ActiveValue::Set(Some(left_at));
        }
        if active_model.is_changed() {
            active_model.update(self.db).await?;
        }

        self.get_by_id(id).await
    }

    /// Deletes a yard vehicle, returning whether a row was removed
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::YardVehicle::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Attaches vehicles and their models to yard vehicle rows, keeping row order.
    async fn load_vehicles(
        &self,
        rows: Vec<entity::yard_vehicle::Model>,
    ) -> Result<Vec<YardVehicle>, DbErr> {
        let vehicle_ids: Vec<String> = rows.iter().map(|r| r.vehicle_id.clone()).collect();

        let vehicles: HashMap<String, Vehicle> = entity::prelude::Vehicle::find()
            .find_also_related(entity::prelude::VehicleModel)
            .filter(entity::vehicle::Column::Id.is_in(vehicle_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(with_model)
            .map(|vehicle| vehicle.map(|v| (v.id.clone(), v)))
            .collect::<Result<_, _>>()?;

        rows.into_iter()
            .map(|row| {
                let vehicle = vehicles.get(&row.vehicle_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Vehicle {} of yard vehicle {} not found",
                        row.vehicle_id, row.id
                    ))
                })?;
                Ok(YardVehicle::from_entity(row, vehicle))
            })
            .collect()
    }
}
