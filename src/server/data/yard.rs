use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::{
        page::{PageRequest, PageResult},
        yard::{CreateAddressParams, UpdateYardParams, Yard},
    },
    util::id::{generate_id, ADDRESS_PREFIX, YARD_PREFIX},
};

pub struct YardRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> YardRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new address with a generated id.
    ///
    /// # Arguments
    /// - `params` - Validated address fields
    ///
    /// # Returns
    /// - `Ok(entity::address::Model)` - Inserted address including its id
    /// - `Err(DbErr)` - Insert failed
    pub async fn create_address(
        &self,
        params: CreateAddressParams,
    ) -> Result<entity::address::Model, DbErr> {
        entity::address::ActiveModel {
            id: ActiveValue::Set(generate_id(ADDRESS_PREFIX)),
            country: ActiveValue::Set(params.country),
            state: ActiveValue::Set(params.state),
            city: ActiveValue::Set(params.city),
            zip_code: ActiveValue::Set(params.zip_code),
            neighborhood: ActiveValue::Set(params.neighborhood),
            complement: ActiveValue::Set(params.complement),
        }
        .insert(self.db)
        .await
    }

    /// Inserts a yard at an already persisted address.
    ///
    /// # Arguments
    /// - `owner_id` - Identity provider ID of the owner
    /// - `address` - Address row the yard references
    ///
    /// # Returns
    /// - `Ok(Yard)` - Inserted yard with its address
    /// - `Err(DbErr)` - Insert failed, e.g. the address already belongs to another yard
    pub async fn create(
        &self,
        owner_id: String,
        address: entity::address::Model,
    ) -> Result<Yard, DbErr> {
        let yard = entity::yard::ActiveModel {
            id: ActiveValue::Set(generate_id(YARD_PREFIX)),
            owner_id: ActiveValue::Set(owner_id),
            address_id: ActiveValue::Set(address.id.clone()),
        }
        .insert(self.db)
        .await?;

        Ok(Yard::from_entity(yard, address))
    }

    /// Gets a yard by ID with its address
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Yard>, DbErr> {
        let result = entity::prelude::Yard::find_by_id(id)
            .find_also_related(entity::prelude::Address)
            .one(self.db)
            .await?;

        result.map(Self::with_address).transpose()
    }

    /// Checks whether a yard with the given ID exists
    pub async fn exists(&self, id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Yard::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Gets one page of yards ordered by ID.
    ///
    /// # Arguments
    /// - `page` - Validated 1-indexed page request
    ///
    /// # Returns
    /// - `Ok(PageResult<Yard>)` - Requested page and total counts
    /// - `Err(DbErr)` - Query failed
    pub async fn get_paginated(&self, page: PageRequest) -> Result<PageResult<Yard>, DbErr> {
        let paginator = entity::prelude::Yard::find()
            .find_also_related(entity::prelude::Address)
            .order_by_asc(entity::yard::Column::Id)
            .paginate(self.db, page.page_size);

        let total = paginator.num_items().await?;
        let rows = match page.index_within(total) {
            Some(index) => paginator.fetch_page(index).await?,
            None => Vec::new(),
        };

        let yards = rows
            .into_iter()
            .map(Self::with_address)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PageResult::paginate(
            total,
            page.page_number,
            page.page_size,
            yards,
        ))
    }

    /// Updates a yard's own fields.
    ///
    /// Fields left as `None` are not changed.
    ///
    /// # Returns
    /// - `Ok(Some(Yard))` - Updated yard
    /// - `Ok(None)` - No yard with that ID
    /// - `Err(DbErr)` - Query or update failed
    pub async fn update(&self, id: &str, params: UpdateYardParams) -> Result<Option<Yard>, DbErr> {
        let Some(yard) = entity::prelude::Yard::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::yard::ActiveModel = yard.into();
        if let Some(owner_id) = params.owner_id {
            active_model.owner_id = ActiveValue::Set(owner_id);
        }
        if active_model.is_changed() {
            active_model.update(self.db).await?;
        }

        self.get_by_id(id).await
    }

    /// Deletes a yard together with its employees, yard vehicles, QR codes and address.
    ///
    /// Vehicles that were in the yard are kept. Callers run this inside a transaction
    /// so every row goes together.
    ///
    /// # Returns
    /// - `Ok(true)` - Yard and address deleted
    /// - `Ok(false)` - No yard with that ID
    /// - `Err(DbErr)` - Delete failed
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let Some(yard) = entity::prelude::Yard::find_by_id(id).one(self.db).await? else {
            return Ok(false);
        };

        entity::prelude::YardEmployee::delete_many()
            .filter(entity::yard_employee::Column::YardId.eq(id))
            .exec(self.db)
            .await?;
        entity::prelude::YardVehicle::delete_many()
            .filter(entity::yard_vehicle::Column::YardId.eq(id))
            .exec(self.db)
            .await?;
        entity::prelude::QrCode::delete_many()
            .filter(entity::qr_code::Column::YardId.eq(id))
            .exec(self.db)
            .await?;

        let address_id = yard.address_id.clone();
        yard.delete(self.db).await?;

        entity::prelude::Address::delete_by_id(address_id)
            .exec(self.db)
            .await?;

        Ok(true)
    }

    fn with_address(
        (yard, address): (entity::yard::Model, Option<entity::address::Model>),
    ) -> Result<Yard, DbErr> {
        let address = address.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "Address {} of yard {} not found",
                yard.address_id, yard.id
            ))
        })?;

        Ok(Yard::from_entity(yard, address))
    }
}
